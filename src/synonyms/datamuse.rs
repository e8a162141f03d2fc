//! Datamuse Client
//!
//! Calls `GET {base_url}/words?rel_syn=<word>` and keeps the `word` field of every
//! returned entry, in response order.

use super::provider::SynonymProvider;
use super::types::SynonymEntry;
use crate::error::SynonymLookupError;

use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_SYNONYM_URL: &str = "https://api.datamuse.com";
pub const ENDPOINT_WORDS: &str = "/words";

pub struct DatamuseProvider {
    http_client: reqwest::Client,
    base_url: String,
}

impl DatamuseProvider {
    /// `timeout` bounds each HTTP request end to end.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn words_url(&self) -> String {
        format!("{}{}", self.base_url, ENDPOINT_WORDS)
    }
}

#[async_trait]
impl SynonymProvider for DatamuseProvider {
    async fn lookup(&self, word: &str) -> Result<Vec<String>, SynonymLookupError> {
        let response = self
            .http_client
            .get(self.words_url())
            .query(&[("rel_syn", word)])
            .send()
            .await
            .map_err(|source| SynonymLookupError::Transport {
                word: word.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SynonymLookupError::Status {
                word: word.to_string(),
                status,
            });
        }

        let entries: Vec<SynonymEntry> =
            response
                .json()
                .await
                .map_err(|source| SynonymLookupError::Decode {
                    word: word.to_string(),
                    source,
                })?;

        tracing::debug!("Synonym service returned {} entries for '{}'", entries.len(), word);

        Ok(entries.into_iter().map(|entry| entry.word).collect())
    }
}
