//! Bounded Variation Generator
//!
//! Produces `[phrase, variant, variant, ...]` by swapping one word at a time for
//! one of its synonyms. The output order is fixed: original phrase first, then
//! tokens left to right, and for each token its synonyms in provider order.

use super::tokenizer::Tokenizer;
use crate::error::{ConfigError, TokenizationError};
use crate::synonyms::provider::SynonymProvider;

use futures::future::join_all;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// How per-token synonym lookups are scheduled.
///
/// Both strategies yield identical output for the same provider answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStrategy {
    /// One lookup at a time; stops querying once the cap is reached.
    #[default]
    Sequential,
    /// All lookups in flight at once, results reassembled in token order.
    Concurrent,
}

impl FromStr for LookupStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(LookupStrategy::Sequential),
            "concurrent" | "parallel" => Ok(LookupStrategy::Concurrent),
            _ => Err(ConfigError::InvalidValue {
                key: "lookup strategy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

pub struct VariationGenerator {
    tokenizer: Arc<dyn Tokenizer>,
    provider: Arc<dyn SynonymProvider>,
    lookup_timeout: Duration,
    strategy: LookupStrategy,
}

impl VariationGenerator {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, provider: Arc<dyn SynonymProvider>) -> Self {
        Self {
            tokenizer,
            provider,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            strategy: LookupStrategy::default(),
        }
    }

    /// Upper bound for a single word's lookup. A lookup that runs longer
    /// counts as "no synonyms" for that word.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn with_strategy(mut self, strategy: LookupStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Generates at most `max_variations` phrases, the first of which is always
    /// `phrase` itself. A cap of 0 behaves like 1.
    ///
    /// Failed or timed-out lookups are skipped. Only a tokenizer failure is
    /// returned as an error.
    pub async fn generate(
        &self,
        phrase: &str,
        max_variations: usize,
    ) -> Result<Vec<String>, TokenizationError> {
        let cap = max_variations.max(1);
        let tokens = self.tokenizer.tokenize(phrase)?;

        let mut variations = vec![phrase.to_string()];
        if variations.len() >= cap {
            return Ok(variations);
        }

        match self.strategy {
            LookupStrategy::Sequential => {
                for token in &tokens {
                    let synonyms = self.lookup(token).await;
                    if push_substitutions(phrase, token, &synonyms, &mut variations, cap) {
                        break;
                    }
                }
            }
            LookupStrategy::Concurrent => {
                let lookups = join_all(tokens.iter().map(|token| self.lookup(token))).await;
                for (token, synonyms) in tokens.iter().zip(lookups) {
                    if push_substitutions(phrase, token, &synonyms, &mut variations, cap) {
                        break;
                    }
                }
            }
        }

        tracing::debug!(
            "Generated {} variation(s) from {} token(s) (cap {})",
            variations.len(),
            tokens.len(),
            cap
        );

        Ok(variations)
    }

    async fn lookup(&self, word: &str) -> Vec<String> {
        match tokio::time::timeout(self.lookup_timeout, self.provider.lookup(word)).await {
            Ok(Ok(synonyms)) => {
                tracing::trace!("'{}' -> {} synonym(s)", word, synonyms.len());
                synonyms
            }
            Ok(Err(e)) => {
                tracing::warn!("Skipping '{}': {}", word, e);
                Vec::new()
            }
            Err(_) => {
                tracing::warn!(
                    "Skipping '{}': lookup timed out after {:?}",
                    word,
                    self.lookup_timeout
                );
                Vec::new()
            }
        }
    }
}

/// Appends one variant per synonym. Returns `true` once the cap is reached.
fn push_substitutions(
    phrase: &str,
    token: &str,
    synonyms: &[String],
    variations: &mut Vec<String>,
    cap: usize,
) -> bool {
    for synonym in synonyms {
        // First literal occurrence only, even when `token` repeats in the phrase.
        variations.push(phrase.replacen(token, synonym, 1));
        if variations.len() >= cap {
            return true;
        }
    }
    false
}
