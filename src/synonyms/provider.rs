use crate::error::SynonymLookupError;

use async_trait::async_trait;
use std::collections::HashMap;

/// Source of replacement words.
///
/// `lookup` receives a single non-empty token and returns candidates in the
/// provider's relevance order. Duplicates are passed through untouched.
#[async_trait]
pub trait SynonymProvider: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Vec<String>, SynonymLookupError>;
}

/// Fixed word -> synonyms table. Unknown words have no synonyms.
#[derive(Debug, Clone, Default)]
pub struct StaticSynonyms {
    entries: HashMap<String, Vec<String>>,
}

impl StaticSynonyms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, word: &str, synonyms: &[&str]) -> Self {
        self.insert(word, synonyms);
        self
    }

    pub fn insert(&mut self, word: &str, synonyms: &[&str]) {
        self.entries.insert(
            word.to_string(),
            synonyms.iter().map(|s| s.to_string()).collect(),
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl SynonymProvider for StaticSynonyms {
    async fn lookup(&self, word: &str) -> Result<Vec<String>, SynonymLookupError> {
        Ok(self.entries.get(word).cloned().unwrap_or_default())
    }
}
