use serde::{Deserialize, Serialize};

/// One entry of the upstream `/words` response.
///
/// Only `word` is used as a candidate synonym; the rest is tolerated so that
/// richer payloads still decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub word: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}
