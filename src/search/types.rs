use crate::fanout::types::{Fanout, FanoutPolicy, SearchLink, VariationLinks};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

impl SearchParams {
    /// Builds params from raw query pairs. A repeated `query` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value);

        Self { query }
    }
}

/// Body of a successful `/search` response.
///
/// `results` is used with the indexed policy, `variations` with the cross-product
/// policy. A running service always answers in one of the two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Flat { results: Vec<SearchLink> },
    Grouped { variations: Vec<VariationLinks> },
}

impl From<Fanout> for SearchResponse {
    fn from(fanout: Fanout) -> Self {
        match fanout {
            Fanout::Flat(results) => SearchResponse::Flat { results },
            Fanout::Grouped(variations) => SearchResponse::Grouped { variations },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub templates: usize,
    pub max_variations: usize,
    pub fanout: FanoutPolicy,
}
