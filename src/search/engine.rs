use super::types::{HealthResponse, SearchResponse};
use crate::config::ServiceConfig;
use crate::error::{EmptyQueryError, SearchError};
use crate::fanout::links::LinkFanout;
use crate::synonyms::datamuse::DatamuseProvider;
use crate::variations::generator::VariationGenerator;
use crate::variations::tokenizer::UnicodeTokenizer;

use std::sync::Arc;

/// One configured instance of the search pipeline.
///
/// Holds no per-request state; a single instance is shared by all handlers.
pub struct SearchService {
    generator: VariationGenerator,
    fanout: LinkFanout,
    max_variations: usize,
}

impl SearchService {
    pub fn new(generator: VariationGenerator, fanout: LinkFanout, max_variations: usize) -> Self {
        Self {
            generator,
            fanout,
            max_variations,
        }
    }

    /// Wires the Unicode tokenizer and the HTTP synonym client from `config`.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, reqwest::Error> {
        let provider = DatamuseProvider::new(&config.synonym_base_url, config.lookup_timeout)?;
        let generator = VariationGenerator::new(Arc::new(UnicodeTokenizer), Arc::new(provider))
            .with_lookup_timeout(config.lookup_timeout)
            .with_strategy(config.lookup_strategy);
        let fanout = LinkFanout::new(config.templates.clone(), config.fanout_policy);

        Ok(Self::new(generator, fanout, config.max_variations))
    }

    pub fn fanout(&self) -> &LinkFanout {
        &self.fanout
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        if query.is_empty() {
            return Err(EmptyQueryError.into());
        }

        let variations = self.generator.generate(query, self.max_variations).await?;
        let fanout = self.fanout.fanout(&variations);

        tracing::info!(
            "'{}' -> {} variation(s), {} link(s)",
            query,
            variations.len(),
            fanout.link_count()
        );

        Ok(fanout.into())
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            templates: self.fanout.templates().len(),
            max_variations: self.max_variations,
            fanout: self.fanout.policy(),
        }
    }
}
