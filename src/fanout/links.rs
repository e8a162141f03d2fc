use super::templates::{build_search_url, parse_template};
use super::types::{Fanout, FanoutPolicy, SearchLink, VariationLinks};
use crate::error::TemplateParseError;

/// Pairs variations with an owned, ordered list of URL templates.
#[derive(Debug, Clone)]
pub struct LinkFanout {
    templates: Vec<String>,
    policy: FanoutPolicy,
}

impl LinkFanout {
    pub fn new(templates: Vec<String>, policy: FanoutPolicy) -> Self {
        Self { templates, policy }
    }

    pub fn policy(&self) -> FanoutPolicy {
        self.policy
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Returns the parse error of every template that cannot produce links.
    pub fn validate(&self) -> Vec<TemplateParseError> {
        self.templates
            .iter()
            .filter_map(|template| parse_template(template).err())
            .collect()
    }

    pub fn fanout(&self, variations: &[String]) -> Fanout {
        match self.policy {
            FanoutPolicy::Indexed => Fanout::Flat(self.indexed(variations)),
            FanoutPolicy::CrossProduct => Fanout::Grouped(self.cross_product(variations)),
        }
    }

    fn indexed(&self, variations: &[String]) -> Vec<SearchLink> {
        if self.templates.is_empty() {
            return Vec::new();
        }

        variations
            .iter()
            .enumerate()
            .filter_map(|(i, variation)| {
                let template = &self.templates[i % self.templates.len()];
                build_link(template, variation).map(|url| SearchLink {
                    title: variation.clone(),
                    url,
                })
            })
            .collect()
    }

    fn cross_product(&self, variations: &[String]) -> Vec<VariationLinks> {
        variations
            .iter()
            .map(|variation| VariationLinks {
                phrase: variation.clone(),
                urls: self
                    .templates
                    .iter()
                    .filter_map(|template| build_link(template, variation))
                    .collect(),
            })
            .collect()
    }
}

fn build_link(template: &str, variation: &str) -> Option<String> {
    match build_search_url(template, variation) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Omitting link for '{}': {}", variation, e);
            None
        }
    }
}
