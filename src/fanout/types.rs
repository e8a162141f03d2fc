use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanoutPolicy {
    /// One link per variation, templates reused round-robin.
    #[default]
    Indexed,
    /// Every variation paired with every template.
    CrossProduct,
}

impl FanoutPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FanoutPolicy::Indexed => "indexed",
            FanoutPolicy::CrossProduct => "cross_product",
        }
    }
}

impl fmt::Display for FanoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanoutPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indexed" | "index" => Ok(FanoutPolicy::Indexed),
            "cross" | "cross_product" | "cross-product" | "full" => Ok(FanoutPolicy::CrossProduct),
            _ => Err(ConfigError::InvalidValue {
                key: "fanout policy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// One variation paired with one search URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLink {
    pub title: String,
    pub url: String,
}

/// One variation with all of its search URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationLinks {
    pub phrase: String,
    pub urls: Vec<String>,
}

/// Result of a fanout; the shape follows the policy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fanout {
    Flat(Vec<SearchLink>),
    Grouped(Vec<VariationLinks>),
}

impl Fanout {
    /// Total number of URLs across all variations.
    pub fn link_count(&self) -> usize {
        match self {
            Fanout::Flat(links) => links.len(),
            Fanout::Grouped(groups) => groups.iter().map(|g| g.urls.len()).sum(),
        }
    }
}
