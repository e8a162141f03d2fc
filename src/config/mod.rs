//! Service Configuration
//!
//! Settings are layered: built-in defaults, then environment variables, then
//! command-line flags. Every value is validated once at startup; a bad value stops
//! the process before the listener is bound.
//!
//! | Setting          | Env var             | Flag                  | Default                    |
//! |------------------|---------------------|-----------------------|----------------------------|
//! | bind address     | `SEARCH_BIND`       | `--bind`              | `127.0.0.1:8080`           |
//! | synonym service  | `SYNONYM_URL`       | `--synonym-url`       | `https://api.datamuse.com` |
//! | variation cap    | `MAX_VARIATIONS`    | `--max-variations`    | `7`                        |
//! | fanout policy    | `FANOUT_POLICY`     | `--fanout`            | `indexed`                  |
//! | lookup strategy  | `LOOKUP_STRATEGY`   | `--lookup`            | `sequential`               |
//! | lookup timeout   | `LOOKUP_TIMEOUT_MS` | `--lookup-timeout-ms` | `3000`                     |
//! | URL templates    | `SEARCH_TEMPLATES`  |                       | seven built-in engines     |

use crate::error::ConfigError;
use crate::fanout::templates::default_templates;
use crate::fanout::types::FanoutPolicy;
use crate::synonyms::datamuse::DEFAULT_SYNONYM_URL;
use crate::variations::generator::{DEFAULT_LOOKUP_TIMEOUT, LookupStrategy};

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_BIND: &str = "SEARCH_BIND";
pub const ENV_SYNONYM_URL: &str = "SYNONYM_URL";
pub const ENV_MAX_VARIATIONS: &str = "MAX_VARIATIONS";
pub const ENV_FANOUT_POLICY: &str = "FANOUT_POLICY";
pub const ENV_LOOKUP_STRATEGY: &str = "LOOKUP_STRATEGY";
pub const ENV_LOOKUP_TIMEOUT_MS: &str = "LOOKUP_TIMEOUT_MS";
pub const ENV_TEMPLATES: &str = "SEARCH_TEMPLATES";

pub const DEFAULT_MAX_VARIATIONS: usize = 7;

const ENV_KEYS: [&str; 7] = [
    ENV_BIND,
    ENV_SYNONYM_URL,
    ENV_MAX_VARIATIONS,
    ENV_FANOUT_POLICY,
    ENV_LOOKUP_STRATEGY,
    ENV_LOOKUP_TIMEOUT_MS,
    ENV_TEMPLATES,
];

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub synonym_base_url: String,
    pub max_variations: usize,
    pub fanout_policy: FanoutPolicy,
    pub lookup_strategy: LookupStrategy,
    pub lookup_timeout: Duration,
    pub templates: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            synonym_base_url: DEFAULT_SYNONYM_URL.to_string(),
            max_variations: DEFAULT_MAX_VARIATIONS,
            fanout_policy: FanoutPolicy::default(),
            lookup_strategy: LookupStrategy::default(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            templates: default_templates(),
        }
    }
}

impl ServiceConfig {
    /// Defaults, overridden by the process environment, overridden by `args`
    /// (`args[0]` is the program name).
    pub fn load(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_args(args)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies every variable `lookup` knows about. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in ENV_KEYS {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                self.set(key, &value)?;
            }
        }
        Ok(())
    }

    pub fn apply_args(&mut self, args: &[String]) -> Result<(), ConfigError> {
        let mut i = 1;
        while i < args.len() {
            let key = match args[i].as_str() {
                "--bind" => ENV_BIND,
                "--synonym-url" => ENV_SYNONYM_URL,
                "--max-variations" => ENV_MAX_VARIATIONS,
                "--fanout" => ENV_FANOUT_POLICY,
                "--lookup" => ENV_LOOKUP_STRATEGY,
                "--lookup-timeout-ms" => ENV_LOOKUP_TIMEOUT_MS,
                other => {
                    tracing::warn!("Ignoring unknown argument: {}", other);
                    i += 1;
                    continue;
                }
            };

            let value = args
                .get(i + 1)
                .ok_or_else(|| ConfigError::MissingValue(args[i].clone()))?;
            self.set(key, value)?;
            i += 2;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_variations == 0 {
            return Err(ConfigError::ZeroVariations);
        }
        if self.lookup_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.templates.is_empty() {
            return Err(ConfigError::NoTemplates);
        }
        Ok(())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            ENV_BIND => self.bind_addr = parse_value(key, value)?,
            ENV_SYNONYM_URL => self.synonym_base_url = value.trim_end_matches('/').to_string(),
            ENV_MAX_VARIATIONS => self.max_variations = parse_value(key, value)?,
            ENV_FANOUT_POLICY => self.fanout_policy = value.parse()?,
            ENV_LOOKUP_STRATEGY => self.lookup_strategy = value.parse()?,
            ENV_LOOKUP_TIMEOUT_MS => {
                self.lookup_timeout = Duration::from_millis(parse_value(key, value)?)
            }
            ENV_TEMPLATES => {
                self.templates = value
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            }
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
