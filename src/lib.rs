//! Synonym Search Library
//!
//! This library crate defines the modules behind the `synonym_search` binary
//! (`main.rs`): a small HTTP service that rewrites a phrase with synonyms and
//! turns every rewrite into ready-to-use search-engine links.
//!
//! ## Architecture Modules
//! - **`config`**: Layered service configuration (defaults, environment, flags).
//! - **`error`**: The error taxonomy and its mapping to HTTP status codes.
//! - **`fanout`**: URL templates and the variation -> link pairing policies.
//! - **`search`**: The `SearchService` pipeline and its Axum endpoints.
//! - **`synonyms`**: The `SynonymProvider` abstraction and its HTTP client.
//! - **`variations`**: Tokenization and the bounded variation generator.

pub mod config;
pub mod error;
pub mod fanout;
pub mod search;
pub mod synonyms;
pub mod variations;
