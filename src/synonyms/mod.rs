//! Synonym Lookup Module
//!
//! Wraps the external thesaurus service behind the `SynonymProvider` trait so that
//! the variation generator never talks HTTP directly.
//!
//! ## Submodules
//! - **`provider`**: The trait plus an in-memory implementation.
//! - **`datamuse`**: HTTP client for a Datamuse-compatible `/words?rel_syn=` endpoint.
//! - **`types`**: Wire format of the upstream response.

pub mod datamuse;
pub mod provider;
pub mod types;

#[cfg(test)]
mod tests;
