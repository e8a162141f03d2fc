//! Phrase Variation Module
//!
//! Turns one user phrase into a short, ordered list of lexical variants.
//!
//! ## Pipeline
//! 1. **Tokenize**: the phrase is split into words, left to right, duplicates kept.
//! 2. **Lookup**: every word is sent to the `SynonymProvider`.
//! 3. **Substitute**: each synonym replaces the first literal occurrence of its word
//!    in the original phrase, producing one variant.
//! 4. **Bound**: generation stops the moment the configured cap is reached.
//!
//! ## Submodules
//! - **`tokenizer`**: Word segmentation behind the `Tokenizer` trait.
//! - **`generator`**: The bounded substitution loop (`VariationGenerator`).

pub mod generator;
pub mod tokenizer;
