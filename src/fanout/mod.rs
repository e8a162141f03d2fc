//! Link Fanout Module
//!
//! Pairs phrase variations with search-engine URL templates.
//!
//! ## Policies
//! - **Indexed**: variation `i` goes to template `i mod N`, one link per variation.
//! - **CrossProduct**: every variation goes to every template, grouped by variation.
//!
//! A template that fails to parse costs only the links built from it; the rest of
//! the fanout proceeds.
//!
//! ## Submodules
//! - **`templates`**: The default template list and URL construction.
//! - **`links`**: `LinkFanout`, the policy-driven pairing.
//! - **`types`**: Policy enum and link DTOs.

pub mod links;
pub mod templates;
pub mod types;
