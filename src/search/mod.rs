//! Search Service Module
//!
//! The HTTP-facing part of the system. It turns a `query` parameter into a JSON
//! list of search links.
//!
//! ## Request Flow
//! 1. **Validate**: an empty or missing `query` is rejected with 400.
//! 2. **Vary**: `VariationGenerator` produces the bounded list of phrase variants.
//! 3. **Fan out**: `LinkFanout` pairs variants with URL templates.
//! 4. **Respond**: the result is serialized in the shape of the configured policy.
//!
//! ## Submodules
//! - **`engine`**: `SearchService`, the composition root for one service instance.
//! - **`handlers`**: Axum handlers and the router.
//! - **`types`**: Request parameters and response DTOs.

pub mod engine;
pub mod handlers;
pub mod types;
