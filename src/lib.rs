//! Crop Scorer Rust Implementation
//!
//! Similarity-based crop recommendation over a historical soil/climate dataset.
//!
//! - `data`: Tolerant CSV parsing and per-crop profiling with Polars (memoized)
//! - `scorer`: Weighted similarity score, match reasons, ranking
//! - `dimension` / `query`: The seven measured variables and partial user queries
//! - `extraction` / `validation`: Free-text parsing and range checks for callers
//! - `explanation`: Markdown/JSON presentation of the top recommendations
//! - `utils`: Enrichment lookup tables and display helpers

pub mod config;
pub mod data;
pub mod dimension;
pub mod explanation;
pub mod extraction;
pub mod query;
pub mod scorer;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::{EngineConfig, OutputFormat};
pub use data::{CatalogError, CropCatalog, CropProfile, DatasetSource, DimensionStats, ProfileCache};
pub use dimension::Dimension;
pub use extraction::extract_parameters;
pub use query::UserQuery;
pub use scorer::{recommend, CropRecommender, Recommendation};
pub use validation::{validate_query, ValidationError};
