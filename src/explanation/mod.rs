//! Recommendation Presentation
//!
//! Turns ranked [`Recommendation`](crate::scorer::Recommendation)s into
//! display cards and renders the top entries as Markdown or JSON.

pub mod types;
pub mod formatters;

pub use types::{top_cards, CropCard, SuitabilityRating};
pub use formatters::{JsonFormatter, MarkdownFormatter};
