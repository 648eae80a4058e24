//! Utility modules for crop scoring
//!
//! Contains shared functionality used by the profiler, scorer and formatters:
//! - Lookup tables: Static icon/tips enrichment with fallbacks
//! - Display: Label normalisation, display names, percentage rounding

pub mod lookup_tables;
pub mod display;

// Re-export commonly used helpers
pub use lookup_tables::{crop_icon, crop_tips, DEFAULT_ICON, DEFAULT_TIPS};
pub use display::{display_name, normalize_label, rounded_percent};
