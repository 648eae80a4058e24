use crate::explanation::types::top_cards;
use crate::scorer::Recommendation;
use serde_json;

/// JSON formatter for ranked recommendations
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format the top `top_n` recommendations as pretty-printed JSON
    pub fn format(recommendations: &[Recommendation], top_n: usize) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&top_cards(recommendations, top_n))
    }

    /// Format as compact JSON (no whitespace)
    pub fn format_compact(recommendations: &[Recommendation], top_n: usize) -> Result<String, serde_json::Error> {
        serde_json::to_string(&top_cards(recommendations, top_n))
    }
}
