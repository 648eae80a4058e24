//! Environment configuration
//!
//! - `CROP_DATASET`: path to the reference CSV (default `data/Crop_recommendation.csv`)
//! - `CROP_TOP_N`: recommendations to print (default 3)
//! - `CROP_OUTPUT`: `markdown` or `json` (default markdown)
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;

pub const DEFAULT_DATASET_PATH: &str = "data/Crop_recommendation.csv";
pub const DEFAULT_TOP_N: usize = 3;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "crop_scorer_rust=info,recommend_crops=info,warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub dataset_path: PathBuf,
    pub top_n: usize,
    pub output: OutputFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            top_n: DEFAULT_TOP_N,
            output: OutputFormat::Markdown,
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let dataset_path = lookup("CROP_DATASET")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.dataset_path);

        let top_n = lookup("CROP_TOP_N")
            .and_then(|n| n.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.top_n);

        let output = lookup("CROP_OUTPUT")
            .and_then(|o| OutputFormat::parse(&o))
            .unwrap_or(defaults.output);

        Self { dataset_path, top_n, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = EngineConfig::from_lookup(|_| None);
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.top_n, 3);
        assert_eq!(cfg.output, OutputFormat::Markdown);
    }

    #[test]
    fn test_overrides() {
        let cfg = EngineConfig::from_lookup(lookup_from(&[
            ("CROP_DATASET", "/opt/crops.csv"),
            ("CROP_TOP_N", "5"),
            ("CROP_OUTPUT", "JSON"),
        ]));
        assert_eq!(cfg.dataset_path, PathBuf::from("/opt/crops.csv"));
        assert_eq!(cfg.top_n, 5);
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = EngineConfig::from_lookup(lookup_from(&[
            ("CROP_TOP_N", "zero"),
            ("CROP_OUTPUT", "html"),
        ]));
        assert_eq!(cfg.top_n, DEFAULT_TOP_N);
        assert_eq!(cfg.output, OutputFormat::Markdown);

        let cfg = EngineConfig::from_lookup(lookup_from(&[("CROP_TOP_N", "0")]));
        assert_eq!(cfg.top_n, DEFAULT_TOP_N);
    }
}
