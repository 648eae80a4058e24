//! Free-text Parameter Extraction
//!
//! Pulls measured values out of chat-style text such as
//! "N: 90, P 42, temp 25, 80% humidity, 200mm rain".
//!
//! Each dimension tries a labelled pattern first and, for temperature,
//! humidity and rainfall, falls back to a bare unit suffix (°C, %, mm).
//! Values are taken as written: no unit conversion, no range checks.

use crate::dimension::Dimension;
use crate::query::UserQuery;
use regex::Regex;
use std::sync::LazyLock;

/// ASCII digits only; `\d` would also accept other Unicode digit scripts
const NUMBER: &str = r"([0-9]+(?:\.[0-9]+)?)";

/// Patterns per dimension, tried in order; the first match wins
static PATTERNS: LazyLock<Vec<(Dimension, Vec<Regex>)>> = LazyLock::new(|| {
    let compile = |patterns: &[&str]| -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(&p.replace("NUM", NUMBER)).expect("static extraction pattern"))
            .collect()
    };

    vec![
        (Dimension::Nitrogen, compile(&[r"\bn[:\s=]+NUM", r"nitrogen[:\s=]+NUM"])),
        (Dimension::Phosphorus, compile(&[r"\bp[:\s=]+NUM", r"phosphorus[:\s=]+NUM"])),
        (Dimension::Potassium, compile(&[r"\bk[:\s=]+NUM", r"potassium[:\s=]+NUM"])),
        (Dimension::Temperature, compile(&[r"temp(?:erature)?[:\s=]+NUM", r"NUM\s*°?c"])),
        (Dimension::Humidity, compile(&[r"humidity[:\s=]+NUM", r"NUM\s*%"])),
        (Dimension::Ph, compile(&[r"ph[:\s=]+NUM"])),
        (Dimension::Rainfall, compile(&[r"rain(?:fall)?[:\s=]+NUM", r"NUM\s*mm"])),
    ]
});

/// Extract whatever dimensions the text mentions
pub fn extract_parameters(text: &str) -> UserQuery {
    let lower = text.to_lowercase();
    let mut query = UserQuery::new();

    for (dim, patterns) in PATTERNS.iter() {
        let value = patterns.iter().find_map(|re| {
            re.captures(&lower)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok())
        });

        if let Some(value) = value {
            query.set(*dim, value);
        }
    }

    tracing::debug!("Extracted {} parameters from text", query.len());
    query
}
