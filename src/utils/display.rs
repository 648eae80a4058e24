//! Display helpers shared by the profiler, scorer and formatters

/// Normalise a raw dataset label: trim whitespace, lower-case
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Display name: first character upper-cased, remainder unchanged
///
/// "kidney beans" → "Kidney beans"
pub fn display_name(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Score rounded to the nearest whole percent (halves round up)
pub fn rounded_percent(score: f64) -> i64 {
    (score + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Rice \r"), "rice");
        assert_eq!(normalize_label("Kidney Beans"), "kidney beans");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("rice"), "Rice");
        assert_eq!(display_name("kidney beans"), "Kidney beans");
        assert_eq!(display_name("x"), "X");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_rounded_percent() {
        assert_eq!(rounded_percent(0.0), 0);
        assert_eq!(rounded_percent(72.4), 72);
        assert_eq!(rounded_percent(72.5), 73);
        assert_eq!(rounded_percent(99.99), 100);
    }
}
