use crate::explanation::types::{top_cards, CropCard};
use crate::scorer::Recommendation;

/// Markdown formatter for ranked recommendations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format the top `top_n` recommendations as markdown
    pub fn format(recommendations: &[Recommendation], top_n: usize) -> String {
        let cards = top_cards(recommendations, top_n);
        let mut md = String::with_capacity(512 * cards.len().max(1));

        md.push_str("# Crop Recommendations\n\n");

        if cards.is_empty() {
            md.push_str("No crops available.\n");
            return md;
        }

        for card in &cards {
            Self::format_card(&mut md, card);
        }

        md
    }

    fn format_card(md: &mut String, card: &CropCard) {
        md.push_str(&format!(
            "## {}. {} {} - {} {}\n\n",
            card.rank,
            card.icon,
            card.name,
            card.stars,
            card.rating.label()
        ));
        md.push_str(&format!("**Suitability:** {:.1}/100\n\n", card.score));

        md.push_str("**Why it fits:**\n\n");
        for reason in &card.reasons {
            md.push_str(&format!("- {}\n", reason));
        }
        md.push('\n');

        md.push_str("**Growing tips:**\n\n");
        for tip in &card.tips {
            md.push_str(&format!("- {}\n", tip));
        }
        md.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CropProfile, DimensionStats};
    use crate::dimension::DIMENSION_COUNT;
    use std::sync::Arc;

    fn rec(label: &str, score: f64, reasons: &[&str]) -> Recommendation {
        let stats = [DimensionStats { mean: 1.0, min: 1.0, max: 1.0 }; DIMENSION_COUNT];
        Recommendation {
            crop: Arc::new(CropProfile::new(label.to_string(), stats, 1)),
            suitability_score: score,
            match_reasons: reasons.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_format_basic() {
        let recs = vec![
            rec("rice", 91.24, &["Nitrogen level (90) is ideal"]),
            rec("maize", 55.0, &["55% overall compatibility"]),
            rec("apple", 0.0, &["0% match"]),
        ];

        let md = MarkdownFormatter::format(&recs, 2);

        assert!(md.contains("## 1. 🌾 Rice - ★★★★★ Excellent"));
        assert!(md.contains("**Suitability:** 91.2/100"));
        assert!(md.contains("- Nitrogen level (90) is ideal"));
        assert!(md.contains("- Requires flooded fields"));
        assert!(md.contains("## 2. 🌽 Maize"));
        assert!(!md.contains("Apple"));
    }

    #[test]
    fn test_format_empty() {
        let md = MarkdownFormatter::format(&[], 3);
        assert!(md.contains("No crops available."));
    }
}
