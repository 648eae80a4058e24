//! Presentation view types: ranked crop cards and qualitative rating bands

use crate::scorer::Recommendation;
use serde::Serialize;

/// Presentation view of one recommended crop
#[derive(Debug, Clone, Serialize)]
pub struct CropCard {
    pub rank: usize,           // 1-based
    pub label: String,         // "kidney beans"
    pub name: String,          // "Kidney beans"
    pub icon: String,          // "🫘"
    pub score: f64,            // Suitability (0-100)
    pub stars: String,         // "★★★★☆"
    pub rating: SuitabilityRating,
    pub reasons: Vec<String>,
    pub tips: Vec<String>,
    pub sample_count: usize,
}

impl CropCard {
    pub fn from_recommendation(rank: usize, rec: &Recommendation) -> Self {
        let rating = SuitabilityRating::from_score(rec.suitability_score);
        Self {
            rank,
            label: rec.crop.label.clone(),
            name: rec.crop.display_name.clone(),
            icon: rec.crop.icon.to_string(),
            score: rec.suitability_score,
            stars: rating.stars().to_string(),
            rating,
            reasons: rec.match_reasons.clone(),
            tips: rec.crop.tips.iter().map(|t| t.to_string()).collect(),
            sample_count: rec.crop.sample_count,
        }
    }
}

/// Qualitative band for a suitability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuitabilityRating {
    Excellent,
    Good,
    Fair,
    Poor,
    Unsuitable,
}

impl SuitabilityRating {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => SuitabilityRating::Excellent,
            s if s >= 60.0 => SuitabilityRating::Good,
            s if s >= 40.0 => SuitabilityRating::Fair,
            s if s > 0.0 => SuitabilityRating::Poor,
            _ => SuitabilityRating::Unsuitable,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SuitabilityRating::Excellent => "Excellent",
            SuitabilityRating::Good => "Good",
            SuitabilityRating::Fair => "Fair",
            SuitabilityRating::Poor => "Poor",
            SuitabilityRating::Unsuitable => "Unsuitable",
        }
    }

    pub fn stars(self) -> &'static str {
        match self {
            SuitabilityRating::Excellent => "★★★★★",
            SuitabilityRating::Good => "★★★★☆",
            SuitabilityRating::Fair => "★★★☆☆",
            SuitabilityRating::Poor => "★★☆☆☆",
            SuitabilityRating::Unsuitable => "☆☆☆☆☆",
        }
    }
}

/// Build cards for the first `top_n` recommendations (already sorted)
pub fn top_cards(recommendations: &[Recommendation], top_n: usize) -> Vec<CropCard> {
    recommendations
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, rec)| CropCard::from_recommendation(idx + 1, rec))
        .collect()
}
