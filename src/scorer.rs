//! Crop Recommender - ranks every profiled crop against a user query
//!
//! Score: weighted root-mean-square of normalised deviations from each crop's
//! per-dimension mean, mapped to `max(0, 100 × (1 − distance))`.
//! Reasons: one phrase per query dimension that falls inside the crop's
//! observed envelope widened by 15% of its range, with a percentage fallback
//! so the list is never empty.

use crate::data::{CropCatalog, CropProfile, DimensionStats, ProfileCache, CatalogError};
use crate::dimension::Dimension;
use crate::query::UserQuery;
use crate::utils::rounded_percent;
use serde::Serialize;
use std::sync::Arc;

/// Fraction of the observed range added on both sides of [min, max]
pub const TOLERANCE_FRACTION: f64 = 0.15;

/// Scores above this earn the "overall compatibility" fallback wording
pub const COMPATIBILITY_THRESHOLD: f64 = 50.0;

/// One scored crop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub crop: Arc<CropProfile>,
    /// Suitability in [0, 100]
    pub suitability_score: f64,
    /// Never empty
    pub match_reasons: Vec<String>,
}

/// Scores queries against a shared, immutable catalog
#[derive(Debug, Clone)]
pub struct CropRecommender {
    catalog: Arc<CropCatalog>,
}

impl CropRecommender {
    pub fn new(catalog: Arc<CropCatalog>) -> Self {
        Self { catalog }
    }

    /// Build from a profile cache (profiling on first use)
    pub fn from_cache(cache: &ProfileCache) -> Result<Self, CatalogError> {
        Ok(Self::new(cache.profile()?))
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    /// Rank every crop in the catalog, best first
    pub fn recommend(&self, query: &UserQuery) -> Vec<Recommendation> {
        recommend(&self.catalog, query)
    }
}

/// Rank every crop in `catalog` against `query`, best first
///
/// Returns exactly one entry per profile. Equal scores keep catalog order.
pub fn recommend(catalog: &CropCatalog, query: &UserQuery) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = catalog
        .profiles()
        .iter()
        .map(|crop| score_crop(crop, query))
        .collect();

    // sort_by is stable
    recommendations.sort_by(|a, b| b.suitability_score.total_cmp(&a.suitability_score));

    if let Some(best) = recommendations.first() {
        tracing::debug!(
            "Scored {} crops on {} dimensions (best: {} at {:.1})",
            recommendations.len(),
            query.len(),
            best.crop.label,
            best.suitability_score
        );
    }

    recommendations
}

/// Score and explain a single crop
pub fn score_crop(crop: &Arc<CropProfile>, query: &UserQuery) -> Recommendation {
    let suitability_score = similarity_score(crop, query);
    let match_reasons = match_reasons(crop, query, suitability_score);

    Recommendation {
        crop: Arc::clone(crop),
        suitability_score,
        match_reasons,
    }
}

/// Normalised deviation of `value` from the dimension mean
///
/// Divides by the observed range, or by 1 when the range is zero.
pub fn normalized_deviation(value: f64, stats: &DimensionStats) -> f64 {
    (value - stats.mean) / stats.normalising_range()
}

/// Weighted similarity score in [0, 100]; exactly 0 for an empty query
pub fn similarity_score(crop: &CropProfile, query: &UserQuery) -> f64 {
    let mut weighted_sq_sum = 0.0;
    let mut weight_total = 0.0;

    for (dim, value) in query.present() {
        let deviation = normalized_deviation(value, crop.stats(dim));
        let weight = dim.weight();
        weighted_sq_sum += weight * deviation * deviation;
        weight_total += weight;
    }

    if weight_total == 0.0 {
        return 0.0;
    }

    let distance = (weighted_sq_sum / weight_total).sqrt();
    (100.0 * (1.0 - distance)).max(0.0)
}

/// True if `value` lies in [min − 15% range, max + 15% range]
pub fn within_tolerance(value: f64, stats: &DimensionStats) -> bool {
    let tolerance = stats.range() * TOLERANCE_FRACTION;
    value >= stats.min - tolerance && value <= stats.max + tolerance
}

/// Human-readable reasons, in dimension order
///
/// Falls back to a single percentage string when no dimension matched:
/// "N% overall compatibility" above the threshold, "N% match" otherwise.
pub fn match_reasons(crop: &CropProfile, query: &UserQuery, score: f64) -> Vec<String> {
    let reasons: Vec<String> = matching_dimensions(crop, query)
        .map(|(dim, value)| dim.match_reason(value))
        .collect();

    if !reasons.is_empty() {
        return reasons;
    }

    let percent = rounded_percent(score);
    if score > COMPATIBILITY_THRESHOLD {
        vec![format!("{}% overall compatibility", percent)]
    } else {
        vec![format!("{}% match", percent)]
    }
}

/// Query values that fall inside the crop's tolerance band, in dimension order
pub fn matching_dimensions<'a>(
    crop: &'a CropProfile,
    query: &'a UserQuery,
) -> impl Iterator<Item = (Dimension, f64)> + 'a {
    query
        .present()
        .filter(move |&(dim, value)| within_tolerance(value, crop.stats(dim)))
}
