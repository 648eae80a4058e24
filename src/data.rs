//! Dataset Profiling
//!
//! Loads the historical (soil/climate, crop label) observations and reduces
//! them, once, to per-crop summary statistics (mean, min, max, sample count)
//! over the seven measured dimensions.
//!
//! Row parsing is tolerant: the header line is ignored and any row that does
//! not have exactly 8 comma-separated fields is dropped. Aggregation runs as
//! a Polars stable group-by so crops keep the order in which their label
//! first appears in the dataset.

use crate::dimension::{Dimension, DIMENSION_COUNT};
use crate::utils::{crop_icon, crop_tips, display_name, normalize_label};
use polars::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use thiserror::Error;

/// Fields per data row: 7 numeric dimensions + 1 label
pub const FIELDS_PER_ROW: usize = DIMENSION_COUNT + 1;

const LABEL_COLUMN: &str = "label";
const SAMPLE_COUNT_COLUMN: &str = "sample_count";

/// Errors raised while loading or aggregating the reference dataset
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset aggregation failed: {0}")]
    Aggregation(#[from] PolarsError),

    #[error("aggregated column '{column}' has no value at row {row}")]
    MissingValue { column: String, row: usize },
}

// ============================================================================
// Observations
// ============================================================================

/// One historical sample
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Values in [`Dimension::ALL`] order
    pub values: [f64; DIMENSION_COUNT],
    /// Normalised (trimmed, lower-case) crop label
    pub label: String,
}

impl Observation {
    pub fn value(&self, dimension: Dimension) -> f64 {
        self.values[dimension.index()]
    }
}

/// Result of tolerant row parsing
#[derive(Debug, Default)]
pub struct ParsedDataset {
    pub observations: Vec<Observation>,
    /// Non-blank rows that were dropped as malformed
    pub skipped_rows: usize,
}

/// Parse raw CSV text (first line is a header and is ignored)
pub fn parse_observations(text: &str) -> ParsedDataset {
    let mut parsed = ParsedDataset::default();

    for (line_no, line) in text.trim().lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line) {
            Some(obs) => parsed.observations.push(obs),
            None => {
                tracing::debug!("Skipping malformed dataset row {}: {:?}", line_no + 1, line);
                parsed.skipped_rows += 1;
            }
        }
    }

    parsed
}

/// Parse one data row; `None` if the field count is not 8 or a numeric
/// field is not a finite number
fn parse_row(line: &str) -> Option<Observation> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELDS_PER_ROW {
        return None;
    }

    let mut values = [0.0; DIMENSION_COUNT];
    for (slot, raw) in values.iter_mut().zip(&fields[..DIMENSION_COUNT]) {
        let value: f64 = raw.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        *slot = value;
    }

    Some(Observation {
        values,
        label: normalize_label(fields[DIMENSION_COUNT]),
    })
}

// ============================================================================
// Crop profiles
// ============================================================================

/// Observed envelope of one dimension for one crop
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl DimensionStats {
    /// Observed range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Divisor for normalised deviations: the range, or 1.0 when it is zero
    pub fn normalising_range(&self) -> f64 {
        let range = self.range();
        if range == 0.0 {
            1.0
        } else {
            range
        }
    }
}

/// Per-crop summary statistics plus static enrichment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropProfile {
    /// Normalised label (unique key)
    pub label: String,
    /// Label with first character upper-cased
    pub display_name: String,
    pub icon: &'static str,
    pub tips: &'static [&'static str],
    /// Statistics in [`Dimension::ALL`] order
    pub stats: [DimensionStats; DIMENSION_COUNT],
    pub sample_count: usize,
}

impl CropProfile {
    /// Build a profile with enrichment looked up by label
    pub fn new(label: String, stats: [DimensionStats; DIMENSION_COUNT], sample_count: usize) -> Self {
        Self {
            display_name: display_name(&label),
            icon: crop_icon(&label),
            tips: crop_tips(&label),
            label,
            stats,
            sample_count,
        }
    }

    pub fn stats(&self, dimension: Dimension) -> &DimensionStats {
        &self.stats[dimension.index()]
    }
}

/// Immutable set of crop profiles in catalog discovery order
#[derive(Debug, Default)]
pub struct CropCatalog {
    profiles: Vec<Arc<CropProfile>>,
    by_label: FxHashMap<String, usize>,
}

impl CropCatalog {
    /// Wrap already-built profiles (order is preserved)
    pub fn from_profiles(profiles: Vec<CropProfile>) -> Self {
        let by_label = profiles
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.label.clone(), idx))
            .collect();

        Self {
            profiles: profiles.into_iter().map(Arc::new).collect(),
            by_label,
        }
    }

    /// Profile raw CSV text
    pub fn from_csv_str(text: &str) -> Result<Self, CatalogError> {
        let parsed = parse_observations(text);
        let catalog = Self::from_observations(&parsed.observations)?;

        tracing::info!(
            "Profiled {} observations into {} crops ({} malformed rows skipped)",
            parsed.observations.len(),
            catalog.len(),
            parsed.skipped_rows
        );

        Ok(catalog)
    }

    /// Profile a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        tracing::info!("Loading crop dataset: {:?}", path);
        let text = read_dataset(path)?;
        Self::from_csv_str(&text)
    }

    /// Group observations by label and compute mean/min/max/count
    pub fn from_observations(observations: &[Observation]) -> Result<Self, CatalogError> {
        if observations.is_empty() {
            return Ok(Self::default());
        }

        let grouped = aggregate_by_label(observations_frame(observations)?)?;
        let labels = grouped.column(LABEL_COLUMN)?.str()?;
        let counts = grouped.column(SAMPLE_COUNT_COLUMN)?.u64()?;

        let mut profiles = Vec::with_capacity(grouped.height());
        for row in 0..grouped.height() {
            let label = labels.get(row).ok_or_else(|| missing(LABEL_COLUMN, row))?;
            let count = counts.get(row).ok_or_else(|| missing(SAMPLE_COUNT_COLUMN, row))?;

            let mut stats = [DimensionStats { mean: 0.0, min: 0.0, max: 0.0 }; DIMENSION_COUNT];
            for dim in Dimension::ALL {
                let name = dim.column_name();
                let min = stat_value(&grouped, &stat_column(name, "min"), row)?;
                let max = stat_value(&grouped, &stat_column(name, "max"), row)?;
                // Float summation may land an ulp outside a constant envelope
                let mean = stat_value(&grouped, &stat_column(name, "mean"), row)?.clamp(min, max);
                stats[dim.index()] = DimensionStats { mean, min, max };
            }

            profiles.push(CropProfile::new(label.to_string(), stats, count as usize));
        }

        Ok(Self::from_profiles(profiles))
    }

    /// Profiles in catalog order
    pub fn profiles(&self) -> &[Arc<CropProfile>] {
        &self.profiles
    }

    pub fn get(&self, label: &str) -> Option<&Arc<CropProfile>> {
        self.by_label
            .get(&normalize_label(label))
            .map(|&idx| &self.profiles[idx])
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn read_dataset(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn missing(column: &str, row: usize) -> CatalogError {
    CatalogError::MissingValue {
        column: column.to_string(),
        row,
    }
}

fn stat_column(dimension_column: &str, stat: &str) -> String {
    format!("{}_{}", dimension_column, stat)
}

fn stat_value(df: &DataFrame, column: &str, row: usize) -> Result<f64, CatalogError> {
    df.column(column)?
        .f64()?
        .get(row)
        .ok_or_else(|| missing(column, row))
}

/// One column per dimension plus the label column
fn observations_frame(observations: &[Observation]) -> PolarsResult<DataFrame> {
    let mut columns: Vec<Column> = Dimension::ALL
        .iter()
        .map(|&dim| {
            let values: Vec<f64> = observations.iter().map(|o| o.value(dim)).collect();
            Column::new(dim.column_name().into(), values)
        })
        .collect();

    let labels: Vec<&str> = observations.iter().map(|o| o.label.as_str()).collect();
    columns.push(Column::new(LABEL_COLUMN.into(), labels));

    DataFrame::new(columns)
}

/// Stable group-by on label: groups keep first-appearance order
fn aggregate_by_label(df: DataFrame) -> PolarsResult<DataFrame> {
    let mut aggs: Vec<Expr> = Vec::with_capacity(DIMENSION_COUNT * 3 + 1);
    for dim in Dimension::ALL {
        let name = dim.column_name();
        aggs.push(col(name).mean().alias(stat_column(name, "mean").as_str()));
        aggs.push(col(name).min().alias(stat_column(name, "min").as_str()));
        aggs.push(col(name).max().alias(stat_column(name, "max").as_str()));
    }
    aggs.push(len().cast(DataType::UInt64).alias(SAMPLE_COUNT_COLUMN));

    df.lazy()
        .group_by_stable([col(LABEL_COLUMN)])
        .agg(aggs)
        .collect()
}

// ============================================================================
// Memoized profile
// ============================================================================

/// Where the reference dataset comes from
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// CSV text held in memory
    Inline(String),
    /// CSV file read on first profile
    File(PathBuf),
}

impl DatasetSource {
    fn build_catalog(&self) -> Result<CropCatalog, CatalogError> {
        match self {
            DatasetSource::Inline(text) => CropCatalog::from_csv_str(text),
            DatasetSource::File(path) => CropCatalog::from_csv_path(path),
        }
    }
}

/// Lazily built, shared crop catalog
///
/// The catalog is computed at most once, even under concurrent first access,
/// and every caller afterwards receives the same `Arc`. A failed build leaves
/// the cache empty so a later call can retry.
#[derive(Debug)]
pub struct ProfileCache {
    source: DatasetSource,
    catalog: OnceLock<Arc<CropCatalog>>,
    build_lock: Mutex<()>,
}

impl ProfileCache {
    pub fn new(source: DatasetSource) -> Self {
        Self {
            source,
            catalog: OnceLock::new(),
            build_lock: Mutex::new(()),
        }
    }

    pub fn from_csv_str(text: impl Into<String>) -> Self {
        Self::new(DatasetSource::Inline(text.into()))
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(DatasetSource::File(path.into()))
    }

    /// Seed the cache with an already-built catalog
    pub fn from_catalog(catalog: CropCatalog) -> Self {
        let cache = Self::new(DatasetSource::Inline(String::new()));
        let _ = cache.catalog.set(Arc::new(catalog));
        cache
    }

    /// The profiled catalog, built on first call
    pub fn profile(&self) -> Result<Arc<CropCatalog>, CatalogError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(Arc::clone(catalog));
        }

        let _guard = self.build_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(catalog) = self.catalog.get() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(self.source.build_catalog()?);
        let _ = self.catalog.set(Arc::clone(&catalog));
        Ok(catalog)
    }

    pub fn is_profiled(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Drop the cached catalog; the next `profile()` rebuilds it
    pub fn invalidate(&mut self) {
        self.catalog.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RICE_CSV: &str = "\
N,P,K,temperature,humidity,ph,rainfall,label
80,50,50,50,50,50,50,rice
90,50,50,50,50,50,50,rice
100,50,50,50,50,50,50,rice
";

    #[test]
    fn test_parse_skips_header_and_malformed_rows() {
        let text = "\
N,P,K,temperature,humidity,ph,rainfall,label
90,42,43,20.8,82.0,6.5,202.9,rice
1,2,3,4,5,6
85,58,41,21.7,80.3,7.0,226.6,Rice ,extra
71,54,16,22.6,63.6,5.7,87.7, Maize
";
        let parsed = parse_observations(text);
        assert_eq!(parsed.observations.len(), 2);
        assert_eq!(parsed.skipped_rows, 2);
        assert_eq!(parsed.observations[0].label, "rice");
        assert_eq!(parsed.observations[1].label, "maize");
        assert_relative_eq!(parsed.observations[1].value(Dimension::Ph), 5.7);
    }

    #[test]
    fn test_parse_rejects_non_numeric_fields() {
        let text = "header\nabc,1,1,1,1,1,1,rice\nNaN,1,1,1,1,1,1,rice\n1,1,1,1,1,1,1,rice\n";
        let parsed = parse_observations(text);
        assert_eq!(parsed.observations.len(), 1);
        assert_eq!(parsed.skipped_rows, 2);
    }

    #[test]
    fn test_header_only_dataset_is_empty() {
        let catalog = CropCatalog::from_csv_str("N,P,K,temperature,humidity,ph,rainfall,label\n").unwrap();
        assert!(catalog.is_empty());

        let catalog = CropCatalog::from_csv_str("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_profile_statistics() {
        let catalog = CropCatalog::from_csv_str(RICE_CSV).unwrap();
        assert_eq!(catalog.len(), 1);

        let rice = catalog.get("rice").unwrap();
        assert_eq!(rice.display_name, "Rice");
        assert_eq!(rice.icon, "🌾");
        assert_eq!(rice.sample_count, 3);

        let n = rice.stats(Dimension::Nitrogen);
        assert_relative_eq!(n.mean, 90.0);
        assert_relative_eq!(n.min, 80.0);
        assert_relative_eq!(n.max, 100.0);
        assert_relative_eq!(n.normalising_range(), 20.0);

        let t = rice.stats(Dimension::Temperature);
        assert_relative_eq!(t.mean, 50.0);
        assert_relative_eq!(t.range(), 0.0);
        assert_relative_eq!(t.normalising_range(), 1.0);
    }

    #[test]
    fn test_grouping_is_case_and_whitespace_insensitive() {
        let text = "\
h
1,1,1,1,1,1,1,Maize
3,1,1,1,1,1,1,  maize
5,1,1,1,1,1,1,MAIZE
";
        let catalog = CropCatalog::from_csv_str(text).unwrap();
        assert_eq!(catalog.len(), 1);
        let maize = catalog.get("Maize").unwrap();
        assert_eq!(maize.sample_count, 3);
        assert_relative_eq!(maize.stats(Dimension::Nitrogen).mean, 3.0);
    }

    #[test]
    fn test_catalog_keeps_discovery_order() {
        let text = "\
h
1,1,1,1,1,1,1,mango
1,1,1,1,1,1,1,apple
2,1,1,1,1,1,1,mango
1,1,1,1,1,1,1,quinoa
";
        let catalog = CropCatalog::from_csv_str(text).unwrap();
        let labels: Vec<&str> = catalog.profiles().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["mango", "apple", "quinoa"]);

        // Unknown crops get fallback enrichment
        let quinoa = catalog.get("quinoa").unwrap();
        assert_eq!(quinoa.icon, "🌱");
        assert_eq!(quinoa.tips.len(), 2);
    }

    #[test]
    fn test_min_mean_max_invariant() {
        let text = "\
h
0.1,0.1,0.1,0.1,0.1,0.1,0.1,lentil
0.1,0.1,0.1,0.1,0.1,0.1,0.1,lentil
0.1,0.1,0.1,0.1,0.1,0.1,0.1,lentil
";
        let catalog = CropCatalog::from_csv_str(text).unwrap();
        for profile in catalog.profiles() {
            for stats in &profile.stats {
                assert!(stats.min <= stats.mean && stats.mean <= stats.max);
            }
        }
    }

    #[test]
    fn test_profile_cache_memoizes() {
        let cache = ProfileCache::from_csv_str(RICE_CSV);
        assert!(!cache.is_profiled());

        let first = cache.profile().unwrap();
        let second = cache.profile().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.is_profiled());
    }

    #[test]
    fn test_profile_cache_invalidate() {
        let mut cache = ProfileCache::from_csv_str(RICE_CSV);
        let first = cache.profile().unwrap();
        cache.invalidate();
        assert!(!cache.is_profiled());

        let rebuilt = cache.profile().unwrap();
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(rebuilt.len(), first.len());
    }

    #[test]
    fn test_file_source_profiles_like_inline_text() {
        let path = std::env::temp_dir().join(format!("crop_rice_{}.csv", std::process::id()));
        fs::write(&path, RICE_CSV).unwrap();

        let from_file = ProfileCache::from_path(&path).profile().unwrap();
        let direct = CropCatalog::from_csv_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let inline = ProfileCache::from_csv_str(RICE_CSV).profile().unwrap();
        assert_eq!(from_file.profiles(), inline.profiles());
        assert_eq!(direct.profiles(), inline.profiles());
    }

    #[test]
    fn test_csv_path_missing_file() {
        let err = CropCatalog::from_csv_path(Path::new("/nonexistent/crops.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_profile_cache_missing_file() {
        let cache = ProfileCache::from_path("/nonexistent/crops.csv");
        let err = cache.profile().unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("crops.csv"));
        assert!(!cache.is_profiled());
    }
}
