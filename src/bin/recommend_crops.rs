// Crop recommendation CLI
//
// Usage: cargo run --bin recommend_crops -- "N: 90, P: 42, K: 43, temp 21, humidity 82, ph 6.5, rainfall 203"
// Dataset, result count and output format come from CROP_DATASET / CROP_TOP_N / CROP_OUTPUT.

use anyhow::{bail, Context, Result};
use crop_scorer_rust::config::DEFAULT_LOG_FILTER;
use crop_scorer_rust::explanation::{JsonFormatter, MarkdownFormatter};
use crop_scorer_rust::{
    extract_parameters, validate_query, CropRecommender, EngineConfig, OutputFormat, ProfileCache,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        bail!("usage: recommend_crops \"<soil and climate description>\"");
    }

    let config = EngineConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  CROP_DATASET: {:?}", config.dataset_path);
    tracing::info!("  CROP_TOP_N: {}", config.top_n);
    tracing::info!("  CROP_OUTPUT: {:?}", config.output);

    let query = extract_parameters(&text);
    if query.is_empty() {
        tracing::warn!("No soil or climate values found in input; every crop will score 0");
    }
    validate_query(&query).context("Invalid soil/climate input")?;

    let cache = ProfileCache::from_path(&config.dataset_path);
    let recommender = CropRecommender::from_cache(&cache)
        .with_context(|| format!("Failed to profile dataset {:?}", config.dataset_path))?;

    let recommendations = recommender.recommend(&query);
    tracing::info!(
        "Ranked {} crops using {} parameters",
        recommendations.len(),
        query.len()
    );

    let rendered = match config.output {
        OutputFormat::Markdown => MarkdownFormatter::format(&recommendations, config.top_n),
        OutputFormat::Json => JsonFormatter::format(&recommendations, config.top_n)
            .context("Failed to serialise recommendations")?,
    };
    println!("{}", rendered);

    Ok(())
}
