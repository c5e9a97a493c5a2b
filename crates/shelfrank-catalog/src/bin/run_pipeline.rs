//! Shelfrank batch run: score the raw catalog export and write the ranking.
//!
//! Run with: cargo run -p shelfrank-catalog --bin shelfrank-pipeline [-- <top_n>]

use anyhow::Context;
use shelfrank_catalog::DataProcessor;
use shelfrank_common::{Settings, WeightsConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shelfrank=debug,info")),
        )
        .init();

    let run_name = format!("ranking_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    info!("Starting pipeline run {}", run_name);

    let top_n = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<i64>().with_context(|| format!("top_n must be an integer, got {arg:?}")))
        .transpose()?;

    let settings = Settings::load()?;
    let weights = WeightsConfig::load_or_default(settings.weights_path());
    let processor = DataProcessor::new(settings, weights);

    let ranked = processor.run_full_pipeline(top_n).await?;
    if ranked.is_empty() {
        warn!("Run {} produced no ranked products", run_name);
    } else {
        for row in ranked.rows.iter().take(5) {
            info!("{:>3}. {} ({}) score={:.4}", row.rank, row.product_name, row.brand, row.score);
        }
    }

    info!("Pipeline run {} finished", run_name);
    Ok(())
}
