//! Persisting and re-reading ranked output.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

use shelfrank_common::{Result, ShelfrankError};
use shelfrank_ranker::{RankedProduct, RankingOutput, OUTPUT_COLUMNS};

/// Write ranked rows to `path`, creating parent directories. The header row is
/// always written so an empty result still carries its columns.
pub async fn save_ranked(path: &Path, output: &RankingOutput) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(output.columns())?;
    for row in &output.rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ShelfrankError::Io(e.into_error()))?;

    tokio::fs::write(path, bytes).await?;
    info!("Saved {} ranked products to {}", output.len(), path.display());
    Ok(())
}

// Tolerant view of a stored row: older files may lack `rank`.
#[derive(Debug, Deserialize)]
struct StoredRow {
    #[serde(rename = "Product Name", default)]
    product_name: String,
    #[serde(rename = "Brand", default)]
    brand: String,
    #[serde(rename = "Price (USD)", default)]
    price_usd: f64,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    rank: Option<u32>,
}

/// Read a ranked file written by [`save_ranked`], preserving row order.
pub async fn load_ranked(path: &Path) -> Result<Vec<RankedProduct>> {
    if !path.exists() {
        return Err(ShelfrankError::SourceNotFound(path.to_path_buf()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let has_rank = reader
        .headers()?
        .iter()
        .any(|h| h.trim() == OUTPUT_COLUMNS[4]);
    if !has_rank {
        warn!("'rank' column missing in {}; re-creating from row order", path.display());
    }

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<StoredRow>().enumerate() {
        let stored = result?;
        rows.push(RankedProduct {
            product_name: stored.product_name,
            brand: stored.brand,
            price_usd: stored.price_usd,
            score: stored.score,
            rank: stored.rank.unwrap_or(i as u32 + 1),
        });
    }
    debug!("Loaded {} ranked products from {}", rows.len(), path.display());
    Ok(rows)
}
