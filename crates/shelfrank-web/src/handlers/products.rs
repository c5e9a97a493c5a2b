//! Ranked product listing and raw product details.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use shelfrank_catalog::{find_product, load_ranked, ProductDetail};
use shelfrank_ranker::RankedProduct;

use crate::error::ApiError;
use crate::state::SharedState;

pub const DEFAULT_TOP_N: i64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct RankedQuery {
    pub top_n: Option<i64>,
}

/// GET /ranked-products?top_n=N
///
/// Serves the processed ranking when one has been written, otherwise scores the raw
/// catalog on the fly.
pub async fn ranked_products(
    State(state): State<SharedState>,
    Query(query): Query<RankedQuery>,
) -> Result<Json<Vec<RankedProduct>>, ApiError> {
    let top_n = query.top_n.unwrap_or(DEFAULT_TOP_N);
    let processed = state.settings().processed_data_path();

    if processed.exists() {
        info!("Serving ranked products from {}", processed.display());
        let mut rows = load_ranked(&processed).await?;
        rows.truncate(usize::try_from(top_n.max(0)).unwrap_or(usize::MAX));
        return Ok(Json(rows));
    }

    warn!("Processed data not found, scoring raw data on the fly");
    let raw = state.processor.load_data(None).await?;
    if raw.is_empty() {
        warn!("Raw data is empty");
        return Ok(Json(Vec::new()));
    }

    let ranked = state.processor.process_and_score(&raw, Some(top_n));
    Ok(Json(ranked.rows))
}

/// GET /product-details/{product_name}
pub async fn product_details(
    State(state): State<SharedState>,
    Path(product_name): Path<String>,
) -> Result<Json<ProductDetail>, ApiError> {
    let raw = state.processor.load_data(None).await?;
    if raw.is_empty() {
        return Err(ApiError::NotFound("Raw data is empty".to_string()));
    }

    find_product(&raw, &product_name)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Product '{}' not found", product_name)))
}
