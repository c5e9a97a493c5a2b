//! Score ordering, dense ranks, and top-N truncation.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::schema::ProductRecord;

/// A product with its composite score, before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProduct {
    pub record: ProductRecord,
    pub score: f64,
}

/// One row of the ranked output, serialised under the catalog display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProduct {
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Price (USD)")]
    pub price_usd: f64,
    pub score: f64,
    pub rank: u32,
}

impl RankedProduct {
    fn project(product: ScoredProduct, rank: u32) -> Self {
        Self {
            product_name: product.record.product_name.unwrap_or_default(),
            brand: product.record.brand.unwrap_or_default(),
            price_usd: product.record.price_usd,
            score: product.score,
            rank,
        }
    }
}

/// Sort descending by score and assign 1-based ranks over the full set, then keep
/// the first `top_n`. The sort is stable, so ties keep their input order. NaN scores
/// count as 0. `top_n ≤ 0` yields nothing.
pub fn rank_products(products: Vec<ScoredProduct>, top_n: i64) -> Vec<RankedProduct> {
    let mut products: Vec<ScoredProduct> = products
        .into_iter()
        .map(|mut p| {
            if p.score.is_nan() {
                p.score = 0.0;
            }
            p
        })
        .collect();

    products.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let keep = usize::try_from(top_n.max(0)).unwrap_or(usize::MAX);
    products
        .into_iter()
        .enumerate()
        .take(keep)
        .map(|(i, p)| RankedProduct::project(p, i as u32 + 1))
        .collect()
}
