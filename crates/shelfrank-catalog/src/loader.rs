//! Raw catalog loading and single-product lookup.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error, info};

use shelfrank_common::{Result, ShelfrankError};
use shelfrank_ranker::schema::{canonicalize, PRODUCT_NAME};
use shelfrank_ranker::{RawTable, RawValue};

/// Load a raw catalog export. A missing file is reported as
/// [`ShelfrankError::SourceNotFound`] so callers can map it to "not found".
pub async fn load_raw_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        error!("Raw data file not found: {}", path.display());
        return Err(ShelfrankError::SourceNotFound(path.to_path_buf()));
    }

    info!("Loading data from {}...", path.display());
    let content = tokio::fs::read_to_string(path).await?;
    let table = parse_raw_table(&content)?;
    info!("Loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// Parse delimited text into a raw table. Rows may be ragged; short rows are padded.
pub fn parse_raw_table(content: &str) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    debug!("Catalog columns: {:?}", headers);

    let mut table = RawTable::new(headers);
    for result in reader.records() {
        let record = result?;
        table.push_row(record.iter().map(RawValue::parse_cell).collect());
    }
    Ok(table)
}

/// Full raw record for one product, as exposed by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Brand Tier")]
    pub brand_tier: Option<String>,
    #[serde(rename = "Price (USD)")]
    pub price_usd: f64,
    #[serde(rename = "COGS (USD)")]
    pub cogs_usd: f64,
    #[serde(rename = "Units in Stock")]
    pub units_in_stock: i64,
    /// `None` when the catalog cell is blank or not a number
    #[serde(rename = "Days of Inventory")]
    pub days_of_inventory: Option<i64>,
    #[serde(rename = "Views Last Month")]
    pub views_last_month: i64,
    #[serde(rename = "Volume Sold Last Month")]
    pub volume_sold_last_month: i64,
}

/// Look up the first product whose name matches exactly (ignoring surrounding whitespace).
pub fn find_product(table: &RawTable, product_name: &str) -> Option<ProductDetail> {
    let idx = PRODUCT_NAME.locate(table)?;
    let wanted = product_name.trim();
    let row = table
        .rows()
        .iter()
        .find(|row| row[idx].as_text().as_deref() == Some(wanted))?;

    let single = RawTable::new(table.headers().iter().cloned()).with_row(row.clone());
    let (records, _) = canonicalize(&single);
    let record = records.into_iter().next()?;

    Some(ProductDetail {
        product_name: record.product_name.unwrap_or_default(),
        brand: record.brand.unwrap_or_default(),
        brand_tier: record.brand_tier,
        price_usd: record.price_usd,
        cogs_usd: record.cogs_usd,
        units_in_stock: record.units_in_stock.round() as i64,
        days_of_inventory: record
            .days_of_inventory_parsed
            .then(|| record.days_of_inventory.round() as i64),
        views_last_month: record.views_last_month.round() as i64,
        volume_sold_last_month: record.volume_sold_last_month.round() as i64,
    })
}
