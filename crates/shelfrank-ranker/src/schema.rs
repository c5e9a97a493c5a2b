//! Raw → canonical schema mapping.
//!
//! Each canonical field is resolved on its own, so a partial raw schema still yields
//! complete records: absent columns are defaulted (0 for numbers, `None` for text) and
//! reported as [`Diagnostic::MissingSourceField`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coerce::{coerce_value, Coerced, Source};
use crate::diagnostics::Diagnostic;
use crate::table::RawTable;

/// A canonical field and the raw column it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header in the raw catalog export
    pub source: &'static str,
    /// Internal snake_case name, also accepted as a raw header
    pub canonical: &'static str,
}

pub const PRODUCT_NAME: ColumnSpec = ColumnSpec { source: "Product Name", canonical: "product_name" };
pub const BRAND: ColumnSpec = ColumnSpec { source: "Brand", canonical: "brand" };
pub const BRAND_TIER: ColumnSpec = ColumnSpec { source: "Brand Tier", canonical: "brand_tier" };
pub const PRICE_USD: ColumnSpec = ColumnSpec { source: "Price (USD)", canonical: "price_usd" };
pub const COGS_USD: ColumnSpec = ColumnSpec { source: "COGS (USD)", canonical: "cogs_usd" };
pub const UNITS_IN_STOCK: ColumnSpec = ColumnSpec { source: "Units in Stock", canonical: "units_in_stock" };
pub const DAYS_OF_INVENTORY: ColumnSpec = ColumnSpec { source: "Days of Inventory", canonical: "days_of_inventory" };
pub const VIEWS_LAST_MONTH: ColumnSpec = ColumnSpec { source: "Views Last Month", canonical: "views_last_month" };
pub const VOLUME_SOLD_LAST_MONTH: ColumnSpec = ColumnSpec {
    source: "Volume Sold Last Month",
    canonical: "volume_sold_last_month",
};

/// All raw columns in catalog export order.
pub const RAW_COLUMNS: [ColumnSpec; 9] = [
    PRODUCT_NAME,
    BRAND,
    BRAND_TIER,
    PRICE_USD,
    COGS_USD,
    DAYS_OF_INVENTORY,
    UNITS_IN_STOCK,
    VIEWS_LAST_MONTH,
    VOLUME_SOLD_LAST_MONTH,
];

impl ColumnSpec {
    /// Locate this field in a raw table, preferring the export header.
    pub fn locate(&self, table: &RawTable) -> Option<usize> {
        table
            .column_index(self.source)
            .or_else(|| table.column_index(self.canonical))
    }
}

/// A product row in the canonical schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub brand_tier: Option<String>,
    pub price_usd: f64,
    pub cogs_usd: f64,
    pub units_in_stock: f64,
    pub days_of_inventory: f64,
    pub views_last_month: f64,
    pub volume_sold_last_month: f64,
    /// False when the source cell for days of inventory was missing or unparseable.
    #[serde(default = "default_true")]
    pub days_of_inventory_parsed: bool,
}

fn default_true() -> bool { true }

impl ProductRecord {
    /// Inventory age as seen by the max-days filter: unknown ages are infinitely old.
    pub fn inventory_age(&self) -> f64 {
        if self.days_of_inventory_parsed {
            self.days_of_inventory
        } else {
            f64::INFINITY
        }
    }
}

impl AsRef<ProductRecord> for ProductRecord {
    fn as_ref(&self) -> &ProductRecord {
        self
    }
}

/// Map a raw table onto the canonical schema.
pub fn canonicalize(table: &RawTable) -> (Vec<ProductRecord>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    let names = text_column(table, PRODUCT_NAME, &mut diagnostics);
    let brands = text_column(table, BRAND, &mut diagnostics);
    let tiers = text_column(table, BRAND_TIER, &mut diagnostics);
    let price = numeric_column(table, PRICE_USD, &mut diagnostics);
    let cogs = numeric_column(table, COGS_USD, &mut diagnostics);
    let stock = numeric_column(table, UNITS_IN_STOCK, &mut diagnostics);
    let days = numeric_column(table, DAYS_OF_INVENTORY, &mut diagnostics);
    let views = numeric_column(table, VIEWS_LAST_MONTH, &mut diagnostics);
    let sold = numeric_column(table, VOLUME_SOLD_LAST_MONTH, &mut diagnostics);

    let records = (0..table.len())
        .map(|i| ProductRecord {
            product_name: names[i].clone(),
            brand: brands[i].clone(),
            brand_tier: tiers[i].clone(),
            price_usd: price[i].value,
            cogs_usd: cogs[i].value,
            units_in_stock: stock[i].value,
            days_of_inventory: days[i].value,
            views_last_month: views[i].value,
            volume_sold_last_month: sold[i].value,
            days_of_inventory_parsed: days[i].is_parsed(),
        })
        .collect();

    (records, diagnostics)
}

fn text_column(table: &RawTable, spec: ColumnSpec, diagnostics: &mut Vec<Diagnostic>) -> Vec<Option<String>> {
    match spec.locate(table) {
        Some(idx) => table.rows().iter().map(|row| row[idx].as_text()).collect(),
        None => {
            warn!("Expected column '{}' not found. Defaulting '{}' to empty.", spec.source, spec.canonical);
            diagnostics.push(Diagnostic::MissingSourceField { column: spec.source.to_string() });
            vec![None; table.len()]
        }
    }
}

/// Coerce a numeric column with default 0. An absent column is synthesised as zeros
/// that count as real values.
fn numeric_column(table: &RawTable, spec: ColumnSpec, diagnostics: &mut Vec<Diagnostic>) -> Vec<Coerced> {
    let Some(idx) = spec.locate(table) else {
        warn!("Expected column '{}' not found. Defaulting '{}' to 0.", spec.source, spec.canonical);
        diagnostics.push(Diagnostic::MissingSourceField { column: spec.source.to_string() });
        return vec![Coerced { value: 0.0, source: Source::Numeric }; table.len()];
    };

    let mut unparseable = 0usize;
    let column = table
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let coerced = coerce_value(&cells[idx], 0.0);
            if coerced.source == Source::Unparseable {
                unparseable += 1;
                let raw = cells[idx].as_text().unwrap_or_default();
                debug!("Row {row}: '{raw}' in '{}' is not numeric", spec.source);
                diagnostics.push(Diagnostic::UnparseableValue {
                    column: spec.source.to_string(),
                    row,
                    raw,
                });
            }
            coerced
        })
        .collect();

    if unparseable > 0 {
        warn!("Column '{}': {} unparseable value(s) defaulted to 0", spec.source, unparseable);
    }
    column
}
