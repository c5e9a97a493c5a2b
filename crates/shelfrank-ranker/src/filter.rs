//! Business filters on stock level and inventory age.

use shelfrank_common::FilterConfig;
use tracing::debug;

use crate::schema::ProductRecord;

/// Whether a record passes every configured threshold. Unconfigured thresholds are
/// skipped; a record with unknown inventory age fails an active max-days threshold.
pub fn passes(record: &ProductRecord, filters: &FilterConfig) -> bool {
    if let Some(min_stock) = filters.min_stock {
        if record.units_in_stock < min_stock as f64 {
            return false;
        }
    }
    if let Some(max_days) = filters.max_inventory_days {
        if record.inventory_age() > max_days as f64 {
            return false;
        }
    }
    true
}

/// Drop rows failing the filters. Surviving rows keep their relative order and values.
pub fn apply_filters<R: AsRef<ProductRecord>>(rows: Vec<R>, filters: &FilterConfig) -> Vec<R> {
    let before = rows.len();
    let kept: Vec<R> = rows
        .into_iter()
        .filter(|row| passes(row.as_ref(), filters))
        .collect();
    debug!("Applied filters. Original rows: {}, filtered rows: {}", before, kept.len());
    kept
}
