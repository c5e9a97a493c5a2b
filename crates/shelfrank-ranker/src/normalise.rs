//! Per-batch feature normalisation.
//!
//! Scales are recomputed from the rows being ranked on every call; the same product
//! can normalise differently against a different peer set.

use serde::Serialize;

use crate::features::{Feature, FeatureRow};

/// Min-max normalisation of one feature column.
///
/// - max > min: (v − min) / (max − min), in [0, 1]
/// - max == min ≠ 0: every row ties at a nonzero value and is treated as maximal (1.0)
/// - max == min == 0, or no rows: 0.0
pub fn min_max(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return vec![];
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max > min {
        let span = max - min;
        values.iter().map(|v| (v - min) / span).collect()
    } else if max != 0.0 {
        vec![1.0; values.len()]
    } else {
        vec![0.0; values.len()]
    }
}

/// Normalised values for the four features of one row, indexed by [`Feature::index`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NormalizedFeatures([f64; 4]);

impl NormalizedFeatures {
    pub fn new(values: [f64; 4]) -> Self {
        Self(values)
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }
}

/// Normalise every feature independently across `rows`. Output is row-aligned.
pub fn normalize_features(rows: &[FeatureRow]) -> Vec<NormalizedFeatures> {
    let mut normalized = vec![NormalizedFeatures::default(); rows.len()];
    for feature in Feature::ALL {
        let column: Vec<f64> = rows.iter().map(|r| r.value(feature)).collect();
        for (slot, value) in normalized.iter_mut().zip(min_max(&column)) {
            slot.0[feature.index()] = value;
        }
    }
    normalized
}
