//! Derived merchandising features.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::schema::ProductRecord;

/// The four features that are normalised and can carry a scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ProfitMargin,
    SalesVelocity,
    Engagement,
    BrandTierWeight,
}

/// Accepted `scoring_weights` keys. `brand_tier` is the historical name for the
/// tier-weight feature and both spellings resolve to it.
const CONFIG_KEYS: [(&str, Feature); 5] = [
    ("profit_margin", Feature::ProfitMargin),
    ("sales_velocity", Feature::SalesVelocity),
    ("engagement", Feature::Engagement),
    ("brand_tier", Feature::BrandTierWeight),
    ("brand_tier_weight", Feature::BrandTierWeight),
];

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::ProfitMargin,
        Feature::SalesVelocity,
        Feature::Engagement,
        Feature::BrandTierWeight,
    ];

    pub fn from_config_key(key: &str) -> Option<Feature> {
        CONFIG_KEYS
            .iter()
            .find(|(k, _)| *k == key.trim())
            .map(|(_, feature)| *feature)
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::ProfitMargin => "profit_margin",
            Feature::SalesVelocity => "sales_velocity",
            Feature::Engagement => "engagement",
            Feature::BrandTierWeight => "brand_tier_weight",
        }
    }

    /// Position in [`Feature::ALL`], used to index fixed-size feature arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A canonical record together with its derived features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    pub record: ProductRecord,
    /// (price − cogs) / price, 0 when price ≤ 0. Negative when sold below cost.
    pub profit_margin: f64,
    pub sales_velocity: f64,
    pub engagement: f64,
    pub brand_tier_weight: f64,
}

impl FeatureRow {
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::ProfitMargin => self.profit_margin,
            Feature::SalesVelocity => self.sales_velocity,
            Feature::Engagement => self.engagement,
            Feature::BrandTierWeight => self.brand_tier_weight,
        }
    }
}

impl AsRef<ProductRecord> for FeatureRow {
    fn as_ref(&self) -> &ProductRecord {
        &self.record
    }
}

pub fn profit_margin(price: f64, cogs: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    let margin = (price - cogs) / price;
    if margin.is_finite() { margin } else { 0.0 }
}

/// Tier weight lookup; unmapped or absent tiers weigh 0.
pub fn brand_tier_weight(tier: Option<&str>, tier_weights: &HashMap<String, f64>) -> f64 {
    tier.and_then(|t| tier_weights.get(t))
        .copied()
        .filter(|w| w.is_finite())
        .unwrap_or(0.0)
}

pub fn derive_features(records: &[ProductRecord], tier_weights: &HashMap<String, f64>) -> Vec<FeatureRow> {
    records
        .iter()
        .map(|record| FeatureRow {
            profit_margin: profit_margin(record.price_usd, record.cogs_usd),
            sales_velocity: record.volume_sold_last_month,
            engagement: record.views_last_month,
            brand_tier_weight: brand_tier_weight(record.brand_tier.as_deref(), tier_weights),
            record: record.clone(),
        })
        .collect()
}
