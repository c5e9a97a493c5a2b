//! Composite product score.
//!
//! score = Σ(w_i × n_i) over the configured weights, where n_i is the normalised
//! feature. Weights need not sum to 1 and the score is not clamped.

use std::collections::BTreeMap;
use tracing::warn;

use crate::diagnostics::Diagnostic;
use crate::features::Feature;
use crate::normalise::NormalizedFeatures;

/// Scoring weights resolved against the known features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightPlan {
    terms: Vec<(Feature, f64)>,
}

impl WeightPlan {
    /// Resolve configured keys to features. Unknown keys are dropped with a
    /// [`Diagnostic::MisconfiguredWeight`]; unconfigured features contribute 0.
    pub fn resolve(scoring_weights: &BTreeMap<String, f64>) -> (Self, Vec<Diagnostic>) {
        let mut terms = Vec::with_capacity(scoring_weights.len());
        let mut diagnostics = Vec::new();

        for (key, &weight) in scoring_weights {
            match Feature::from_config_key(key) {
                Some(feature) => terms.push((feature, weight)),
                None => {
                    warn!("Normalized component 'norm_{key}' for scoring weight '{key}' not found; skipping");
                    diagnostics.push(Diagnostic::MisconfiguredWeight { key: key.clone() });
                }
            }
        }

        (Self { terms }, diagnostics)
    }

    pub fn terms(&self) -> &[(Feature, f64)] {
        &self.terms
    }

    /// Effective weight of a feature (sum when configured under both of its names).
    pub fn weight_of(&self, feature: Feature) -> f64 {
        self.terms
            .iter()
            .filter(|(f, _)| *f == feature)
            .map(|(_, w)| w)
            .sum()
    }

    pub fn score(&self, normed: &NormalizedFeatures) -> f64 {
        self.terms
            .iter()
            .map(|(feature, weight)| weight * normed.get(*feature))
            .sum()
    }
}
