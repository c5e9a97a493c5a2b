//! End-to-end scoring: raw table in, ranked projection out.
//!
//! canonicalize → derive features → filter → [empty?] → normalise → score → rank → project

use serde::Serialize;
use shelfrank_common::WeightsConfig;
use tracing::{debug, info, warn};

use crate::diagnostics::{self, Diagnostic};
use crate::features::derive_features;
use crate::filter::apply_filters;
use crate::normalise::normalize_features;
use crate::rank::{rank_products, RankedProduct, ScoredProduct};
use crate::schema::canonicalize;
use crate::scorer::WeightPlan;
use crate::table::RawTable;

/// Output columns, always present in this order even when there are no rows.
pub const OUTPUT_COLUMNS: [&str; 5] = ["Product Name", "Brand", "Price (USD)", "score", "rank"];

/// Result of one scoring run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankingOutput {
    pub rows: Vec<RankedProduct>,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

impl RankingOutput {
    fn empty(diagnostics: Vec<Diagnostic>) -> Self {
        Self { rows: Vec::new(), diagnostics }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &OUTPUT_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Scores product tables against one immutable weights configuration.
#[derive(Debug, Clone)]
pub struct ProductScorer {
    config: WeightsConfig,
    plan: WeightPlan,
    weight_diagnostics: Vec<Diagnostic>,
}

impl ProductScorer {
    pub fn new(config: WeightsConfig) -> Self {
        let (plan, weight_diagnostics) = WeightPlan::resolve(&config.scoring_weights);
        debug!(
            "ProductScorer initialized. Default top_n: {}, filters: {:?}, weights: {:?}",
            config.top_n_products, config.filters, config.scoring_weights
        );
        Self { config, plan, weight_diagnostics }
    }

    pub fn config(&self) -> &WeightsConfig {
        &self.config
    }

    pub fn default_top_n(&self) -> i64 {
        self.config.top_n_products
    }

    /// Score and rank `table`, keeping `top_n` rows (the configured default when `None`).
    /// Never fails: empty input, or nothing surviving the filters, gives an empty output.
    pub fn process(&self, table: &RawTable, top_n: Option<i64>) -> RankingOutput {
        let top_n = top_n.unwrap_or(self.config.top_n_products);
        info!("Scorer processing {} products for top_n={}", table.len(), top_n);

        let mut diagnostics = self.weight_diagnostics.clone();
        if table.is_empty() {
            info!("Scorer: input table is empty");
            return RankingOutput::empty(diagnostics);
        }

        let (records, schema_diagnostics) = canonicalize(table);
        diagnostics.extend(schema_diagnostics);

        let features = derive_features(&records, &self.config.brand_tier_weights);
        let filtered = apply_filters(features, &self.config.filters);
        if filtered.is_empty() {
            info!("Scorer: no products left after filtering");
            return RankingOutput::empty(diagnostics);
        }

        let normalized = normalize_features(&filtered);
        let scored: Vec<ScoredProduct> = filtered
            .into_iter()
            .zip(normalized.iter())
            .map(|(row, normed)| ScoredProduct {
                score: self.plan.score(normed),
                record: row.record,
            })
            .collect();

        let rows = rank_products(scored, top_n);

        let (missing, unparseable, misconfigured) = diagnostics::tally(&diagnostics);
        if missing + unparseable + misconfigured > 0 {
            warn!(
                "Scorer recovered from {} missing column(s), {} unparseable value(s), {} misconfigured weight(s)",
                missing, unparseable, misconfigured
            );
        }
        info!("Scorer processed {} products", rows.len());

        RankingOutput { rows, diagnostics }
    }
}

/// One-shot scoring with a borrowed configuration.
pub fn score_and_rank(table: &RawTable, weights: &WeightsConfig, top_n: Option<i64>) -> RankingOutput {
    ProductScorer::new(weights.clone()).process(table, top_n)
}
