//! One catalog run: load the raw export, score it, persist the ranking.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use shelfrank_common::{Result, Settings, WeightsConfig};
use shelfrank_ranker::{ProductScorer, RankingOutput, RawTable};

use crate::loader::load_raw_table;
use crate::writer::save_ranked;

/// Ties the file layout from [`Settings`] to a [`ProductScorer`].
#[derive(Debug, Clone)]
pub struct DataProcessor {
    settings: Settings,
    scorer: ProductScorer,
}

impl DataProcessor {
    pub fn new(settings: Settings, weights: WeightsConfig) -> Self {
        info!(
            "DataProcessor initialized. Raw: {}, processed: {}",
            settings.raw_data_path().display(),
            settings.processed_data_path().display()
        );
        Self {
            settings,
            scorer: ProductScorer::new(weights),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scorer(&self) -> &ProductScorer {
        &self.scorer
    }

    /// Load raw data from `path`, or the configured raw file.
    pub async fn load_data(&self, path: Option<&Path>) -> Result<RawTable> {
        let path = self.resolve(path, Settings::raw_data_path);
        load_raw_table(&path).await
    }

    pub fn process_and_score(&self, raw: &RawTable, top_n: Option<i64>) -> RankingOutput {
        self.scorer.process(raw, top_n)
    }

    /// Persist a ranking. Empty rankings are skipped with a warning.
    pub async fn save_processed(&self, output: &RankingOutput, path: Option<&Path>) -> Result<()> {
        if output.is_empty() {
            warn!("Processed data is empty. Nothing to save.");
            return Ok(());
        }
        let path = self.resolve(path, Settings::processed_data_path);
        save_ranked(&path, output).await
    }

    /// Load, score and save. A missing or empty raw file ends the run early with an
    /// empty ranking; other I/O failures propagate.
    pub async fn run_full_pipeline(&self, top_n: Option<i64>) -> Result<RankingOutput> {
        info!("Starting full data processing pipeline...");

        let raw = match self.load_data(None).await {
            Ok(raw) => raw,
            Err(e) if e.is_not_found() => {
                warn!("{}. Pipeline aborted.", e);
                return Ok(RankingOutput::default());
            }
            Err(e) => return Err(e),
        };
        if raw.is_empty() {
            warn!("Raw data is empty. Pipeline aborted.");
            return Ok(RankingOutput::default());
        }

        let ranked = self.process_and_score(&raw, top_n);
        if ranked.is_empty() {
            warn!("Processing and scoring resulted in empty data.");
        } else {
            self.save_processed(&ranked, None).await?;
        }

        info!("Pipeline finished with {} ranked products", ranked.len());
        Ok(ranked)
    }

    fn resolve(&self, path: Option<&Path>, default: fn(&Settings) -> PathBuf) -> PathBuf {
        path.map(Path::to_path_buf)
            .unwrap_or_else(|| default(&self.settings))
    }
}
