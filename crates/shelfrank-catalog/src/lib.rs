//! Catalog file I/O and the load → score → save run.
//!
//! The scoring engine never touches the filesystem; this crate owns reading the raw
//! catalog export, persisting ranked output, and the detail lookup used by the API.
//!
//! # Example
//!
//! ```rust,no_run
//! use shelfrank_catalog::DataProcessor;
//! use shelfrank_common::{Settings, WeightsConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let weights = WeightsConfig::load_or_default(settings.weights_path());
//!     let processor = DataProcessor::new(settings, weights);
//!
//!     let ranked = processor.run_full_pipeline(Some(20)).await?;
//!     for row in &ranked.rows {
//!         println!("{:>3}. {} ({:.3})", row.rank, row.product_name, row.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod loader;
pub mod processor;
pub mod writer;

pub use loader::{find_product, load_raw_table, ProductDetail};
pub use processor::DataProcessor;
pub use writer::{load_ranked, save_ranked};
