//! shelfrank-ranker — Merchandising score and rank engine.
//!
//! Stages run strictly forward, each producing a new table:
//! raw table → canonical records → features → filtered → normalised → scored → ranked.
//! The engine is total: malformed-but-present data never produces an error, only
//! [`Diagnostic`]s.

pub mod coerce;
pub mod diagnostics;
pub mod features;
pub mod filter;
pub mod normalise;
pub mod pipeline;
pub mod rank;
pub mod schema;
pub mod scorer;
pub mod table;

pub use diagnostics::Diagnostic;
pub use features::Feature;
pub use pipeline::{score_and_rank, ProductScorer, RankingOutput, OUTPUT_COLUMNS};
pub use rank::RankedProduct;
pub use table::{RawTable, RawValue};
