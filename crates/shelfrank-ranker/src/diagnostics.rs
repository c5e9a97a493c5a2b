//! Recoverable conditions raised while scoring.
//!
//! None of these abort a run. Stages return them next to their output so the whole
//! pipeline stays defined for every input, and the caller decides what to surface.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An expected source column is absent; every row got the default.
    MissingSourceField { column: String },
    /// A present cell could not be read as a number; the default was used.
    UnparseableValue { column: String, row: usize, raw: String },
    /// A scoring weight names no known feature; it contributes nothing.
    MisconfiguredWeight { key: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingSourceField { column } => {
                write!(f, "expected column '{column}' not found, defaulting")
            }
            Diagnostic::UnparseableValue { column, row, raw } => {
                write!(f, "row {row}: '{raw}' in column '{column}' is not numeric, defaulting")
            }
            Diagnostic::MisconfiguredWeight { key } => {
                write!(f, "scoring weight '{key}' matches no normalised feature, skipped")
            }
        }
    }
}

/// Count diagnostics by kind: (missing fields, unparseable values, misconfigured weights).
pub fn tally(diagnostics: &[Diagnostic]) -> (usize, usize, usize) {
    diagnostics.iter().fold((0, 0, 0), |(m, u, w), d| match d {
        Diagnostic::MissingSourceField { .. } => (m + 1, u, w),
        Diagnostic::UnparseableValue { .. } => (m, u + 1, w),
        Diagnostic::MisconfiguredWeight { .. } => (m, u, w + 1),
    })
}
