//! Best-effort numeric coercion of raw cells.

use crate::table::RawValue;

/// How a coerced value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Cell already held a number
    Numeric,
    /// Text parsed after stripping thousands separators
    Parsed,
    /// Cell was missing; default used
    Missing,
    /// Cell held text that is not a number; default used
    Unparseable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coerced {
    pub value: f64,
    pub source: Source,
}

impl Coerced {
    /// True when the value came from the cell rather than the default.
    pub fn is_parsed(&self) -> bool {
        matches!(self.source, Source::Numeric | Source::Parsed)
    }
}

/// Coerce one cell. Never fails: non-finite numbers count as missing, and text that
/// does not parse after removing commas falls back to `default`.
pub fn coerce_value(value: &RawValue, default: f64) -> Coerced {
    match value {
        RawValue::Number(n) if n.is_finite() => Coerced { value: *n, source: Source::Numeric },
        RawValue::Number(_) | RawValue::Missing => Coerced { value: default, source: Source::Missing },
        RawValue::Text(text) => {
            let cleaned = text.replace(',', "");
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                return Coerced { value: default, source: Source::Missing };
            }
            match cleaned.parse::<f64>() {
                Ok(n) if n.is_finite() => Coerced { value: n, source: Source::Parsed },
                _ => Coerced { value: default, source: Source::Unparseable },
            }
        }
    }
}

/// Coerce a whole column; output has the same length as the input.
pub fn coerce_column<'a>(values: impl IntoIterator<Item = &'a RawValue>, default: f64) -> Vec<f64> {
    values.into_iter().map(|v| coerce_value(v, default).value).collect()
}
