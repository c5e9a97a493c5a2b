//! In-memory raw product table.
//!
//! Mirrors a loosely typed delimited file: named columns, rows of cells that may be
//! numbers, free text, or missing. No column is guaranteed to exist.

/// A single raw cell.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Missing,
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Interpret a cell read from a delimited file. Empty cells are missing, cells that
    /// parse cleanly as a float are numbers, everything else is kept as text for
    /// later coercion (e.g. "1,200").
    pub fn parse_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return RawValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => RawValue::Number(n),
            _ => RawValue::Text(cell.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawValue::Missing)
    }

    /// Text form of the cell, `None` when missing or blank.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawValue::Missing => None,
            RawValue::Number(n) => Some(format_number(*n)),
            RawValue::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }
}

/// Integral floats print without a trailing ".0" so "1001" stays "1001".
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(RawValue::Missing)
    }
}

/// Column headers plus rows. Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<RawValue>>,
}

impl RawTable {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with `Missing` and dropping surplus cells.
    pub fn push_row(&mut self, mut row: Vec<RawValue>) {
        row.resize(self.headers.len(), RawValue::Missing);
        self.rows.push(row);
    }

    pub fn with_row(mut self, row: Vec<RawValue>) -> Self {
        self.push_row(row);
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<RawValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header equal to `name`, ignoring surrounding whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// All cells of a named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&RawValue>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&RawValue> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(RawValue::parse_cell(""), RawValue::Missing);
        assert_eq!(RawValue::parse_cell("   "), RawValue::Missing);
        assert_eq!(RawValue::parse_cell("36.22"), RawValue::Number(36.22));
        assert_eq!(RawValue::parse_cell(" 12 "), RawValue::Number(12.0));
        assert_eq!(RawValue::parse_cell("1,200"), RawValue::Text("1,200".to_string()));
        assert_eq!(RawValue::parse_cell("NaN"), RawValue::Text("NaN".to_string()));
    }

    #[test]
    fn test_as_text() {
        assert_eq!(RawValue::Number(1001.0).as_text().as_deref(), Some("1001"));
        assert_eq!(RawValue::Number(2.5).as_text().as_deref(), Some("2.5"));
        assert_eq!(RawValue::from("  COSRX ").as_text().as_deref(), Some("COSRX"));
        assert_eq!(RawValue::from("").as_text(), None);
        assert_eq!(RawValue::Missing.as_text(), None);
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let table = RawTable::new(["Product Name", "Brand", "Price (USD)"])
            .with_row(vec!["Toner".into()])
            .with_row(vec!["Serum".into(), "Laneige".into(), 20.0_f64.into(), "extra".into()]);

        assert_eq!(table.len(), 2);
        assert!(table.rows().iter().all(|r| r.len() == 3));
        assert_eq!(table.cell(0, "Brand"), Some(&RawValue::Missing));
        assert_eq!(table.cell(1, "Price (USD)"), Some(&RawValue::Number(20.0)));
    }

    #[test]
    fn test_column_lookup_trims_headers() {
        let table = RawTable::new([" Brand ", "Units in Stock"])
            .with_row(vec!["A".into(), 5i64.into()]);
        assert_eq!(table.column_index("Brand"), Some(0));
        assert_eq!(table.column("Units in Stock").unwrap(), vec![&RawValue::Number(5.0)]);
        assert!(table.column("Views Last Month").is_none());
    }
}
