use std::fmt;

use super::sanitize::sanitize_column_name;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common spreadsheet dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date/duration string kept as text for simplicity.
    Date(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Infer a typed value from raw text (CSV cells).
    pub fn from_text(s: &str) -> CellValue {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded tabular dataset: ordered column names plus rows of cells.
///
/// Column headers are sanitized on construction, so every exposed name
/// matches `^[A-Za-z0-9_]*$` (possibly empty, see
/// [`sanitize_column_name`]). A table is immutable once built; loading a
/// new file replaces it wholesale.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table from raw headers and rows, sanitizing every header.
    pub fn new(raw_columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let columns = raw_columns
            .iter()
            .map(|c| sanitize_column_name(c))
            .collect();
        Table { columns, rows }
    }

    /// Sanitized column names, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column in the schema, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Cell at (row, column), if both indices are in range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(col)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_sanitized_on_construction() {
        let table = Table::new(
            vec![" [Revenue (USD)] ".to_string(), "units sold".to_string()],
            vec![vec![CellValue::Integer(1), CellValue::Integer(2)]],
        );
        assert_eq!(table.columns(), ["RevenueUSD", "unitssold"]);
        assert_eq!(table.column_index("RevenueUSD"), Some(0));
        assert_eq!(table.column_index("unitssold"), Some(1));
        assert_eq!(table.column_index("Revenue (USD)"), None);
    }

    #[test]
    fn from_text_infers_cell_types() {
        assert_eq!(CellValue::from_text(""), CellValue::Null);
        assert_eq!(CellValue::from_text("42"), CellValue::Integer(42));
        assert_eq!(CellValue::from_text("3.5"), CellValue::Float(3.5));
        assert_eq!(CellValue::from_text("true"), CellValue::Bool(true));
        assert_eq!(CellValue::from_text("false"), CellValue::Bool(false));
        assert_eq!(
            CellValue::from_text("North"),
            CellValue::String("North".to_string())
        );
    }

    #[test]
    fn as_f64_covers_numeric_variants_only() {
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(CellValue::Bool(true).as_f64(), None);
        assert_eq!(CellValue::String("3".to_string()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let table = Table::new(vec!["A".to_string()], vec![vec![CellValue::Integer(7)]]);
        assert_eq!(table.cell(0, 0), Some(&CellValue::Integer(7)));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 0), None);
    }
}
