//! Tabular input model and delimited-text loading
//!
//! A [`TableData`] is an ordered list of rows of [`Cell`]s (source text plus
//! a tagged [`CellValue`]) with optional column names. Every constructor
//! checks that all rows share one width, so ragged input never reaches the
//! renderer.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::core::options::FloatFormat;
use crate::data::escape::escape_latex;
use crate::utils::error::{TableError, TableResult};

/// A single cell value, typed at parse time
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl CellValue {
    /// Type a raw field: integer first, then float, otherwise text.
    ///
    /// Empty fields stay empty text. Digit strings too long for an `i64`
    /// stay text rather than losing precision as a float.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Text(raw.to_string());
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if looks_float(trimmed) {
            if let Ok(f) = trimmed.parse::<f64>() {
                return CellValue::Float(f);
            }
        }
        CellValue::Text(raw.to_string())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Float(_))
    }
}

/// Rust accepts `inf`, `nan` and `infinity` as floats; keep those as text.
fn looks_float(s: &str) -> bool {
    s.contains(['.', 'e', 'E'])
        && s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Integer(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on whole floats
            CellValue::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Integer(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

/// A table cell: the field as written plus its parsed type
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    text: String,
    value: CellValue,
}

impl Cell {
    /// Keep `raw` verbatim and tag it with its parsed type
    pub fn parse(raw: &str) -> Self {
        Self {
            text: raw.to_string(),
            value: CellValue::parse(raw),
        }
    }

    /// The field as it appeared in the source
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Render the cell for a table row.
    ///
    /// Only float cells under a float format are rewritten (and never
    /// escaped); everything else keeps its source text.
    pub fn to_latex(&self, escape: bool, float_format: Option<FloatFormat>) -> String {
        match (&self.value, float_format) {
            (CellValue::Float(f), Some(format)) => format.apply(*f),
            _ if escape => escape_latex(&self.text),
            _ => self.text.clone(),
        }
    }
}

impl From<CellValue> for Cell {
    fn from(value: CellValue) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }
}

/// Parsed tabular input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableData {
    /// Column names, if the source had a header row
    header: Option<Vec<String>>,
    /// Data rows, all of the same width
    rows: Vec<Vec<Cell>>,
}

impl TableData {
    /// Build a table from rows and optional column names.
    ///
    /// Fails with a ragged-row error if any row width differs from the header
    /// (or from the first row when there is no header).
    pub fn new(header: Option<Vec<String>>, rows: Vec<Vec<CellValue>>) -> TableResult<Self> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Cell::from).collect())
            .collect();
        Self::from_cells(header, rows)
    }

    fn from_cells(header: Option<Vec<String>>, rows: Vec<Vec<Cell>>) -> TableResult<Self> {
        let expected = match (&header, rows.first()) {
            (Some(names), _) => Some(names.len()),
            (None, Some(first)) => Some(first.len()),
            (None, None) => None,
        };

        if let Some(expected) = expected {
            // Header occupies the first line when present
            let offset = if header.is_some() { 2 } else { 1 };
            for (i, row) in rows.iter().enumerate() {
                if row.len() != expected {
                    return Err(TableError::ragged(
                        Some((i + offset) as u64),
                        expected,
                        row.len(),
                    ));
                }
            }
        }

        Ok(Self { header, rows })
    }

    /// Load delimited text from a file path
    pub fn from_path(
        path: impl AsRef<Path>,
        delimiter: char,
        has_header: bool,
    ) -> TableResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file, delimiter, has_header)
    }

    /// Load delimited text from an in-memory string
    pub fn from_str_data(input: &str, delimiter: char, has_header: bool) -> TableResult<Self> {
        Self::from_reader(input.as_bytes(), delimiter, has_header)
    }

    /// Load delimited text from any reader
    pub fn from_reader<R: Read>(
        reader: R,
        delimiter: char,
        has_header: bool,
    ) -> TableResult<Self> {
        let delimiter = delimiter_byte(delimiter)?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(has_header)
            .flexible(false)
            .from_reader(reader);

        let header = if has_header {
            let names = csv_reader.headers()?;
            Some(names.iter().map(str::to_string).collect::<Vec<_>>())
        } else {
            None
        };

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::parse).collect());
        }

        let table = Self::from_cells(header, rows)?;
        debug!(
            "loaded table: {} columns, {} rows, header: {}",
            table.num_cols(),
            table.num_rows(),
            table.has_header()
        );
        Ok(table)
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn has_header(&self) -> bool {
        self.header.is_some()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Column count, from the header or else the first row
    pub fn num_cols(&self) -> usize {
        match (&self.header, self.rows.first()) {
            (Some(names), _) => names.len(),
            (None, Some(first)) => first.len(),
            (None, None) => 0,
        }
    }
}

/// Convert the configured delimiter into the single byte the reader needs
fn delimiter_byte(delimiter: char) -> TableResult<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(TableError::invalid(format!(
            "delimiter must be a single ASCII character, got {:?}",
            delimiter
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_parse_tags() {
        assert_eq!(CellValue::parse("25"), CellValue::Integer(25));
        assert_eq!(CellValue::parse("-3"), CellValue::Integer(-3));
        assert_eq!(CellValue::parse("2.5"), CellValue::Float(2.5));
        assert_eq!(CellValue::parse("1e3"), CellValue::Float(1000.0));
        assert_eq!(CellValue::parse("New York"), CellValue::from("New York"));
        assert_eq!(CellValue::parse(""), CellValue::from(""));
        assert_eq!(CellValue::parse("nan"), CellValue::from("nan"));
        assert_eq!(CellValue::parse("inf"), CellValue::from("inf"));
        assert_eq!(
            CellValue::parse("99999999999999999999"),
            CellValue::from("99999999999999999999")
        );
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Integer(30).to_string(), "30");
        assert_eq!(CellValue::Float(25.0).to_string(), "25.0");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_cell_to_latex() {
        let text = Cell::parse("a_b");
        assert_eq!(text.to_latex(true, None), r"a\_b");
        assert_eq!(text.to_latex(false, None), "a_b");

        let float = Cell::parse("3.14159");
        assert_eq!(float.to_latex(true, Some(FloatFormat::Fixed(2))), "3.14");
        assert_eq!(float.to_latex(true, None), "3.14159");

        // Integers ignore the float format
        let int = Cell::parse("7");
        assert_eq!(int.to_latex(true, Some(FloatFormat::Fixed(2))), "7");
    }

    #[test]
    fn test_cell_keeps_source_text() {
        let cases = [
            ("007", CellValue::Integer(7)),
            ("+44", CellValue::Integer(44)),
            ("1e20", CellValue::Float(1e20)),
            ("1.50", CellValue::Float(1.5)),
            (
                "12345678901234567890",
                CellValue::from("12345678901234567890"),
            ),
        ];
        for (raw, value) in cases {
            let cell = Cell::parse(raw);
            assert_eq!(cell.value(), &value, "typing {:?}", raw);
            assert_eq!(cell.text(), raw);
            assert_eq!(cell.to_latex(true, None), raw);
        }

        // A float format rewrites floats only
        let format = Some(FloatFormat::Fixed(1));
        assert_eq!(Cell::parse("1.50").to_latex(true, format), "1.5");
        assert_eq!(Cell::parse("007").to_latex(true, format), "007");
    }

    #[test]
    fn test_cell_from_value() {
        let cell = Cell::from(CellValue::Float(2.0));
        assert_eq!(cell.text(), "2.0");
        assert!(cell.value().is_numeric());
    }

    #[test]
    fn test_load_with_header() {
        let table = TableData::from_str_data("a,b\n1,x\n2,y\n", ',', true).unwrap();
        assert_eq!(table.header(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(table.num_cols(), 2);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.rows()[1][1].value(), &CellValue::from("y"));
    }

    #[test]
    fn test_load_without_header() {
        let table = TableData::from_str_data("1;2\n3;4\n", ';', false).unwrap();
        assert!(!table.has_header());
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.rows()[0][0].value(), &CellValue::Integer(1));
    }

    #[test]
    fn test_quoted_fields() {
        let table = TableData::from_str_data("name,city\n\"Doe, J\",\"A \"\"B\"\"\"\n", ',', true)
            .unwrap();
        assert_eq!(table.rows()[0][0].text(), "Doe, J");
        assert_eq!(table.rows()[0][1].text(), "A \"B\"");
    }

    #[test]
    fn test_ragged_input_fails() {
        let err = TableData::from_str_data("a,b,c\n1,2,3\n4,5\n", ',', true).unwrap_err();
        assert!(err.is_ragged(), "unexpected error: {}", err);

        let err = TableData::from_str_data("1,2\n3,4,5\n", ',', false).unwrap_err();
        assert!(err.is_ragged(), "unexpected error: {}", err);
    }

    #[test]
    fn test_new_checks_widths() {
        let rows = vec![vec![CellValue::from(1), CellValue::from(2)]];
        let err = TableData::new(Some(vec!["only".to_string()]), rows).unwrap_err();
        assert!(err.is_ragged());

        let empty = TableData::new(None, Vec::new()).unwrap();
        assert_eq!(empty.num_cols(), 0);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = TableData::from_str_data("a§b", '§', false).unwrap_err();
        assert!(matches!(err, TableError::InvalidOption { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = TableData::from_path("/nonexistent/table.csv", ',', true).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }
}
