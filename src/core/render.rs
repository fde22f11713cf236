//! LaTeX table rendering
//!
//! Builds a booktabs `table*` float (or only its rows in fragment mode) from
//! a [`TableData`]. Each structural block has its own builder so the final
//! markup is assembled from plain strings:
//!
//! ```text
//! \begin{table*}[htb]
//!     \centering
//!     \begin{tabular}{@{}lcr@{}}
//!         \toprule
//!         Name & Age & City \\
//!         \midrule
//!         John & 25 & New York \\
//!         \bottomrule
//!     \end{tabular}
//! \caption{\footnotesize Sample Table}
//! \label{tab:sample}
//! \end{table*}
//! ```

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::core::alignment::format_alignment;
use crate::core::options::{FloatFormat, RenderOptions};
use crate::core::table::{Cell, TableData};
use crate::data::escape::escape_latex;
use crate::utils::error::{TableError, TableResult};

/// Separator between cells of a row
pub const CELL_SEPARATOR: &str = " & ";

/// Terminator appended to every row
pub const ROW_TERMINATOR: &str = r" \\";

/// Unit tokens rendered as an empty cell (matched before escaping)
pub const HIDDEN_UNITS: [&str; 3] = ["-", "/", "0"];

/// Read a delimited file and render it as LaTeX.
///
/// # Errors
/// Fails if the file cannot be read, a row has the wrong number of fields,
/// or an option is invalid. Nothing is written anywhere.
pub fn render_table(path: impl AsRef<Path>, options: &RenderOptions) -> TableResult<String> {
    let table = TableData::from_path(path, options.delimiter, options.header)?;
    render_data(&table, options)
}

/// Render delimited text held in memory
pub fn render_str(input: &str, options: &RenderOptions) -> TableResult<String> {
    let table = TableData::from_str_data(input, options.delimiter, options.header)?;
    render_data(&table, options)
}

/// Render delimited text from any reader
pub fn render_reader<R: Read>(reader: R, options: &RenderOptions) -> TableResult<String> {
    let table = TableData::from_reader(reader, options.delimiter, options.header)?;
    render_data(&table, options)
}

/// Render already parsed table data.
///
/// Header presence follows the data; `options.header` and
/// `options.delimiter` only matter when loading.
pub fn render_data(table: &TableData, options: &RenderOptions) -> TableResult<String> {
    let num_cols = table.num_cols();

    if let Some(ref units) = options.units {
        if units.len() != num_cols {
            return Err(TableError::invalid(format!(
                "expected {} units (one per column), got {}",
                num_cols,
                units.len()
            )));
        }
    }

    let mut rows: Vec<String> = Vec::with_capacity(table.num_rows() + 3);

    if let Some(names) = table.header() {
        rows.push(header_row(names, options.escape));
    }

    if let Some(ref units) = options.units {
        rows.push(units_row(units, options.escape));
    }

    if table.has_header() {
        rows.push(r"\midrule".to_string());
    }

    rows.extend(
        table
            .rows()
            .iter()
            .map(|row| data_row(row, options.escape, options.float_format)),
    );

    let indent = options.indent();
    let content = indent_rows(&rows, indent);

    debug!(
        "rendered {} row lines for {} columns (fragment: {})",
        rows.len(),
        num_cols,
        options.fragment
    );

    if options.fragment {
        return Ok(content);
    }

    let align = format_alignment(&options.align, num_cols);
    let caption = caption_line(&options.caption, options.escape);
    let label = label_line(&options.label);

    Ok([
        table_opening(indent, &align),
        content,
        table_footer(indent, caption.as_deref(), label.as_deref()),
    ]
    .join("\n"))
}

/// Join cells into one terminated row
fn row_line<I>(cells: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let cells: Vec<String> = cells.into_iter().collect();
    format!("{}{}", cells.join(CELL_SEPARATOR), ROW_TERMINATOR)
}

/// Column names row
pub fn header_row(names: &[String], escape: bool) -> String {
    row_line(names.iter().map(|name| {
        if escape {
            escape_latex(name)
        } else {
            name.clone()
        }
    }))
}

/// Units row: `[unit]` per column, empty for hidden markers
pub fn units_row(units: &[String], escape: bool) -> String {
    row_line(units.iter().map(|unit| unit_cell(unit, escape)))
}

/// A single units cell
pub fn unit_cell(unit: &str, escape: bool) -> String {
    if HIDDEN_UNITS.contains(&unit) {
        String::new()
    } else if escape {
        format!("[{}]", escape_latex(unit))
    } else {
        format!("[{}]", unit)
    }
}

/// One data row
pub fn data_row(cells: &[Cell], escape: bool, float_format: Option<FloatFormat>) -> String {
    row_line(cells.iter().map(|cell| cell.to_latex(escape, float_format)))
}

fn indent_rows(rows: &[String], indent: &str) -> String {
    rows.iter()
        .map(|row| format!("{indent}{indent}{row}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Opening lines up to and including `\toprule`
pub fn table_opening(indent: &str, align: &str) -> String {
    format!(
        "\\begin{{table*}}[htb]\n\
         {indent}\\centering\n\
         {indent}\\begin{{tabular}}{{@{{}}{align}@{{}}}}\n\
         {indent}{indent}\\toprule"
    )
}

/// Closing lines from `\bottomrule` to `\end{table*}`
pub fn table_footer(indent: &str, caption: Option<&str>, label: Option<&str>) -> String {
    let mut lines = vec![
        format!("{indent}{indent}\\bottomrule"),
        format!("{indent}\\end{{tabular}}"),
    ];
    lines.extend(caption.map(str::to_string));
    lines.extend(label.map(str::to_string));
    lines.push("\\end{table*}".to_string());
    lines.join("\n")
}

/// `\caption{\footnotesize ...}`, or `None` for an empty caption
pub fn caption_line(caption: &str, escape: bool) -> Option<String> {
    if caption.is_empty() {
        return None;
    }
    let text = if escape {
        escape_latex(caption)
    } else {
        caption.to_string()
    };
    Some(format!("\\caption{{\\footnotesize {}}}", text))
}

/// `\label{...}`, or `None` for an empty label
pub fn label_line(label: &str) -> Option<String> {
    if label.is_empty() {
        None
    } else {
        Some(format!("\\label{{{}}}", label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> TableData {
        TableData::new(
            Some(vec!["Name".into(), "Age".into(), "City".into()]),
            vec![
                vec!["John".into(), 25.into(), "New York".into()],
                vec!["Alice".into(), 30.into(), "London".into()],
                vec!["Bob".into(), 35.into(), "Paris".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_full_table_markup() {
        let opts = RenderOptions::new()
            .with_caption("Sample Table")
            .with_label("tab:sample")
            .with_align("lcr");
        let result = render_data(&sample(), &opts).unwrap();

        let expected = r"\begin{table*}[htb]
    \centering
    \begin{tabular}{@{}lcr@{}}
        \toprule
        Name & Age & City \\
        \midrule
        John & 25 & New York \\
        Alice & 30 & London \\
        Bob & 35 & Paris \\
        \bottomrule
    \end{tabular}
\caption{\footnotesize Sample Table}
\label{tab:sample}
\end{table*}";
        assert_eq!(result, expected);
    }

    #[test]
    fn test_fragment_markup() {
        let result = render_data(&sample(), &RenderOptions::fragment()).unwrap();
        let expected = "Name & Age & City \\\\\n\\midrule\nJohn & 25 & New York \\\\\nAlice & 30 & London \\\\\nBob & 35 & Paris \\\\";
        assert_eq!(result, expected);
        assert!(!result.contains(r"\begin{table"));
        assert!(!result.contains(r"\end{table"));
    }

    #[test]
    fn test_caption_and_label_omitted_when_empty() {
        let result = render_data(&sample(), &RenderOptions::default()).unwrap();
        assert!(!result.contains(r"\caption"));
        assert!(!result.contains(r"\label"));
        assert!(result.ends_with("    \\end{tabular}\n\\end{table*}"));
    }

    #[test]
    fn test_units_row() {
        let opts = RenderOptions::fragment().with_units(["-", "yr", "/"]);
        let result = render_data(&sample(), &opts).unwrap();
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], r"Name & Age & City \\");
        assert_eq!(lines[1], r" & [yr] &  \\");
        assert_eq!(lines[2], r"\midrule");
    }

    #[test]
    fn test_unit_cell() {
        for hidden in ["-", "/", "0"] {
            assert_eq!(unit_cell(hidden, true), "");
            assert_eq!(unit_cell(hidden, false), "");
        }
        assert_eq!(unit_cell("m/s", true), "[m/s]");
        assert_eq!(unit_cell("00", true), "[00]");
    }

    #[test]
    fn test_units_escaped_with_cells() {
        assert_eq!(unit_cell("%", true), r"[\%]");
        assert_eq!(unit_cell("m_s", true), r"[m\_s]");
        assert_eq!(unit_cell("m_s", false), "[m_s]");

        let opts = RenderOptions::fragment().with_units(["%", "-", "m_s"]);
        let result = render_data(&sample(), &opts).unwrap();
        assert_eq!(result.lines().nth(1), Some(r"[\%] &  & [m\_s] \\"));
    }

    #[test]
    fn test_units_count_mismatch() {
        let opts = RenderOptions::default().with_units(["m"]);
        let err = render_data(&sample(), &opts).unwrap_err();
        assert!(matches!(err, TableError::InvalidOption { .. }));
    }

    #[test]
    fn test_escaping_cells_header_and_caption() {
        let table = TableData::new(
            Some(vec!["cost_%".into()]),
            vec![vec!["R&D".into()]],
        )
        .unwrap();
        let opts = RenderOptions::new().with_caption("50% off").with_label("tab:a_b");
        let result = render_data(&table, &opts).unwrap();
        assert!(result.contains(r"cost\_\% \\"));
        assert!(result.contains(r"R\&D \\"));
        assert!(result.contains(r"\caption{\footnotesize 50\% off}"));
        assert!(result.contains(r"\label{tab:a_b}"));

        let raw = render_data(&table, &opts.clone().with_escape(false)).unwrap();
        assert!(raw.contains(r"R&D \\"));
        assert!(raw.contains(r"\caption{\footnotesize 50% off}"));
    }

    #[test]
    fn test_float_format() {
        let table = TableData::new(
            Some(vec!["x".into(), "n".into()]),
            vec![vec![1.23456.into(), 4.into()], vec![2.0.into(), 5.into()]],
        )
        .unwrap();
        let plain = render_data(&table, &RenderOptions::fragment()).unwrap();
        assert!(plain.contains(r"1.23456 & 4 \\"));
        assert!(plain.contains(r"2.0 & 5 \\"));

        let opts = RenderOptions::fragment().with_float_format(FloatFormat::Fixed(2));
        let formatted = render_data(&table, &opts).unwrap();
        assert!(formatted.contains(r"1.23 & 4 \\"));
        assert!(formatted.contains(r"2.00 & 5 \\"));
    }

    #[test]
    fn test_no_header_has_no_midrule() {
        let table = TableData::new(None, vec![vec!["a".into(), "b".into()]]).unwrap();
        let result = render_data(&table, &RenderOptions::default().with_header(false)).unwrap();
        assert!(!result.contains(r"\midrule"));
        assert!(result.contains(r"        a & b \\"));
        assert!(result.contains(r"\begin{tabular}{@{}cc@{}}"));
    }

    #[test]
    fn test_row_count() {
        let opts = RenderOptions::default().with_units(["", "yr", "-"]);
        let result = render_data(&sample(), &opts).unwrap();
        let rows = result.lines().filter(|l| l.ends_with(r"\\")).count();
        assert_eq!(rows, 1 + 1 + 3);
    }

    #[test]
    fn test_invalid_align_falls_back() {
        let opts = RenderOptions::default().with_align("lxr");
        let result = render_data(&sample(), &opts).unwrap();
        assert!(result.contains(r"\begin{tabular}{@{}ccc@{}}"));
    }

    #[test]
    fn test_source_text_preserved() {
        let csv = "id,code\n007,A12\n+44,B\n12345678901234567890,C\n1e20,D\n";
        let result = render_str(csv, &RenderOptions::fragment()).unwrap();
        let lines: Vec<&str> = result.lines().skip(2).collect();
        assert_eq!(
            lines,
            vec![
                r"007 & A12 \\",
                r"+44 & B \\",
                r"12345678901234567890 & C \\",
                r"1e20 & D \\",
            ]
        );
    }

    #[test]
    fn test_render_str_semicolon() {
        let opts = RenderOptions::fragment().with_delimiter(';');
        let result = render_str("a;b\n1;2\n", &opts).unwrap();
        assert_eq!(result, "a & b \\\\\n\\midrule\n1 & 2 \\\\");
    }
}
