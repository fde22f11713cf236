//! Column alignment handling
//!
//! Turns a user alignment spec (`"c"`, `"lcr"`, ...) into the column string
//! used by `\begin{tabular}`: exactly one `l`, `c` or `r` per column.

use log::debug;

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// Parse from a LaTeX alignment character
    pub fn from_latex_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(Alignment::Left),
            'c' => Some(Alignment::Center),
            'r' => Some(Alignment::Right),
            _ => None,
        }
    }

    /// Convert to a LaTeX alignment character
    pub fn to_latex_char(&self) -> char {
        match self {
            Alignment::Left => 'l',
            Alignment::Center => 'c',
            Alignment::Right => 'r',
        }
    }
}

/// Parse an alignment spec into one alignment per column.
///
/// - Any character outside `l`, `c`, `r`: every column is centered.
/// - A single character: repeated for every column.
/// - Matching length: used as is.
/// - Otherwise: truncated from the right, or padded on the right with center.
pub fn parse_alignment(spec: &str, column_count: usize) -> Vec<Alignment> {
    let parsed: Option<Vec<Alignment>> = spec.chars().map(Alignment::from_latex_char).collect();

    let Some(mut aligns) = parsed else {
        debug!(
            "invalid alignment spec {:?}, centering all {} columns",
            spec, column_count
        );
        return vec![Alignment::Center; column_count];
    };

    if aligns.len() == 1 {
        return vec![aligns[0]; column_count];
    }

    if aligns.len() != column_count {
        debug!(
            "alignment spec {:?} has {} entries for {} columns, adjusting",
            spec,
            aligns.len(),
            column_count
        );
        aligns.resize(column_count, Alignment::Center);
    }
    aligns
}

/// Format an alignment spec as the tabular column string
pub fn format_alignment(spec: &str, column_count: usize) -> String {
    parse_alignment(spec, column_count)
        .iter()
        .map(Alignment::to_latex_char)
        .collect()
}
