//! Error handling for csvtex
//!
//! This module provides a unified error type and result type for table
//! loading, rendering and writing.

use std::fmt;

/// Table error type
#[derive(Debug)]
pub enum TableError {
    /// IO error (reading the source or writing the output)
    Io(std::io::Error),
    /// Malformed delimited input
    Csv {
        message: String,
        line: Option<u64>,
    },
    /// A record whose field count differs from the header or first row
    RaggedRow {
        line: Option<u64>,
        expected: usize,
        found: usize,
    },
    /// Invalid render option
    InvalidOption { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(err) => write!(f, "IO error: {}", err),
            TableError::Csv { message, line } => {
                if let Some(l) = line {
                    write!(f, "Parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
            TableError::RaggedRow {
                line,
                expected,
                found,
            } => {
                if let Some(l) = line {
                    write!(
                        f,
                        "Ragged row at line {}: expected {} fields, found {}",
                        l, expected, found
                    )
                } else {
                    write!(
                        f,
                        "Ragged row: expected {} fields, found {}",
                        expected, found
                    )
                }
            }
            TableError::InvalidOption { message } => {
                write!(f, "Invalid option: {}", message)
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err)
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line());
        match err.into_kind() {
            csv::ErrorKind::Io(io) => TableError::Io(io),
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => TableError::RaggedRow {
                line: pos.map(|p| p.line()).or(line),
                expected: expected_len as usize,
                found: len as usize,
            },
            csv::ErrorKind::Utf8 { pos, err } => TableError::Csv {
                message: err.to_string(),
                line: pos.map(|p| p.line()).or(line),
            },
            other => TableError::Csv {
                message: format!("{:?}", other),
                line,
            },
        }
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TableError::InvalidOption {
            message: message.into(),
        }
    }

    pub fn ragged(line: Option<u64>, expected: usize, found: usize) -> Self {
        TableError::RaggedRow {
            line,
            expected,
            found,
        }
    }

    /// Whether this error comes from inconsistent field counts
    pub fn is_ragged(&self) -> bool {
        matches!(self, TableError::RaggedRow { .. })
    }
}
