//! Standalone document assembly
//!
//! Wraps already rendered tables into a compilable LaTeX document with the
//! packages the table markup relies on (`booktabs` for the rules).
//!
//! ## Example
//!
//! ```rust
//! use csvtex::document::assemble_document;
//!
//! let doc = assemble_document(&["table one", "table two"]);
//! assert!(doc.starts_with(r"\documentclass"));
//! assert!(doc.ends_with(r"\end{document}"));
//! ```

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

#[cfg(not(target_arch = "wasm32"))]
use crate::utils::error::TableResult;
#[cfg(not(target_arch = "wasm32"))]
use crate::utils::files::{save_table, WriteMode, WriteReport};

/// Document preamble, up to and including `\begin{document}`
pub const PREAMBLE: &str = r"\documentclass[11pt, a4paper]{article}
\usepackage{booktabs}
\usepackage{graphicx}
\begin{document}";

/// Document trailer
pub const DOCUMENT_END: &str = r"\end{document}";

/// Separator between the preamble, each table and the trailer
const PART_SEPARATOR: &str = "\n\n";

/// Wrap tables, in order, between the preamble and the trailer
pub fn assemble_document<S: AsRef<str>>(tables: &[S]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(tables.len() + 2);
    parts.push(PREAMBLE);
    parts.extend(tables.iter().map(AsRef::as_ref));
    parts.push(DOCUMENT_END);
    parts.join(PART_SEPARATOR)
}

/// Assemble a document and hand it to the file writer
#[cfg(not(target_arch = "wasm32"))]
pub fn save_document<S: AsRef<str>>(
    tables: &[S],
    path: impl AsRef<Path>,
    mode: WriteMode,
) -> TableResult<WriteReport> {
    save_table(&assemble_document(tables), path, mode)
}
