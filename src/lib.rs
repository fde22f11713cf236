//! # csvtex
//!
//! Convert delimited text tables (CSV, TSV, ...) into LaTeX `booktabs` markup.
//!
//! ## Features
//!
//! - **Typed cells**: integers, floats and text are told apart at parse time
//! - **Escaping**: LaTeX reserved characters `# $ % & _ { }` are escaped
//! - **Alignment**: per-column `l`/`c`/`r` with a center fallback
//! - **Units row**: optional `[unit]` row under the header
//! - **Float formatting**: `.2f` / `.3e` style number formats
//! - **Fragments**: rows only, for hand-written table environments
//! - **Documents**: wrap several tables into a standalone document
//!
//! ## Usage Examples
//!
//! ### Rendering a table
//!
//! ```rust
//! use csvtex::{render_str, RenderOptions};
//!
//! let csv = "Name,Age\nJohn,25\n";
//! let options = RenderOptions::new()
//!     .with_caption("People")
//!     .with_label("tab:people");
//!
//! let latex = render_str(csv, &options).unwrap();
//! assert!(latex.contains(r"\begin{table*}[htb]"));
//! assert!(latex.contains(r"John & 25 \\"));
//! assert!(latex.contains(r"\label{tab:people}"));
//! ```
//!
//! ### Writing a document
//!
//! ```rust,no_run
//! use csvtex::{render_table, save_document, RenderOptions, WriteMode};
//!
//! let first = render_table("results.csv", &RenderOptions::default())?;
//! let second = render_table("timings.csv", &RenderOptions::default())?;
//! let report = save_document(&[first, second], "tables.tex", WriteMode::Replace)?;
//! println!("{}", report);
//! # Ok::<(), csvtex::TableError>(())
//! ```

/// Core table conversion
pub mod core;

/// Data layer - static mappings
pub mod data;

/// Feature modules - document assembly
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use core::{
    format_alignment, parse_alignment, render_data, render_reader, render_str, render_table,
    Alignment, Cell, CellValue, FloatFormat, RenderOptions, TableData,
};

// Re-export data modules
pub use data::escape;
pub use data::escape::escape_latex;

// Re-export feature modules
pub use features::document;
pub use features::document::assemble_document;

#[cfg(not(target_arch = "wasm32"))]
pub use features::document::save_document;

// Re-export utilities
pub use utils::error::{TableError, TableResult};
pub use utils::files;
pub use utils::files::{WriteMode, WriteReport};

#[cfg(not(target_arch = "wasm32"))]
pub use utils::files::{save_table, save_tables};
