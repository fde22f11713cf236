//! Core table conversion
//!
//! This module contains the table renderer and its inputs:
//! - `table`: tagged cell values and delimited-text loading
//! - `options`: render options and float formats
//! - `alignment`: column alignment specs
//! - `render`: LaTeX markup assembly

pub mod alignment;
pub mod options;
pub mod render;
pub mod table;

// Re-export main types and functions
pub use alignment::{format_alignment, parse_alignment, Alignment};
pub use options::{FloatFormat, RenderOptions};
pub use render::{render_data, render_reader, render_str, render_table};
pub use table::{Cell, CellValue, TableData};
