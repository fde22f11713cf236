//! Data layer - Static mappings
//!
//! This module contains the static data used while rendering:
//! - LaTeX reserved characters and their escaped forms

pub mod escape;

// Re-export commonly used items
pub use escape::{escape_latex, is_reserved, RESERVED_CHARS};
