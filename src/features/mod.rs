//! Feature modules - Output assembly
//!
//! This module contains helpers built on top of the renderer:
//! - Standalone document assembly

pub mod document;

// Re-export commonly used items
pub use document::{assemble_document, DOCUMENT_END, PREAMBLE};

#[cfg(not(target_arch = "wasm32"))]
pub use document::save_document;
