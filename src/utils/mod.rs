//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Writing rendered markup to files

pub mod error;
pub mod files;

// Re-export commonly used items
pub use error::{TableError, TableResult};
pub use files::{WriteMode, WriteReport};

#[cfg(not(target_arch = "wasm32"))]
pub use files::{save_table, save_tables};
