//! WASM bindings for csvtex
//!
//! This module provides JavaScript-accessible functions for rendering CSV
//! text into LaTeX tables.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Render options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct TableConvertOptions {
    /// Field delimiter (default: ",")
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Table caption
    #[serde(default)]
    pub caption: String,
    /// Table label
    #[serde(default)]
    pub label: String,
    /// Column alignment spec
    #[serde(default = "default_align")]
    pub align: String,
    /// Units, one per column
    #[serde(default)]
    pub units: Option<Vec<String>>,
    /// Escape LaTeX reserved characters
    #[serde(default = "default_true")]
    pub escape: bool,
    /// Only emit the row lines
    #[serde(default)]
    pub fragment: bool,
    /// First record holds the column names
    #[serde(default = "default_true")]
    pub header: bool,
    /// Float format such as ".2f"
    #[serde(default)]
    pub float_format: Option<String>,
}

#[cfg(feature = "wasm")]
impl Default for TableConvertOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            caption: String::new(),
            label: String::new(),
            align: default_align(),
            units: None,
            escape: true,
            fragment: false,
            header: true,
            float_format: None,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
fn default_delimiter() -> char {
    ','
}

#[cfg(feature = "wasm")]
fn default_align() -> String {
    "c".to_string()
}

#[cfg(feature = "wasm")]
impl TableConvertOptions {
    fn into_render_options(self) -> crate::TableResult<crate::RenderOptions> {
        let float_format = self
            .float_format
            .as_deref()
            .map(str::parse::<crate::FloatFormat>)
            .transpose()?;

        Ok(crate::RenderOptions {
            delimiter: self.delimiter,
            caption: self.caption,
            label: self.label,
            align: self.align,
            units: self.units,
            escape: self.escape,
            fragment: self.fragment,
            header: self.header,
            float_format,
        })
    }
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The rendered markup
    pub output: String,
    /// Whether rendering succeeded
    pub success: bool,
    /// Error message if rendering failed
    pub error: Option<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render CSV text as a LaTeX table
///
/// # Arguments
/// * `input` - Delimited text
/// * `options` - Render options object (missing fields use defaults)
///
/// # Returns
/// `{ output, success, error }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderTable")]
pub fn render_table_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: TableConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match opts
        .into_render_options()
        .and_then(|opts| crate::render_str(input, &opts))
    {
        Ok(output) => ConvertResult {
            output,
            success: true,
            error: None,
        },
        Err(e) => ConvertResult {
            output: String::new(),
            success: false,
            error: Some(e.to_string()),
        },
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Wrap rendered tables into a standalone LaTeX document
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "assembleDocument")]
pub fn assemble_document_wasm(tables: Vec<String>) -> String {
    crate::assemble_document(&tables)
}

/// Escape LaTeX reserved characters
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "escapeLatex")]
pub fn escape_latex_wasm(input: &str) -> String {
    crate::escape_latex(input)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
