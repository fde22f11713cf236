//! Render options for table conversion

use std::fmt;
use std::str::FromStr;

use crate::utils::error::TableError;

/// Number format applied to float cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatFormat {
    /// Fixed-point with the given number of decimals (`.2f`)
    Fixed(usize),
    /// Scientific notation with the given mantissa decimals (`.3e`)
    Scientific(usize),
}

/// Largest precision the formatter accepts at runtime
pub const MAX_PRECISION: usize = u16::MAX as usize;

impl FloatFormat {
    /// Format `value`; precisions above [`MAX_PRECISION`] are clamped.
    pub fn apply(&self, value: f64) -> String {
        match *self {
            FloatFormat::Fixed(precision) => {
                format!("{:.*}", precision.min(MAX_PRECISION), value)
            }
            FloatFormat::Scientific(precision) => {
                format_scientific(value, precision.min(MAX_PRECISION))
            }
        }
    }
}

/// `1.235e+03` style, with a signed two-digit exponent like printf
fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        // inf and NaN carry no exponent
        None => formatted,
    }
}

impl FromStr for FloatFormat {
    type Err = TableError;

    /// Accepts `.2f`, `%.2f`, `{:.2f}`, `{:.2}`, `.3e` and `%.3E`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        let spec = spec
            .strip_prefix("{:")
            .and_then(|rest| rest.strip_suffix('}'))
            .or_else(|| spec.strip_prefix('%'))
            .unwrap_or(spec);

        let body = spec
            .strip_prefix('.')
            .ok_or_else(|| TableError::invalid(format!("unsupported float format '{}'", s)))?;

        let (digits, kind) = match body.char_indices().last() {
            Some((idx, c)) if c.is_ascii_alphabetic() => (&body[..idx], Some(c)),
            _ => (body, None),
        };

        let precision: usize = digits
            .parse()
            .map_err(|_| TableError::invalid(format!("invalid float precision in '{}'", s)))?;

        if precision > MAX_PRECISION {
            return Err(TableError::invalid(format!(
                "float precision {} in '{}' exceeds {}",
                precision, s, MAX_PRECISION
            )));
        }

        match kind {
            None | Some('f') | Some('F') => Ok(FloatFormat::Fixed(precision)),
            Some('e') | Some('E') => Ok(FloatFormat::Scientific(precision)),
            Some(other) => Err(TableError::invalid(format!(
                "unsupported float conversion '{}' in '{}'",
                other, s
            ))),
        }
    }
}

impl fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatFormat::Fixed(p) => write!(f, ".{}f", p),
            FloatFormat::Scientific(p) => write!(f, ".{}e", p),
        }
    }
}

/// Table rendering options
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Field delimiter of the source (default: ',')
    pub delimiter: char,
    /// Table caption; empty means no caption line
    pub caption: String,
    /// Table label; empty means no label line
    pub label: String,
    /// Column alignment spec, e.g. "c", "lcr" (default: "c")
    pub align: String,
    /// One unit per column, rendered as a row under the header
    pub units: Option<Vec<String>>,
    /// Escape LaTeX reserved characters in cells, header and caption
    pub escape: bool,
    /// Emit only the row lines, without the table environment
    pub fragment: bool,
    /// Treat the first record as column names
    pub header: bool,
    /// Format applied to float cells
    pub float_format: Option<FloatFormat>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            caption: String::new(),
            label: String::new(),
            align: "c".to_string(),
            units: None,
            escape: true,
            fragment: false,
            header: true,
            float_format: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for row content only (no table environment)
    pub fn fragment() -> Self {
        Self {
            fragment: true,
            ..Default::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = align.into();
        self
    }

    pub fn with_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.units = Some(units.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_float_format(mut self, format: FloatFormat) -> Self {
        self.float_format = Some(format);
        self
    }

    /// Indent unit: four spaces, or nothing in fragment mode
    pub fn indent(&self) -> &'static str {
        if self.fragment {
            ""
        } else {
            "    "
        }
    }
}
