//! Writing rendered markup to files
//!
//! Markup is written with a single open-write-close per call, followed by a
//! blank line so consecutive appends stay separated. There is no transactional
//! guarantee: a failed write leaves the target as the OS left it.

use std::fmt;
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use std::fs::OpenOptions;
#[cfg(not(target_arch = "wasm32"))]
use std::io::Write;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

#[cfg(not(target_arch = "wasm32"))]
use log::info;

#[cfg(not(target_arch = "wasm32"))]
use crate::utils::error::TableResult;

/// Separator written after every piece of markup
pub const MARKUP_SEPARATOR: &str = "\n\n";

/// How the target file is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate the target first
    Replace,
    /// Append to the target, creating it if needed
    #[default]
    Append,
}

impl WriteMode {
    pub fn from_replace(replace: bool) -> Self {
        if replace {
            WriteMode::Replace
        } else {
            WriteMode::Append
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            WriteMode::Replace => "written to",
            WriteMode::Append => "appended to",
        }
    }
}

/// Outcome of a completed write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub mode: WriteMode,
}

impl fmt::Display for WriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The table is {} {}", self.mode.verb(), self.path.display())
    }
}

/// Write `markup` plus a blank line to `path`
#[cfg(not(target_arch = "wasm32"))]
pub fn save_table(
    markup: &str,
    path: impl AsRef<Path>,
    mode: WriteMode,
) -> TableResult<WriteReport> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Replace => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };

    let mut file = options.open(path)?;
    file.write_all(markup.as_bytes())?;
    file.write_all(MARKUP_SEPARATOR.as_bytes())?;

    let report = WriteReport {
        path: path.to_path_buf(),
        mode,
    };
    info!("{}", report);
    Ok(report)
}

/// Write several markups to one file.
///
/// Only the first write honors `mode`; the rest append, so a `Replace` call
/// never truncates its own earlier output.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_tables<S: AsRef<str>>(
    markups: &[S],
    path: impl AsRef<Path>,
    mode: WriteMode,
) -> TableResult<Vec<WriteReport>> {
    let path = path.as_ref();
    markups
        .iter()
        .enumerate()
        .map(|(i, markup)| {
            let mode = if i == 0 { mode } else { WriteMode::Append };
            save_table(markup.as_ref(), path, mode)
        })
        .collect()
}
