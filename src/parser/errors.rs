//! Structural parse errors.
//!
//! Malformed rows are not errors: they are dropped and parsing continues.
//! These variants cover the cases that indicate a caller or dispatcher bug.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A setting reached a function that does not own it, e.g. `[Return]`
    /// dispatched to a test case.
    #[error("{owner} does not accept setting [{setting}] (line {line})")]
    UnexpectedSetting {
        setting: String,
        owner: &'static str,
        line: usize,
    },

    /// A setting row with no cells, so no bracketed name to parse.
    #[error("{owner} setting [{setting}] has no cells")]
    EmptySetting {
        setting: String,
        owner: &'static str,
    },

    /// The path has no extension to dispatch on.
    #[error("No file extension: {0}")]
    MissingExtension(PathBuf),

    /// The extension is not one of the supported languages.
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),
}
