use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors raised while adding files or libraries to a workspace.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Unsupported file extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// `name` is `None` when the definition could not be read far enough
    /// to know it.
    #[error("Invalid library definition: {source}")]
    Library {
        name: Option<String>,
        #[source]
        source: serde_json::Error,
    },
}

impl WorkspaceError {
    /// Attach a path to a parse failure. Extension problems keep their own
    /// variant.
    pub fn from_parse(path: PathBuf, error: ParseError) -> Self {
        match error {
            ParseError::MissingExtension(_) | ParseError::UnsupportedExtension(_) => {
                WorkspaceError::UnsupportedExtension(path)
            }
            source => WorkspaceError::Parse { path, source },
        }
    }
}
