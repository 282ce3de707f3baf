//! Path-aware parsing entry points.

use std::path::Path;

use crate::parser::ParseError;
use crate::syntax::file::{FileLanguage, SyntaxFile};

/// Get file extension from path
pub fn get_extension(path: &Path) -> Result<&str, ParseError> {
    path.extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ParseError::MissingExtension(path.to_path_buf()))
}

/// Validate that the extension belongs to a supported language
pub fn validate_extension(path: &Path) -> Result<FileLanguage, ParseError> {
    let ext = get_extension(path)?;
    FileLanguage::from_extension(ext).ok_or_else(|| ParseError::UnsupportedExtension(ext.to_string()))
}

/// Namespace of a file: its name without the extension.
pub fn namespace_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Parses source text, choosing the language from the path's extension
/// and the namespace from its file name.
pub fn parse_content(content: &str, path: &Path) -> Result<SyntaxFile, ParseError> {
    let language = validate_extension(path)?;
    SyntaxFile::new(content, language, &namespace_from_path(path))
}
