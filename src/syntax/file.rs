//! Parsed file wrapper for both supported source languages.

use crate::base::constants::{PYTHON_EXT, TABULAR_EXTENSIONS};
use crate::parser::ast::TestSuite;
use crate::parser::{ParseError, parse_file, parse_python_source};

/// Source language of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLanguage {
    /// `.robot`, `.resource`, `.txt` test data
    Tabular,
    /// `.py` keyword library
    Python,
}

impl FileLanguage {
    /// Language for a file extension, compared case-insensitively
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_lowercase();
        if TABULAR_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Tabular)
        } else if extension == PYTHON_EXT {
            Some(Self::Python)
        } else {
            None
        }
    }
}

/// A parsed file: its AST plus the namespace its keywords live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxFile {
    suite: TestSuite,
    namespace: String,
    language: FileLanguage,
}

impl SyntaxFile {
    pub fn new(source: &str, language: FileLanguage, namespace: &str) -> Result<Self, ParseError> {
        let suite = match language {
            FileLanguage::Tabular => parse_file(source, namespace)?,
            FileLanguage::Python => parse_python_source(source, namespace),
        };
        Ok(Self {
            suite,
            namespace: namespace.to_string(),
            language,
        })
    }

    /// Parse tabular test data
    pub fn tabular(source: &str, namespace: &str) -> Result<Self, ParseError> {
        Self::new(source, FileLanguage::Tabular, namespace)
    }

    /// Parse a python keyword library
    pub fn python(source: &str, namespace: &str) -> Self {
        Self {
            suite: parse_python_source(source, namespace),
            namespace: namespace.to_string(),
            language: FileLanguage::Python,
        }
    }

    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn language(&self) -> FileLanguage {
        self.language
    }

    pub fn is_python(&self) -> bool {
        self.language == FileLanguage::Python
    }
}
