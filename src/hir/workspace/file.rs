//! Workspace file representation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::hir::container::{KeywordContainer, VariableContainer};
use crate::hir::error::WorkspaceError;
use crate::hir::symbols::{ExtractedSymbols, SymbolOrigin, extract_symbols};
use crate::parser::ast::TestSuite;
use crate::syntax::{SyntaxFile, parse_content};

/// A parsed file with the symbols it declares
#[derive(Debug, Clone)]
pub struct WorkspaceFile {
    path: Arc<Path>,
    syntax: SyntaxFile,
    symbols: ExtractedSymbols,
}

impl WorkspaceFile {
    /// Parse `text`, choosing the parser from the path's extension.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Result<Self, WorkspaceError> {
        let path = path.into();
        let syntax =
            parse_content(text, &path).map_err(|e| WorkspaceError::from_parse(path.clone(), e))?;
        Ok(Self::from_syntax(path, syntax))
    }

    pub fn from_syntax(path: impl Into<PathBuf>, syntax: SyntaxFile) -> Self {
        let path: Arc<Path> = Arc::from(path.into());
        let symbols = extract_symbols(
            syntax.suite(),
            syntax.namespace(),
            &SymbolOrigin::File(path.clone()),
        );
        Self {
            path,
            syntax,
            symbols,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn syntax(&self) -> &SyntaxFile {
        &self.syntax
    }

    pub fn suite(&self) -> &TestSuite {
        self.syntax.suite()
    }

    pub fn namespace(&self) -> &str {
        self.syntax.namespace()
    }

    pub fn symbols(&self) -> &ExtractedSymbols {
        &self.symbols
    }

    pub fn keywords(&self) -> &KeywordContainer {
        &self.symbols.keywords
    }

    pub fn variables(&self) -> &VariableContainer {
        &self.symbols.variables
    }
}
