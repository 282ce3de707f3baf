//! AnalysisHost and Analysis: shared workspace state for IDE features.
//!
//! The `AnalysisHost` owns the workspace behind a read-write lock. Mutators
//! parse outside the lock and then apply the whole remove-then-add merge
//! under a single write acquisition, so a reader never observes a file
//! half-merged into the index.
//!
//! ## Usage
//!
//! ```ignore
//! let host = AnalysisHost::new();
//! host.set_file_content("/ws/common.resource", "*** Keywords ***\nOpen App\n")?;
//!
//! let analysis = host.analysis();
//! let items = analysis.completions("open");
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::base::Position;
use crate::hir::{Library, Workspace, WorkspaceError, WorkspaceFile};
use crate::syntax::NodeRef;

use super::{
    CompletionItem, GotoTarget, Reference, SymbolInfo, completions, document_symbols,
    find_references_at, goto_definition, node_at_position, workspace_symbols,
};

/// Single-writer handle to a workspace. Clones share the same workspace.
#[derive(Clone, Default)]
pub struct AnalysisHost {
    workspace: Arc<RwLock<Workspace>>,
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_workspace(workspace: Workspace) -> Self {
        Self {
            workspace: Arc::new(RwLock::new(workspace)),
        }
    }

    /// Parse `content` and replace whatever the workspace held for `path`.
    pub fn set_file_content(
        &self,
        path: impl Into<PathBuf>,
        content: &str,
    ) -> Result<(), WorkspaceError> {
        let file = WorkspaceFile::from_text(path, content)?;
        self.set_file(file);
        Ok(())
    }

    /// Add or replace an already parsed file.
    pub fn set_file(&self, file: WorkspaceFile) {
        self.workspace.write().add_file(file);
    }

    /// Add or replace several parsed files under one write lock.
    pub fn set_files(&self, files: Vec<WorkspaceFile>) {
        let mut workspace = self.workspace.write();
        for file in files {
            workspace.add_file(file);
        }
    }

    /// Returns whether the file was present.
    pub fn remove_file(&self, path: &Path) -> bool {
        self.workspace.write().remove_file_by_path(path).is_some()
    }

    pub fn add_library(&self, library: Library) {
        self.workspace.write().add_library(library);
    }

    pub fn remove_all_libraries(&self) {
        self.workspace.write().remove_all_libraries();
    }

    pub fn has_file(&self, path: &Path) -> bool {
        self.workspace.read().get_file(path).is_some()
    }

    pub fn file_count(&self) -> usize {
        self.workspace.read().file_count()
    }

    /// Swap in a fully built workspace.
    pub fn replace_workspace(&self, workspace: Workspace) {
        let files = workspace.file_count();
        *self.workspace.write() = workspace;
        debug!(files, "workspace replaced");
    }

    /// Rebuild from in-memory sources: parse in parallel, build a fresh
    /// workspace off-lock, then swap it in. Sources that fail to parse are
    /// left out and returned.
    pub fn rebuild_from(
        &self,
        sources: Vec<(PathBuf, String)>,
        libraries: Vec<Library>,
    ) -> Vec<WorkspaceError> {
        let results: Vec<_> = sources
            .into_par_iter()
            .map(|(path, text)| WorkspaceFile::from_text(path, &text))
            .collect();

        let mut files = Vec::with_capacity(results.len());
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(file) => files.push(file),
                Err(error) => {
                    warn!(%error, "failed to parse file during rebuild");
                    errors.push(error);
                }
            }
        }

        self.replace_workspace(Workspace::with_contents(files, libraries));
        errors
    }

    /// Read access for queries. Writers wait while the guard lives.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis {
            workspace: self.workspace.read(),
        }
    }
}

/// A consistent read view of the workspace.
pub struct Analysis<'a> {
    workspace: RwLockReadGuard<'a, Workspace>,
}

impl Analysis<'_> {
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Get completions for a partially typed cell.
    pub fn completions(&self, text: &str) -> Vec<CompletionItem> {
        completions(&self.workspace, text)
    }

    /// Go to definition at a position.
    pub fn goto_definition(&self, path: &Path, position: Position) -> Vec<GotoTarget> {
        goto_definition(&self.workspace, path, position)
    }

    /// Find all references to the keyword at a position.
    pub fn find_references(
        &self,
        path: &Path,
        position: Position,
        include_declaration: bool,
    ) -> Vec<Reference> {
        find_references_at(&self.workspace, path, position, include_declaration)
    }

    /// Get all symbols in a document.
    pub fn document_symbols(&self, path: &Path) -> Vec<SymbolInfo> {
        self.workspace
            .get_file(path)
            .map(document_symbols)
            .unwrap_or_default()
    }

    /// Search for symbols across the workspace.
    pub fn workspace_symbols(&self, query: Option<&str>) -> Vec<SymbolInfo> {
        workspace_symbols(&self.workspace, query)
    }

    /// Deepest AST node at a position.
    pub fn node_at(&self, path: &Path, position: Position) -> Option<NodeRef<'_>> {
        let file = self.workspace.get_file(path)?;
        node_at_position(file.suite(), position)
    }
}
