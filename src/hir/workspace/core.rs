use std::path::PathBuf;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::hir::container::{KeywordContainer, VariableContainer};
use crate::hir::library::Library;
use crate::hir::workspace::WorkspaceFile;

/// What a namespace resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum NamespaceTarget {
    File(PathBuf),
    /// Lowercased library name
    Library(String),
}

/// Files and libraries plus the global symbol containers built from them.
///
/// The global containers always hold exactly the union of the symbols of
/// every registered file and library.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub(super) files: IndexMap<PathBuf, WorkspaceFile>,
    /// Keyed by lowercased name
    pub(super) libraries: IndexMap<String, Library>,
    /// Keyed by lowercased namespace
    pub(super) namespaces: FxHashMap<String, NamespaceTarget>,
    pub(super) keywords: KeywordContainer,
    pub(super) variables: VariableContainer,
}

impl Workspace {
    /// Creates a new empty workspace
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a workspace from already parsed files and libraries.
    pub fn with_contents(
        files: impl IntoIterator<Item = WorkspaceFile>,
        libraries: impl IntoIterator<Item = Library>,
    ) -> Self {
        let mut workspace = Self::new();
        for library in libraries {
            workspace.add_library(library);
        }
        for file in files {
            workspace.add_file(file);
        }
        workspace
    }

    /// Point `key` (a lowercased namespace) at a module still registered under
    /// it after its previous owner went away: the library of that name if
    /// any, otherwise the most recently added file. Drops the entry when
    /// nothing is left.
    pub(super) fn reassign_namespace(&mut self, key: &str) {
        let target = if self.libraries.contains_key(key) {
            Some(NamespaceTarget::Library(key.to_string()))
        } else {
            self.files
                .iter()
                .rev()
                .find(|(_, file)| file.namespace().to_lowercase() == key)
                .map(|(path, _)| NamespaceTarget::File(path.clone()))
        };

        match target {
            Some(target) => {
                self.namespaces.insert(key.to_string(), target);
            }
            None => {
                self.namespaces.remove(key);
            }
        }
    }

    /// Drop every file, library and symbol.
    pub fn clear(&mut self) {
        self.files.clear();
        self.libraries.clear();
        self.namespaces.clear();
        self.keywords.clear();
        self.variables.clear();
    }
}
