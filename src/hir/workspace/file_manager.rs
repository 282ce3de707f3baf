use std::path::Path;

use tracing::debug;

use super::core::NamespaceTarget;
use crate::hir::workspace::{Workspace, WorkspaceFile};

impl Workspace {
    /// Adds a file, replacing any earlier version at the same path.
    pub fn add_file(&mut self, file: WorkspaceFile) {
        // Retract the previous version's symbols before merging new ones
        let replaced = self.remove_file_by_path(file.path()).is_some();

        self.keywords.copy_from(file.keywords());
        self.variables.copy_from(file.variables());

        let path = file.path().to_path_buf();
        if !file.namespace().is_empty() {
            self.namespaces.insert(
                file.namespace().to_lowercase(),
                NamespaceTarget::File(path.clone()),
            );
        }

        debug!(
            path = %path.display(),
            keywords = file.keywords().size(),
            variables = file.variables().size(),
            replaced,
            "file added"
        );
        self.files.insert(path, file);
    }

    /// Removes a file and retracts its symbols. Returns the removed file.
    pub fn remove_file_by_path(&mut self, path: &Path) -> Option<WorkspaceFile> {
        let file = self.files.shift_remove(path)?;

        self.keywords.remove_all(file.keywords());
        self.variables.remove_all(file.variables());

        let namespace = file.namespace().to_lowercase();
        let owned = matches!(
            self.namespaces.get(&namespace),
            Some(NamespaceTarget::File(p)) if p.as_path() == path
        );
        if owned {
            self.reassign_namespace(&namespace);
        }

        debug!(path = %path.display(), "file removed");
        Some(file)
    }
}
