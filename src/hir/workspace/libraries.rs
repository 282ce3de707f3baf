use tracing::debug;

use super::core::NamespaceTarget;
use crate::hir::library::Library;
use crate::hir::workspace::Workspace;

impl Workspace {
    /// Register a library. A library with the same name (ignoring case) is
    /// replaced.
    pub fn add_library(&mut self, library: Library) {
        let key = library.name().to_lowercase();
        self.remove_library(&key);

        self.keywords.copy_from(&library.symbols().keywords);
        self.variables.copy_from(&library.symbols().variables);
        self.namespaces
            .insert(key.clone(), NamespaceTarget::Library(key.clone()));

        debug!(
            library = library.name(),
            version = library.version(),
            keywords = library.symbols().keywords.size(),
            "library added"
        );
        self.libraries.insert(key, library);
    }

    pub fn remove_library(&mut self, name: &str) -> Option<Library> {
        let key = name.to_lowercase();
        let library = self.libraries.shift_remove(&key)?;

        self.keywords.remove_all(&library.symbols().keywords);
        self.variables.remove_all(&library.symbols().variables);
        if matches!(self.namespaces.get(&key), Some(NamespaceTarget::Library(k)) if *k == key) {
            self.reassign_namespace(&key);
        }

        debug!(library = library.name(), "library removed");
        Some(library)
    }

    pub fn remove_all_libraries(&mut self) {
        let names: Vec<String> = self.libraries.keys().cloned().collect();
        for name in names {
            self.remove_library(&name);
        }
    }

    pub fn get_library(&self, name: &str) -> Option<&Library> {
        self.libraries.get(&name.to_lowercase())
    }

    pub fn libraries(&self) -> impl Iterator<Item = &Library> {
        self.libraries.values()
    }
}
