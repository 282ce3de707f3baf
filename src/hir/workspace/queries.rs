use std::path::Path;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::core::NamespaceTarget;
use crate::hir::container::{KeywordContainer, VariableContainer, normalize_key};
use crate::hir::library::Library;
use crate::hir::symbols::{ExtractedSymbols, KeywordSymbol, VariableSymbol};
use crate::parser::ast::{Identifier, VariableKind};
use crate::hir::workspace::{Workspace, WorkspaceFile};

/// Keywords sharing one normalized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordGroup {
    pub name: SmolStr,
    pub keywords: Vec<KeywordSymbol>,
    /// Whether a completion should be written `Namespace.Name`
    pub show_namespace: bool,
}

/// A file or library registered under a namespace
#[derive(Debug, Clone, Copy)]
pub enum Module<'a> {
    File(&'a WorkspaceFile),
    Library(&'a Library),
}

impl<'a> Module<'a> {
    pub fn namespace(&self) -> &'a str {
        match self {
            Module::File(file) => file.namespace(),
            Module::Library(library) => library.name(),
        }
    }

    pub fn symbols(&self) -> &'a ExtractedSymbols {
        match self {
            Module::File(file) => file.symbols(),
            Module::Library(library) => library.symbols(),
        }
    }
}

impl Workspace {
    pub fn keywords(&self) -> &KeywordContainer {
        &self.keywords
    }

    pub fn variables(&self) -> &VariableContainer {
        &self.variables
    }

    pub fn get_file(&self, path: &Path) -> Option<&WorkspaceFile> {
        self.files.get(path)
    }

    /// Files in insertion order
    pub fn get_files(&self) -> impl Iterator<Item = &WorkspaceFile> {
        self.files.values()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn get_file_by_namespace(&self, namespace: &str) -> Option<&WorkspaceFile> {
        match self.namespaces.get(&namespace.to_lowercase())? {
            NamespaceTarget::File(path) => self.files.get(path),
            NamespaceTarget::Library(_) => None,
        }
    }

    pub fn get_module_by_namespace(&self, namespace: &str) -> Option<Module<'_>> {
        match self.namespaces.get(&namespace.to_lowercase())? {
            NamespaceTarget::File(path) => self.files.get(path).map(Module::File),
            NamespaceTarget::Library(key) => self.libraries.get(key).map(Module::Library),
        }
    }

    pub fn get_symbols_by_namespace(&self, namespace: &str) -> Option<&ExtractedSymbols> {
        self.get_module_by_namespace(namespace).map(|m| m.symbols())
    }

    /// Modules whose namespace starts with `prefix`, sorted by namespace.
    pub fn find_modules_by_namespace(&self, prefix: &str) -> Vec<Module<'_>> {
        let prefix = prefix.to_lowercase();
        let mut found: Vec<(&String, Module<'_>)> = self
            .namespaces
            .iter()
            .filter(|(namespace, _)| namespace.starts_with(&prefix))
            .filter_map(|(namespace, target)| {
                let module = match target {
                    NamespaceTarget::File(path) => Module::File(self.files.get(path)?),
                    NamespaceTarget::Library(key) => Module::Library(self.libraries.get(key)?),
                };
                Some((namespace, module))
            })
            .collect();
        found.sort_by(|a, b| a.0.cmp(b.0));
        found.into_iter().map(|(_, module)| module).collect()
    }

    /// Declarations a keyword reference can mean when written in a file of
    /// `from_namespace`.
    ///
    /// A qualified reference only matches its namespace. A bare reference
    /// prefers keywords of the referring namespace and otherwise matches
    /// every keyword of that name.
    pub fn resolve_keyword(&self, id: &Identifier, from_namespace: &str) -> Vec<&KeywordSymbol> {
        let candidates = self.keywords.find_exact(&id.name);
        if let Some(namespace) = &id.namespace {
            let qualified: Vec<&KeywordSymbol> = candidates
                .iter()
                .filter(|k| k.namespace.eq_ignore_ascii_case(namespace))
                .collect();
            if !qualified.is_empty() {
                return qualified;
            }
            // a dot inside a plain keyword name
            return self.keywords.find_exact(&id.full_name()).iter().collect();
        }

        let local: Vec<&KeywordSymbol> = candidates
            .iter()
            .filter(|k| k.namespace.eq_ignore_ascii_case(from_namespace))
            .collect();
        if local.is_empty() {
            candidates.iter().collect()
        } else {
            local
        }
    }

    /// Variables-table declarations named `name` with the given sigil,
    /// preferring the referring namespace.
    pub fn resolve_variable(
        &self,
        kind: VariableKind,
        name: &str,
        from_namespace: &str,
    ) -> Vec<&VariableSymbol> {
        let candidates = self.variables.find_exact(&kind.format_name(name));
        let local: Vec<&VariableSymbol> = candidates
            .iter()
            .filter(|v| v.namespace.eq_ignore_ascii_case(from_namespace))
            .collect();
        if local.is_empty() {
            candidates.iter().collect()
        } else {
            local
        }
    }

    /// Keywords matching `text`, grouped by normalized name in key order.
    ///
    /// `Namespace.Prefix` filters on namespace (by prefix) and searches the
    /// part after the last dot. A group asks for qualified display when it
    /// is ambiguous or when the text already looks like a namespace.
    pub fn find_keywords(&self, text: &str) -> Vec<KeywordGroup> {
        let (namespace_filter, name_prefix) = match text.rsplit_once('.') {
            Some((namespace, name)) => (Some(namespace.to_lowercase()), name),
            None => (None, text),
        };

        let mut groups: IndexMap<String, Vec<&KeywordSymbol>> = IndexMap::new();
        for keyword in self.keywords.find_by_prefix(name_prefix) {
            if let Some(filter) = &namespace_filter
                && !keyword.namespace.to_lowercase().starts_with(filter.as_str())
            {
                continue;
            }
            groups
                .entry(normalize_key(&keyword.name))
                .or_default()
                .push(keyword);
        }

        let query = text.to_lowercase();
        groups
            .into_values()
            .filter_map(|members| {
                let first = members.first()?;
                let show_namespace = members.len() > 1
                    || members
                        .iter()
                        .any(|k| query_names_namespace(&query, &k.namespace));
                Some(KeywordGroup {
                    name: first.name.clone(),
                    keywords: members.into_iter().cloned().collect(),
                    show_namespace,
                })
            })
            .collect()
    }
}

/// `query` is already lowercase
fn query_names_namespace(query: &str, namespace: &str) -> bool {
    if query.is_empty() || namespace.is_empty() {
        return false;
    }
    let namespace = namespace.to_lowercase();
    query.starts_with(&namespace) || namespace.starts_with(query)
}
