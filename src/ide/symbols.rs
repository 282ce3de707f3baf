//! Symbol listing for workspace and document views.

use std::path::PathBuf;

use crate::base::Location;
use crate::hir::{Workspace, WorkspaceFile};
use crate::syntax::{EnterFn, NodeRef, VisitorOption, traverse};

/// Symbol kind shown in outlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Keyword,
    TestCase,
    Variable,
}

/// A symbol for the workspace symbol list or document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    pub name: String,
    pub kind: SymbolKind,
    /// Namespace the symbol belongs to
    pub container_name: Option<String>,
    /// `None` for library keywords
    pub path: Option<PathBuf>,
    pub location: Location,
}

/// Variables-table entries, keywords and test cases of a file, table by
/// table.
pub fn document_symbols(file: &WorkspaceFile) -> Vec<SymbolInfo> {
    let namespace = file.namespace();
    let container_name = (!namespace.is_empty()).then(|| namespace.to_string());
    let mut symbols = Vec::new();

    let mut push = |name: String, kind: SymbolKind, location: Location| {
        symbols.push(SymbolInfo {
            name,
            kind,
            container_name: container_name.clone(),
            path: Some(file.path().to_path_buf()),
            location,
        });
    };

    traverse(
        file.suite(),
        &mut EnterFn(|node: NodeRef<'_>, _parent: Option<NodeRef<'_>>| match node {
            NodeRef::TestSuite(_)
            | NodeRef::VariablesTable(_)
            | NodeRef::KeywordsTable(_)
            | NodeRef::TestCasesTable(_) => VisitorOption::Continue,
            NodeRef::UserKeyword(keyword) => {
                push(keyword.id.name.to_string(), SymbolKind::Keyword, keyword.location);
                VisitorOption::Skip
            }
            NodeRef::TestCase(test) => {
                push(test.id.name.to_string(), SymbolKind::TestCase, test.location);
                VisitorOption::Skip
            }
            NodeRef::VariableDeclaration(declaration) => {
                push(declaration.display_name(), SymbolKind::Variable, declaration.location);
                VisitorOption::Skip
            }
            _ => VisitorOption::Skip,
        }),
    );
    symbols
}

/// Symbols across files and libraries whose name contains `query`
/// (case-insensitive), sorted by name.
pub fn workspace_symbols(workspace: &Workspace, query: Option<&str>) -> Vec<SymbolInfo> {
    let query = query.map(str::to_lowercase).unwrap_or_default();
    let matches = |name: &str| query.is_empty() || name.to_lowercase().contains(&query);

    let mut symbols: Vec<SymbolInfo> = workspace
        .get_files()
        .flat_map(document_symbols)
        .filter(|symbol| matches(&symbol.name))
        .collect();

    for library in workspace.libraries() {
        symbols.extend(
            library
                .symbols()
                .keywords
                .iter()
                .filter(|keyword| matches(&keyword.name))
                .map(|keyword| SymbolInfo {
                    name: keyword.name.to_string(),
                    kind: SymbolKind::Keyword,
                    container_name: Some(library.name().to_string()),
                    path: None,
                    location: keyword.location,
                }),
        );
    }

    symbols.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    symbols
}
