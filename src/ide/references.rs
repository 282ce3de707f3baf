//! Find-references implementation.

use std::path::{Path, PathBuf};

use crate::base::{Location, Position};
use crate::hir::{KeywordSymbol, Workspace, WorkspaceFile};
use crate::parser::ast::Identifier;
use crate::syntax::{EnterFn, NodeRef, VisitorOption, traverse};

use super::goto::{CursorReference, reference_at};
use super::position::nodes_at_position;

/// A place where a keyword is used or declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// `None` for library declarations
    pub path: Option<PathBuf>,
    pub location: Location,
    pub is_declaration: bool,
}

/// Keyword names used in a file: callees and template keywords, in
/// source order.
fn keyword_uses<'f>(file: &'f WorkspaceFile) -> Vec<&'f Identifier> {
    let mut uses = Vec::new();
    traverse(
        file.suite(),
        &mut EnterFn(|node: NodeRef<'f>, _parent: Option<NodeRef<'f>>| {
            match node {
                NodeRef::CallExpression(call) => uses.push(&call.callee),
                NodeRef::Template(template) => uses.extend(template.keyword.as_ref()),
                _ => {}
            }
            VisitorOption::Continue
        }),
    );
    uses
}

/// Every call across the workspace that resolves to `keyword`.
pub fn find_references(
    workspace: &Workspace,
    keyword: &KeywordSymbol,
    include_declaration: bool,
) -> Vec<Reference> {
    let mut references = Vec::new();
    if include_declaration {
        references.push(Reference {
            path: keyword.origin.path().map(Path::to_path_buf),
            location: keyword.location,
            is_declaration: true,
        });
    }

    for file in workspace.get_files() {
        for id in keyword_uses(file) {
            let resolves = workspace
                .resolve_keyword(id, file.namespace())
                .into_iter()
                .any(|candidate| candidate == keyword);
            if resolves {
                references.push(Reference {
                    path: Some(file.path().to_path_buf()),
                    location: id.location,
                    is_declaration: false,
                });
            }
        }
    }
    references
}

/// References of the keyword under the cursor. Ambiguous names collect
/// the references of every candidate.
pub fn find_references_at(
    workspace: &Workspace,
    path: &Path,
    position: Position,
    include_declaration: bool,
) -> Vec<Reference> {
    let Some(file) = workspace.get_file(path) else {
        return Vec::new();
    };
    let nodes = nodes_at_position(file.suite(), position);
    let Some(CursorReference::Keyword(id)) = reference_at(&nodes) else {
        return Vec::new();
    };

    let mut references: Vec<Reference> = Vec::new();
    for keyword in workspace.resolve_keyword(id, file.namespace()) {
        for reference in find_references(workspace, keyword, include_declaration) {
            if !references.contains(&reference) {
                references.push(reference);
            }
        }
    }
    references
}
