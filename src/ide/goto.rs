//! Go-to-definition implementation.

use std::path::{Path, PathBuf};

use crate::base::{Location, Position};
use crate::hir::{KeywordSymbol, VariableSymbol, Workspace};
use crate::parser::ast::Identifier;
use crate::syntax::NodeRef;

use super::position::nodes_at_position;

/// What kind of declaration a target is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Keyword,
    Variable,
}

/// A declaration to jump to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    pub kind: TargetKind,
    /// `namespace.name` for keywords, `${name}` for variables
    pub name: String,
    /// `None` for library keywords
    pub path: Option<PathBuf>,
    pub location: Location,
}

impl From<&KeywordSymbol> for GotoTarget {
    fn from(symbol: &KeywordSymbol) -> Self {
        Self {
            kind: TargetKind::Keyword,
            name: symbol.full_name(),
            path: symbol.origin.path().map(Path::to_path_buf),
            location: symbol.location,
        }
    }
}

impl From<&VariableSymbol> for GotoTarget {
    fn from(symbol: &VariableSymbol) -> Self {
        Self {
            kind: TargetKind::Variable,
            name: symbol.display_name(),
            path: symbol.origin.path().map(Path::to_path_buf),
            location: symbol.location,
        }
    }
}

/// The reference under the cursor
#[derive(Clone, Copy, Debug)]
pub(crate) enum CursorReference<'a> {
    /// A callee, template keyword or keyword declaration name
    Keyword(&'a Identifier),
    Variable(NodeRef<'a>),
}

/// Classify the identifier under the cursor by its parent node.
pub(crate) fn reference_at<'a>(path: &[NodeRef<'a>]) -> Option<CursorReference<'a>> {
    let [.., parent, NodeRef::Identifier(id)] = path else {
        return None;
    };
    let id: &'a Identifier = id;
    let is = |candidate: &Identifier| std::ptr::eq(candidate, id);

    match *parent {
        NodeRef::CallExpression(call) if is(&call.callee) => Some(CursorReference::Keyword(id)),
        NodeRef::Template(template) if template.keyword.as_ref().is_some_and(is) => {
            Some(CursorReference::Keyword(id))
        }
        NodeRef::UserKeyword(_) => Some(CursorReference::Keyword(id)),
        NodeRef::VariableExpression(_) | NodeRef::VariableDeclaration(_) => {
            Some(CursorReference::Variable(*parent))
        }
        _ => None,
    }
}

/// Declarations referenced at `position` in the file at `path`.
pub fn goto_definition(workspace: &Workspace, path: &Path, position: Position) -> Vec<GotoTarget> {
    let Some(file) = workspace.get_file(path) else {
        return Vec::new();
    };
    let nodes = nodes_at_position(file.suite(), position);

    match reference_at(&nodes) {
        Some(CursorReference::Keyword(id)) => workspace
            .resolve_keyword(id, file.namespace())
            .into_iter()
            .map(GotoTarget::from)
            .collect(),
        Some(CursorReference::Variable(node)) => {
            let (kind, name) = match node {
                NodeRef::VariableExpression(var) => (var.kind, &var.id.name),
                NodeRef::VariableDeclaration(decl) => (decl.kind, &decl.id.name),
                _ => return Vec::new(),
            };
            workspace
                .resolve_variable(kind, name, file.namespace())
                .into_iter()
                .map(GotoTarget::from)
                .collect()
        }
        None => Vec::new(),
    }
}
