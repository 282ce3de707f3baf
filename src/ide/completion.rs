//! Completion suggestions implementation.

use crate::hir::Workspace;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Keyword,
    Variable,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Keyword => 3,  // Function
            CompletionKind::Variable => 6, // Variable
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// Text shown in the list and inserted on accept.
    pub label: String,
    pub kind: CompletionKind,
    /// Argument signature or origin namespace
    pub detail: Option<String>,
    pub documentation: Option<String>,
}

/// Variable references start with a sigil and an opening brace.
fn is_variable_prefix(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('$' | '@' | '&'), Some('{')) | (Some('$' | '@' | '&'), None)
    )
}

/// Completions for the partial cell `text`.
///
/// Keywords come from the workspace index grouped by name; a group that
/// asks for namespace display yields one qualified item per keyword.
pub fn completions(workspace: &Workspace, text: &str) -> Vec<CompletionItem> {
    if is_variable_prefix(text) {
        return workspace
            .variables()
            .find_by_prefix(text)
            .into_iter()
            .map(|variable| CompletionItem {
                label: variable.display_name(),
                kind: CompletionKind::Variable,
                detail: (!variable.namespace.is_empty()).then(|| variable.namespace.to_string()),
                documentation: None,
            })
            .collect();
    }

    let mut items = Vec::new();
    for group in workspace.find_keywords(text) {
        for keyword in &group.keywords {
            let label = if group.show_namespace {
                keyword.full_name()
            } else {
                keyword.name.to_string()
            };
            let item = CompletionItem {
                label,
                kind: CompletionKind::Keyword,
                detail: (!keyword.arguments.is_empty()).then(|| keyword.arguments.join("    ")),
                documentation: keyword.documentation.clone(),
            };
            if !items.contains(&item) {
                items.push(item);
            }
        }
    }
    items
}
