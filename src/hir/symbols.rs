//! Declared symbols and their extraction from an AST.

use std::path::Path;
use std::sync::Arc;

use smol_str::SmolStr;

use super::container::{KeywordContainer, Symbol, VariableContainer};
use crate::base::Location;
use crate::parser::ast::{TestSuite, UserKeyword, VariableDeclaration, VariableKind};
use crate::syntax::traverse::{EnterFn, NodeKind, NodeRef, VisitorOption, traverse};

/// Where a symbol was declared
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolOrigin {
    File(Arc<Path>),
    Library(SmolStr),
}

impl SymbolOrigin {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SymbolOrigin::File(path) => Some(path),
            SymbolOrigin::Library(_) => None,
        }
    }
}

/// A keyword declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSymbol {
    pub name: SmolStr,
    pub namespace: SmolStr,
    pub origin: SymbolOrigin,
    pub location: Location,
    /// `${arg}` style argument names, defaults as `${arg}=value`
    pub arguments: Vec<String>,
    pub documentation: Option<String>,
}

impl KeywordSymbol {
    pub fn from_keyword(keyword: &UserKeyword, namespace: &str, origin: SymbolOrigin) -> Self {
        let arguments = keyword
            .arguments
            .iter()
            .flat_map(|args| args.values.iter())
            .map(argument_signature)
            .collect();

        Self {
            name: keyword.id.name.clone(),
            namespace: keyword
                .id
                .namespace
                .clone()
                .unwrap_or_else(|| SmolStr::new(namespace)),
            origin,
            location: keyword.location,
            arguments,
            documentation: keyword.documentation.as_ref().map(|d| d.value.value.clone()),
        }
    }

    /// `namespace.name`, or the bare name without a namespace
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.to_string()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

fn argument_signature(declaration: &VariableDeclaration) -> String {
    let name = declaration.display_name();
    match declaration.value().and_then(|v| v.as_literal()) {
        Some(default) => format!("{}={}", name, default.value),
        None => name,
    }
}

impl Symbol for KeywordSymbol {
    fn key(&self) -> String {
        self.name.to_string()
    }
}

/// A variables-table declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSymbol {
    pub name: SmolStr,
    pub kind: VariableKind,
    pub namespace: SmolStr,
    pub origin: SymbolOrigin,
    pub location: Location,
}

impl VariableSymbol {
    pub fn from_declaration(
        declaration: &VariableDeclaration,
        namespace: &str,
        origin: SymbolOrigin,
    ) -> Self {
        Self {
            name: declaration.id.name.clone(),
            kind: declaration.kind,
            namespace: SmolStr::new(namespace),
            origin,
            location: declaration.location,
        }
    }

    /// `${name}` form
    pub fn display_name(&self) -> String {
        self.kind.format_name(&self.name)
    }
}

impl Symbol for VariableSymbol {
    /// The sigil is part of the key, so `${x}` and `@{x}` never collide.
    fn key(&self) -> String {
        self.display_name()
    }
}

/// Keywords and variables a suite declares.
#[derive(Debug, Clone, Default)]
pub struct ExtractedSymbols {
    pub keywords: KeywordContainer,
    pub variables: VariableContainer,
}

/// Collect keyword and variables-table declarations. Only the keywords
/// and variables tables are descended into.
pub fn extract_symbols(suite: &TestSuite, namespace: &str, origin: &SymbolOrigin) -> ExtractedSymbols {
    let mut symbols = ExtractedSymbols::default();

    traverse(
        suite,
        &mut EnterFn(|node: NodeRef<'_>, parent: Option<NodeRef<'_>>| match node {
            NodeRef::TestSuite(_) | NodeRef::KeywordsTable(_) | NodeRef::VariablesTable(_) => {
                VisitorOption::Continue
            }
            NodeRef::UserKeyword(keyword) => {
                symbols
                    .keywords
                    .add(KeywordSymbol::from_keyword(keyword, namespace, origin.clone()));
                VisitorOption::Skip
            }
            NodeRef::VariableDeclaration(declaration)
                if parent.is_some_and(|p| p.kind() == NodeKind::VariablesTable) =>
            {
                symbols
                    .variables
                    .add(VariableSymbol::from_declaration(declaration, namespace, origin.clone()));
                VisitorOption::Skip
            }
            _ => VisitorOption::Skip,
        }),
    );

    symbols
}
