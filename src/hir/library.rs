//! Keyword libraries described by external JSON definitions.

use serde::Deserialize;
use smol_str::SmolStr;

use super::error::WorkspaceError;
use super::symbols::{ExtractedSymbols, SymbolOrigin, extract_symbols};
use crate::base::Location;
use crate::parser::ast::{
    Arguments, Documentation, Expression, Identifier, KeywordsTable, Literal, TestSuite, UserKeyword,
    VariableDeclaration, VariableKind,
};

/// `{ "name": ..., "version": ..., "keywords": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibraryDefinition {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub keywords: Vec<LibraryKeyword>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibraryKeyword {
    pub name: String,
    #[serde(default)]
    pub args: LibraryArgs,
    #[serde(default)]
    pub doc: String,
}

/// Arguments given either as one comma separated string or as a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LibraryArgs {
    Joined(String),
    List(Vec<String>),
}

impl Default for LibraryArgs {
    fn default() -> Self {
        LibraryArgs::List(Vec::new())
    }
}

impl LibraryArgs {
    pub fn names(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            LibraryArgs::Joined(joined) => joined.split(',').collect(),
            LibraryArgs::List(list) => list.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl LibraryDefinition {
    pub fn from_json(json: &str) -> Result<Self, WorkspaceError> {
        serde_json::from_str(json).map_err(|source| WorkspaceError::Library { name: None, source })
    }
}

/// A namespace of keywords with no source text behind it.
#[derive(Debug, Clone)]
pub struct Library {
    name: SmolStr,
    version: String,
    suite: TestSuite,
    symbols: ExtractedSymbols,
}

impl Library {
    pub fn new(definition: &LibraryDefinition) -> Self {
        let name = SmolStr::new(&definition.name);
        let keywords = definition
            .keywords
            .iter()
            .map(|keyword| synthesize_keyword(&name, keyword))
            .collect();

        let mut suite = TestSuite::new(Location::Synthetic);
        suite.keywords_table = Some(KeywordsTable {
            keywords,
            location: Location::Synthetic,
        });
        let symbols = extract_symbols(&suite, &name, &SymbolOrigin::Library(name.clone()));

        Self {
            name,
            version: definition.version.clone(),
            suite,
            symbols,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }

    pub fn symbols(&self) -> &ExtractedSymbols {
        &self.symbols
    }
}

/// Library keywords: synthetic locations, scalar arguments, `name=value`
/// split into a default.
fn synthesize_keyword(namespace: &str, definition: &LibraryKeyword) -> UserKeyword {
    let mut keyword = UserKeyword::new(Identifier::namespaced(
        namespace,
        definition.name.as_str(),
        Location::Synthetic,
    ));

    let values = definition
        .args
        .names()
        .into_iter()
        .map(|arg| {
            let (name, default) = match arg.split_once('=') {
                Some((name, default)) => (name.trim(), Some(default.trim())),
                None => (arg.as_str(), None),
            };
            VariableDeclaration {
                id: Identifier::new(name, Location::Synthetic),
                kind: VariableKind::Scalar,
                values: default
                    .map(|d| Expression::Literal(Literal::new(d, Location::Synthetic)))
                    .into_iter()
                    .collect(),
                location: Location::Synthetic,
            }
        })
        .collect();
    keyword.arguments = Some(Arguments {
        id: Identifier::new("Arguments", Location::Synthetic),
        values,
        location: Location::Synthetic,
    });

    if !definition.doc.is_empty() {
        keyword.documentation = Some(Documentation {
            id: Identifier::new("Documentation", Location::Synthetic),
            value: Literal::new(definition.doc.as_str(), Location::Synthetic),
            location: Location::Synthetic,
        });
    }
    keyword
}
