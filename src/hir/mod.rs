//! Workspace symbol index.
//!
//! Every file and library contributes keyword and variable symbols. The
//! [`Workspace`] keeps global containers equal to the union of those
//! contributions, so prefix lookups never need to visit individual files.
//!
//! ```text
//! TestSuite ──extract_symbols──► ExtractedSymbols (per file / library)
//!                                      │ copy_from / remove_all
//!                                      ▼
//!                          Workspace { keywords, variables }
//!                                      │
//!                                      ▼
//!                     SymbolContainer ──► TernarySearchTree
//! ```
//!
//! ## Key Types
//!
//! - [`TernarySearchTree`]: prefix-searchable string map, many values per key
//! - [`SymbolContainer`]: case-insensitive symbol store over the tree
//! - [`Workspace`]: files, libraries and the global containers
//! - [`Library`]: keywords loaded from a JSON definition

mod container;
mod error;
mod library;
mod search_tree;
mod symbols;
mod workspace;

pub use container::{KeywordContainer, Symbol, SymbolContainer, VariableContainer, normalize_key};
pub use error::WorkspaceError;
pub use library::{Library, LibraryArgs, LibraryDefinition, LibraryKeyword};
pub use search_tree::TernarySearchTree;
pub use symbols::{
    ExtractedSymbols, KeywordSymbol, SymbolOrigin, VariableSymbol, extract_symbols,
};
pub use workspace::{KeywordGroup, Module, Workspace, WorkspaceFile};
