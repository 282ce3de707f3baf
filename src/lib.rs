//! # robotls-base
//!
//! Core library for Robot Framework style test data: table reading,
//! AST construction, schema-driven traversal and workspace symbol indexing.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Analysis host, completion, goto-def, references, symbols
//!   ↓
//! project   → Directory scans, parallel read + parse
//!   ↓
//! hir       → Ternary search tree, symbol containers, libraries, workspace
//!   ↓
//! syntax    → SyntaxFile, traversal engine (visitor + schema)
//!   ↓
//! parser    → Tabular reader, cell lexer, table parsers, AST types
//!   ↓
//! base      → Position / Span / Location, constants
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → project → ide)
// ============================================================================

/// Foundation types: Position, Span, Location
pub mod base;

/// Parser: tabular reader, Logos cell lexer, table grammars, AST
pub mod parser;

/// Syntax: parsed files and AST traversal
pub mod syntax;

/// Workspace symbol index
pub mod hir;

/// Project management: workspace loading
pub mod project;

/// IDE features: completion, goto-definition, find-references, symbols
pub mod ide;

// Re-export foundation types
pub use base::{Location, Position, Span};

// Re-export the main entry points
pub use hir::{Workspace, WorkspaceError, WorkspaceFile};
pub use ide::AnalysisHost;
pub use parser::{ParseError, parse_file};
pub use syntax::{SyntaxFile, traverse};
