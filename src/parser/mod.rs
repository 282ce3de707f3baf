//! Parser for tabular test data files
//!
//! Parsing runs in two stages: the tabular reader turns text into tables of
//! positioned cells, then one grammar per table kind turns cells into AST
//! nodes. The cell lexer (logos) only classifies cell content into text and
//! variable references.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Tabular reader → DataTable { header, DataRow { Cell* }* }*
//!     ↓
//! Continuation folding → logical rows
//!     ↓
//! Table grammars (settings, variables, keywords, test cases)
//!     ↓              ↳ cell lexer (logos) → Literal / Variable / Template
//! TestSuite (AST)
//! ```
//!
//! Python library sources skip the reader and go straight to
//! [`parse_python_source`], which yields a suite holding only keywords.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod errors;
pub mod grammar;
mod lexer;
pub mod table;
mod table_reader;

pub use ast::*;
pub use errors::ParseError;
pub use grammar::python::parse_python_source;
pub use lexer::{Token, ValueToken, tokenize};
pub use parser::{TableKind, parse_file, parse_tables};
pub use table::{Cell, ContinuationStyle, DataRow, DataTable};
pub use table_reader::{TableReader, read_row, read_tables};
