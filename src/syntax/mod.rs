//! Parsed files and the traversal engine over their ASTs.
pub mod file;
pub mod parser;
pub mod traverse;

pub use file::{FileLanguage, SyntaxFile};
pub use parser::{get_extension, namespace_from_path, parse_content, validate_extension};
pub use traverse::{EnterFn, NodeKind, NodeRef, Visitor, VisitorOption, collect_nodes, traverse};
