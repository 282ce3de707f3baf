//! Schema-driven AST traversal.
//!
//! All AST walking (symbol extraction, node lookup, reference search) goes
//! through [`traverse`] with a [`Visitor`]. Node shape lives only in the
//! [`schema`] table.

mod node;
pub mod schema;
mod visitor;

pub use node::{NodeKind, NodeRef};
pub use schema::{ChildSlot, child_slots};
pub use visitor::{EnterFn, Visitor, VisitorOption, collect_nodes, traverse};
