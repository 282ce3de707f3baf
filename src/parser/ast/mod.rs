//! Typed AST for parsed test data files.
//!
//! Every node owns exactly one [`Location`](crate::base::Location); a parent's
//! location always encloses its children's.
//!
//! ## Structure
//!
//! ```text
//! TestSuite
//! ├── SettingsTable   imports, suite/test setup and teardown, tags
//! ├── VariablesTable  VariableDeclaration*
//! ├── KeywordsTable   UserKeyword* (settings + Step*)
//! └── TestCasesTable  TestCase*    (settings + Step*)
//!
//! Step = VariableDeclaration | CallExpression
//! Expression = Literal | VariableExpression | TemplateLiteral | CallExpression
//! ```

mod declarations;
mod expressions;
mod tables;

pub use declarations::*;
pub use expressions::*;
pub use tables::*;
