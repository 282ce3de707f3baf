//! IDE features: high-level queries over a workspace.
//!
//! Each function takes the workspace (or one of its files) and returns plain
//! data. None of them mutate; all mutation goes through [`AnalysisHost`].
//!
//! ## Usage
//!
//! ```ignore
//! use robotls::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new();
//! host.set_file_content("/ws/suite.robot", "*** Test Cases ***\nSmoke\n    Log    hi\n")?;
//!
//! let analysis = host.analysis();
//! let symbols = analysis.document_symbols(Path::new("/ws/suite.robot"));
//! ```

mod analysis;
mod completion;
mod goto;
mod position;
mod references;
mod symbols;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use goto::{GotoTarget, TargetKind, goto_definition};
pub use position::{node_at_position, nodes_at_position};
pub use references::{Reference, find_references, find_references_at};
pub use symbols::{SymbolInfo, SymbolKind, document_symbols, workspace_symbols};
