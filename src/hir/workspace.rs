//! # Workspace
//!
//! Tracks every parsed file and library, and keeps global keyword and
//! variable containers in step with them. Adding a file that is already
//! present replaces it; removal retracts exactly the symbols that file
//! contributed.

mod core;
mod file;
mod file_manager;
mod libraries;
mod queries;

pub use core::Workspace;
pub use file::WorkspaceFile;
pub use queries::{KeywordGroup, Module};
