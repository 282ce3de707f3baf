//! Loading workspaces from disk.

pub mod file_loader;
pub mod workspace_loader;

pub use file_loader::{LoaderOptions, collect_file_paths, load_and_parse, load_file, load_library};
pub use workspace_loader::{LoadReport, WorkspaceLoader};
