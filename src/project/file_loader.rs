//! Collecting and reading workspace files from disk.

use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::base::constants::{LIBRARY_EXT, SUPPORTED_EXTENSIONS};
use crate::hir::{Library, LibraryDefinition, WorkspaceError, WorkspaceFile};

/// Which files a directory scan picks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    extensions: Vec<String>,
    skip_hidden: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            skip_hidden: true,
        }
    }
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collected extensions (given without the leading dot).
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Whether entries starting with `.` below the root are ignored.
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Every accepted file under `root`, sorted by path.
pub fn collect_file_paths(root: &Path, options: &LoaderOptions) -> Result<Vec<PathBuf>, WorkspaceError> {
    let metadata = std::fs::metadata(root).map_err(|source| WorkspaceError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(WorkspaceError::Io {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let mut paths = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !(options.skip_hidden && is_hidden(entry)));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() && options.accepts(entry.path()) => {
                paths.push(entry.into_path());
            }
            Ok(_) => {}
            Err(error) => warn!(root = %root.display(), %error, "skipping unreadable entry"),
        }
    }
    Ok(paths)
}

/// Read a file's content
pub fn load_file(path: &Path) -> Result<String, WorkspaceError> {
    std::fs::read_to_string(path).map_err(|source| WorkspaceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse one source file.
///
/// The extension is checked before the file is read.
pub fn load_and_parse(path: &Path) -> Result<WorkspaceFile, WorkspaceError> {
    crate::syntax::validate_extension(path)
        .map_err(|e| WorkspaceError::from_parse(path.to_path_buf(), e))?;
    let content = load_file(path)?;
    WorkspaceFile::from_text(path, &content)
}

/// Read a JSON library definition.
pub fn load_library(path: &Path) -> Result<Library, WorkspaceError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LIBRARY_EXT));
    if !is_json {
        return Err(WorkspaceError::UnsupportedExtension(path.to_path_buf()));
    }

    let content = load_file(path)?;
    let definition = LibraryDefinition::from_json(&content).map_err(|e| match e {
        WorkspaceError::Library { source, .. } => WorkspaceError::Library {
            name: path.file_stem().map(|s| s.to_string_lossy().into_owned()),
            source,
        },
        other => other,
    })?;
    Ok(Library::new(&definition))
}
