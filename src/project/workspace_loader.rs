use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use super::file_loader::{self, LoaderOptions};
use crate::hir::{Library, Workspace, WorkspaceError, WorkspaceFile};
use crate::ide::AnalysisHost;

/// Outcome of a bulk load. Per-file failures never abort the load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub files_loaded: usize,
    pub libraries_loaded: usize,
    pub errors: Vec<WorkspaceError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Loads workspace directories, reading and parsing files in parallel.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceLoader {
    options: LoaderOptions,
}

impl WorkspaceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Read and parse `paths` in parallel. Failures are logged and
    /// recorded in `report`; the rest are returned in input order.
    pub fn parse_files(&self, paths: &[PathBuf], report: &mut LoadReport) -> Vec<WorkspaceFile> {
        let results: Vec<_> = paths
            .par_iter()
            .map(|path| file_loader::load_and_parse(path))
            .collect();

        let mut files = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(file) => files.push(file),
                Err(error) => {
                    warn!(%error, "failed to load file");
                    report.errors.push(error);
                }
            }
        }
        report.files_loaded += files.len();
        files
    }

    pub fn load_libraries(&self, paths: &[PathBuf], report: &mut LoadReport) -> Vec<Library> {
        let results: Vec<_> = paths
            .par_iter()
            .map(|path| file_loader::load_library(path))
            .collect();

        let mut libraries = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(library) => libraries.push(library),
                Err(error) => {
                    warn!(%error, "failed to load library");
                    report.errors.push(error);
                }
            }
        }
        report.libraries_loaded += libraries.len();
        libraries
    }

    /// Build a standalone workspace from a directory and library definitions.
    pub fn load_workspace(
        &self,
        root: &Path,
        library_paths: &[PathBuf],
    ) -> Result<(Workspace, LoadReport), WorkspaceError> {
        let paths = file_loader::collect_file_paths(root, &self.options)?;
        let mut report = LoadReport::default();
        let libraries = self.load_libraries(library_paths, &mut report);
        let files = self.parse_files(&paths, &mut report);

        info!(
            root = %root.display(),
            files = report.files_loaded,
            libraries = report.libraries_loaded,
            errors = report.errors.len(),
            "workspace loaded"
        );
        Ok((Workspace::with_contents(files, libraries), report))
    }

    /// Add every file under `root` to the host. Existing files stay.
    pub fn load_directory_into_host(
        &self,
        root: &Path,
        host: &AnalysisHost,
    ) -> Result<LoadReport, WorkspaceError> {
        let paths = file_loader::collect_file_paths(root, &self.options)?;
        let mut report = LoadReport::default();
        let files = self.parse_files(&paths, &mut report);
        host.set_files(files);
        Ok(report)
    }

    /// Replace the host's workspace with a freshly loaded one. Readers keep
    /// seeing the old index until the swap.
    pub fn rebuild_host(
        &self,
        root: &Path,
        library_paths: &[PathBuf],
        host: &AnalysisHost,
    ) -> Result<LoadReport, WorkspaceError> {
        let (workspace, report) = self.load_workspace(root, library_paths)?;
        host.replace_workspace(workspace);
        Ok(report)
    }
}
