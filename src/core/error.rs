//! Error types for manifest loading and graph construction.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error loading or parsing a `pyproject.toml` manifest.
///
/// The two variants are deliberately distinct: a file that cannot be
/// read is a different outcome from a file that was read but is not
/// valid TOML, and some callers (the root locator, the resolver) need
/// to recover from both without conflating them.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file does not exist or could not be opened.
    #[error("failed to read manifest: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file was read, but its contents are not valid TOML.
    #[error("failed to parse manifest: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ManifestError {
    /// The path of the manifest that caused the error.
    pub fn path(&self) -> &Path {
        match self {
            ManifestError::Read { path, .. } => path,
            ManifestError::Parse { path, .. } => path,
        }
    }
}

/// Error building a workspace dependency graph.
///
/// Manifest-level problems never surface here; they degrade to empty or
/// partial graphs. Only a structurally unusable argument is fatal.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The supplied workspace root does not exist as a directory.
    #[error("workspace root is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
