//! Core data structures for uvgraph.
//!
//! This module contains the foundational types used throughout uvgraph:
//! - Manifest parsing (pyproject.toml subset)
//! - Dependency specifier normalization
//! - Package-name-to-directory resolution
//! - Workspace discovery and graph construction

pub mod error;
pub mod graph;
pub mod manifest;
pub mod resolver;
pub mod spec;
pub mod workspace;

pub use error::{GraphError, ManifestError};
pub use graph::{build_dependency_graph, DependencyGraph};
pub use manifest::{manifest_path, Manifest, MANIFEST_NAME};
pub use resolver::PackageMap;
pub use spec::base_name;
pub use workspace::{find_workspace_root, Workspace};
