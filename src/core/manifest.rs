//! pyproject.toml manifest parsing.
//!
//! Only the fields the graph builder needs are extracted: the declared
//! project name, the project dependency list, and the uv workspace
//! member list. Everything else in the file is tolerated and ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::ManifestError;

/// Canonical manifest file name.
pub const MANIFEST_NAME: &str = "pyproject.toml";

/// The manifest path for a given directory.
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_NAME)
}

/// Raw manifest as deserialized from TOML.
///
/// Every section is optional; a manifest with none of them is valid
/// (it simply declares nothing we care about).
#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    #[serde(default)]
    project: Option<RawProject>,

    #[serde(default)]
    tool: Option<RawTool>,
}

/// `[project]` section.
#[derive(Debug, Default, Deserialize)]
struct RawProject {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    dependencies: Vec<String>,
}

/// `[tool]` table, narrowed to the `uv` subtable.
#[derive(Debug, Default, Deserialize)]
struct RawTool {
    #[serde(default)]
    uv: Option<RawUv>,
}

/// `[tool.uv]` table, narrowed to the workspace declaration.
#[derive(Debug, Default, Deserialize)]
struct RawUv {
    #[serde(default)]
    workspace: Option<RawUvWorkspace>,
}

/// `[tool.uv.workspace]` section.
#[derive(Debug, Default, Deserialize)]
struct RawUvWorkspace {
    #[serde(default)]
    members: Vec<String>,
}

/// The parsed subset of a pyproject.toml manifest.
///
/// A manifest that fails to read or parse is represented by the `Err`
/// outcome of [`Manifest::load`], never by a default-empty value, so
/// callers can distinguish "no manifest" from "manifest declaring
/// nothing".
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Declared package name from `[project] name`, if any.
    project_name: Option<String>,

    /// Dependency specifiers from `[project] dependencies`, in
    /// declaration order, unnormalized.
    dependencies: Vec<String>,

    /// Workspace member directory names from
    /// `[tool.uv.workspace] members`, in declaration order.
    workspace_members: Vec<String>,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest content.
    ///
    /// `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let raw: RawManifest = toml::from_str(content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let (project_name, dependencies) = match raw.project {
            Some(project) => (project.name, project.dependencies),
            None => (None, Vec::new()),
        };

        let workspace_members = raw
            .tool
            .and_then(|tool| tool.uv)
            .and_then(|uv| uv.workspace)
            .map(|ws| ws.members)
            .unwrap_or_default();

        Ok(Manifest {
            project_name,
            dependencies,
            workspace_members,
        })
    }

    /// Declared package name, if the manifest has a `[project]` section
    /// with a `name` field.
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// Raw dependency specifiers, in declaration order. Empty when the
    /// manifest declares none.
    pub fn project_dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Workspace member directory names, in declaration order. Empty
    /// when the manifest has no `[tool.uv.workspace]` section.
    pub fn workspace_members(&self) -> &[String] {
        &self.workspace_members
    }

    /// Check if this manifest declares a (non-empty) workspace.
    pub fn is_workspace_root(&self) -> bool {
        !self.workspace_members.is_empty()
    }
}
