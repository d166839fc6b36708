//! Workspace discovery and the workspace handle.
//!
//! A workspace root is the nearest ancestor directory whose
//! pyproject.toml declares a non-empty `[tool.uv.workspace] members`
//! list. Membership comes only from that list; no directory scan is
//! performed.

use std::path::{Path, PathBuf};

use crate::core::error::ManifestError;
use crate::core::manifest::{manifest_path, Manifest};

/// Find the workspace root at or above `start`.
///
/// Walks upward one directory at a time, trying the manifest at each
/// level. Manifests that are missing, unreadable, unparseable, or that
/// declare no members are all treated the same: the walk continues.
/// Returns `None` once the filesystem root has been passed without a
/// qualifying manifest.
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;

    loop {
        if let Ok(manifest) = Manifest::load(&manifest_path(current)) {
            if manifest.is_workspace_root() {
                return Some(current.to_path_buf());
            }
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => return None,
        }
    }
}

/// A workspace rooted at a directory with a parsed root manifest.
#[derive(Debug)]
pub struct Workspace {
    /// Workspace root directory.
    root: PathBuf,

    /// The parsed root manifest.
    manifest: Manifest,
}

impl Workspace {
    /// Open the workspace rooted at `root`.
    ///
    /// Fails with a [`ManifestError`] when the root manifest cannot be
    /// read or parsed; a manifest without a workspace section still
    /// succeeds (the member list is simply empty).
    pub fn open(root: &Path) -> Result<Self, ManifestError> {
        let manifest = Manifest::load(&manifest_path(root))?;

        Ok(Workspace {
            root: root.to_path_buf(),
            manifest,
        })
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The parsed root manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Member directory names, in declared order.
    pub fn members(&self) -> &[String] {
        self.manifest.workspace_members()
    }

    /// Absolute directory of a member.
    pub fn member_dir(&self, member: &str) -> PathBuf {
        self.root.join(member)
    }

    /// Manifest path of a member.
    pub fn member_manifest_path(&self, member: &str) -> PathBuf {
        manifest_path(&self.member_dir(member))
    }
}
