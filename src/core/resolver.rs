//! Package-name-to-directory resolution.
//!
//! A workspace member is identified by its directory name, but its
//! manifest may declare a different package name (directory
//! `ca-patient-service`, package `patient-service`). Dependency lists
//! reference members by either form, so resolution goes through a map
//! keyed by both, always yielding the directory name.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::core::manifest::{manifest_path, Manifest};
use crate::core::spec::base_name;

/// Lookup table from declared package name (or directory name) to
/// workspace-relative member directory name.
///
/// Built once per graph construction. Lookups never fall back
/// implicitly; every identity mapping is inserted explicitly during
/// [`PackageMap::build`], so a miss genuinely means "not a member".
#[derive(Debug, Default)]
pub struct PackageMap {
    map: HashMap<String, String>,
}

impl PackageMap {
    /// Build the map over all workspace members.
    ///
    /// Per member: a loadable manifest with a declared name registers
    /// `name -> member`, plus `member -> member` when the two differ.
    /// An unreadable or unparseable manifest, or one without a name,
    /// degrades that member to the identity entry alone. This never
    /// fails as a whole.
    pub fn build(workspace_root: &Path, members: &[String]) -> PackageMap {
        let mut map = HashMap::new();

        for member in members {
            let path = manifest_path(&workspace_root.join(member));

            match Manifest::load(&path) {
                Ok(manifest) => {
                    let name = manifest.project_name().unwrap_or(member);
                    map.insert(name.to_string(), member.clone());

                    // Dependency lists may use the directory name even
                    // when a different package name is declared.
                    if name != member {
                        map.insert(member.clone(), member.clone());
                    }
                }
                Err(err) => {
                    tracing::debug!("member `{member}` has no usable manifest: {err}");
                    map.insert(member.clone(), member.clone());
                }
            }
        }

        PackageMap { map }
    }

    /// Resolve a bare package name to its member directory name.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    /// Number of distinct keys in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Filter a dependency list down to workspace members, returning
    /// their directory names.
    ///
    /// Each specifier is normalized with [`base_name`] and looked up;
    /// misses (external packages) are skipped. The result is
    /// deduplicated, preserving first-occurrence order.
    pub fn filter_workspace_deps(&self, deps: &[String]) -> Vec<String> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();

        for dep in deps {
            let Some(member_dir) = self.resolve(base_name(dep)) else {
                continue;
            };

            if seen.insert(member_dir.to_string()) {
                result.push(member_dir.to_string());
            }
        }

        result
    }
}
