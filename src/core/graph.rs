//! Workspace dependency graph construction.
//!
//! The graph maps each member directory name to the other member
//! directories it depends on. It is recomputed in full on every call;
//! the result is a pure snapshot of the manifests on disk.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::error::GraphError;
use crate::core::manifest::Manifest;
use crate::core::resolver::PackageMap;
use crate::core::workspace::Workspace;

/// Dependency graph over workspace members.
///
/// Keys and values are member directory names, never declared package
/// names. Entries appear in root-manifest member order; each dependency
/// list preserves first-occurrence order from the member's manifest.
/// Members with no workspace dependencies are absent entirely, and a
/// member never lists itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    entries: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Check if the graph has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of members with at least one workspace dependency.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Workspace dependencies of a member, if it has any.
    pub fn dependencies_of(&self, member: &str) -> Option<&[String]> {
        self.entries.get(member).map(Vec::as_slice)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(member, deps)| (member.as_str(), deps.as_slice()))
    }
}

impl FromIterator<(String, Vec<String>)> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        DependencyGraph {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Build the dependency graph for the workspace rooted at
/// `workspace_root`.
///
/// A root that is not a directory is the only hard error. A missing or
/// unparseable root manifest, or an empty member list, yields an empty
/// graph ("not a workspace" is a valid outcome, not a failure). Members
/// whose own manifests cannot be loaded are skipped and contribute
/// nothing.
pub fn build_dependency_graph(workspace_root: &Path) -> Result<DependencyGraph, GraphError> {
    if !workspace_root.is_dir() {
        return Err(GraphError::NotADirectory {
            path: workspace_root.to_path_buf(),
        });
    }

    let ws = match Workspace::open(workspace_root) {
        Ok(ws) => ws,
        Err(err) => {
            tracing::debug!("no workspace manifest at root: {err}");
            return Ok(DependencyGraph::default());
        }
    };

    if ws.members().is_empty() {
        return Ok(DependencyGraph::default());
    }

    let package_map = PackageMap::build(ws.root(), ws.members());

    let mut entries = IndexMap::new();

    for member in ws.members() {
        let manifest = match Manifest::load(&ws.member_manifest_path(member)) {
            Ok(manifest) => manifest,
            Err(err) => {
                tracing::debug!("skipping member `{member}`: {err}");
                continue;
            }
        };

        let mut deps = package_map.filter_workspace_deps(manifest.project_dependencies());

        // Self-references are dropped last: an aliased self-dependency
        // only becomes recognizable after map resolution.
        deps.retain(|dep| dep != member);

        if !deps.is_empty() {
            entries.insert(member.clone(), deps);
        }
    }

    Ok(DependencyGraph { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::manifest_path;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(manifest_path(dir), content).unwrap();
    }

    fn graph_of(pairs: &[(&str, &[&str])]) -> DependencyGraph {
        pairs
            .iter()
            .map(|(member, deps)| {
                (
                    member.to_string(),
                    deps.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_builds_graph_for_workspace_members() {
        let tmp = TempDir::new().unwrap();
        write_manifest(
            tmp.path(),
            "[tool.uv.workspace]\nmembers = [\"lib\", \"service-a\", \"service-b\"]\n",
        );
        write_manifest(
            &tmp.path().join("lib"),
            "[project]\nname = \"lib\"\ndependencies = []\n",
        );
        write_manifest(
            &tmp.path().join("service-a"),
            "[project]\nname = \"service-a\"\ndependencies = [\"lib\", \"requests>=2.0\"]\n",
        );
        write_manifest(
            &tmp.path().join("service-b"),
            "[project]\nname = \"service-b\"\ndependencies = [\"lib\", \"service-a\"]\n",
        );

        let graph = build_dependency_graph(tmp.path()).unwrap();

        assert_eq!(
            graph,
            graph_of(&[
                ("service-a", &["lib"]),
                ("service-b", &["lib", "service-a"]),
            ])
        );
    }

    #[test]
    fn test_resolves_package_name_aliases() {
        let tmp = TempDir::new().unwrap();
        write_manifest(
            tmp.path(),
            "[tool.uv.workspace]\nmembers = [\"ca-patient-service\", \"ca-user-service\"]\n",
        );
        write_manifest(
            &tmp.path().join("ca-patient-service"),
            "[project]\nname = \"patient-service\"\ndependencies = []\n",
        );
        write_manifest(
            &tmp.path().join("ca-user-service"),
            "[project]\nname = \"user-service\"\ndependencies = [\"patient-service\"]\n",
        );

        let graph = build_dependency_graph(tmp.path()).unwrap();

        assert_eq!(
            graph,
            graph_of(&[("ca-user-service", &["ca-patient-service"])])
        );
    }

    #[test]
    fn test_no_workspace_section_yields_empty_graph() {
        let tmp = TempDir::new().unwrap();
        write_manifest(tmp.path(), "[project]\nname = \"simple-project\"\n");

        let graph = build_dependency_graph(tmp.path()).unwrap();

        assert!(graph.is_empty());
    }

    #[test]
    fn test_missing_root_manifest_yields_empty_graph() {
        let tmp = TempDir::new().unwrap();

        let graph = build_dependency_graph(tmp.path()).unwrap();

        assert!(graph.is_empty());
    }

    #[test]
    fn test_nonexistent_root_is_a_hard_error() {
        let tmp = TempDir::new().unwrap();

        let err = build_dependency_graph(&tmp.path().join("missing")).unwrap_err();

        assert!(matches!(err, GraphError::NotADirectory { .. }));
    }

    #[test]
    fn test_member_without_manifest_is_skipped() {
        let tmp = TempDir::new().unwrap();
        write_manifest(
            tmp.path(),
            "[tool.uv.workspace]\nmembers = [\"lib\", \"ghost\", \"svc\"]\n",
        );
        write_manifest(&tmp.path().join("lib"), "[project]\nname = \"lib\"\n");
        write_manifest(
            &tmp.path().join("svc"),
            "[project]\nname = \"svc\"\ndependencies = [\"lib\", \"ghost\"]\n",
        );

        let graph = build_dependency_graph(tmp.path()).unwrap();

        // `ghost` still resolves as a dependency target (identity
        // fallback) but contributes no entry of its own.
        assert_eq!(graph, graph_of(&[("svc", &["lib", "ghost"])]));
    }

    #[test]
    fn test_self_references_are_dropped() {
        let tmp = TempDir::new().unwrap();
        write_manifest(tmp.path(), "[tool.uv.workspace]\nmembers = [\"lib\"]\n");
        write_manifest(
            &tmp.path().join("lib"),
            "[project]\nname = \"lib\"\ndependencies = [\"lib\"]\n",
        );

        let graph = build_dependency_graph(tmp.path()).unwrap();

        assert!(graph.is_empty());
    }

    #[test]
    fn test_aliased_self_reference_is_dropped() {
        let tmp = TempDir::new().unwrap();
        write_manifest(
            tmp.path(),
            "[tool.uv.workspace]\nmembers = [\"ca-lib\", \"svc\"]\n",
        );
        // `ca-lib` depends on itself via its declared package name.
        write_manifest(
            &tmp.path().join("ca-lib"),
            "[project]\nname = \"corelib\"\ndependencies = [\"corelib\"]\n",
        );
        write_manifest(
            &tmp.path().join("svc"),
            "[project]\nname = \"svc\"\ndependencies = [\"corelib\"]\n",
        );

        let graph = build_dependency_graph(tmp.path()).unwrap();

        assert_eq!(graph, graph_of(&[("svc", &["ca-lib"])]));
    }

    #[test]
    fn test_duplicate_specifiers_collapse_to_one_edge() {
        let tmp = TempDir::new().unwrap();
        write_manifest(
            tmp.path(),
            "[tool.uv.workspace]\nmembers = [\"lib\", \"svc\"]\n",
        );
        write_manifest(&tmp.path().join("lib"), "[project]\nname = \"lib\"\n");
        write_manifest(
            &tmp.path().join("svc"),
            "[project]\nname = \"svc\"\ndependencies = [\"lib[grpc]\", \"lib>=1.0\", \"lib\"]\n",
        );

        let graph = build_dependency_graph(tmp.path()).unwrap();

        assert_eq!(graph, graph_of(&[("svc", &["lib"])]));
    }

    #[test]
    fn test_entries_follow_member_list_order() {
        let tmp = TempDir::new().unwrap();
        write_manifest(
            tmp.path(),
            "[tool.uv.workspace]\nmembers = [\"z-svc\", \"a-svc\", \"lib\"]\n",
        );
        write_manifest(&tmp.path().join("lib"), "[project]\nname = \"lib\"\n");
        write_manifest(
            &tmp.path().join("z-svc"),
            "[project]\nname = \"z-svc\"\ndependencies = [\"lib\"]\n",
        );
        write_manifest(
            &tmp.path().join("a-svc"),
            "[project]\nname = \"a-svc\"\ndependencies = [\"lib\"]\n",
        );

        let graph = build_dependency_graph(tmp.path()).unwrap();

        let members: Vec<&str> = graph.iter().map(|(member, _)| member).collect();
        assert_eq!(members, ["z-svc", "a-svc"]);
    }

    #[test]
    fn test_graph_serializes_as_ordered_json_object() {
        let graph = graph_of(&[("service-b", &["lib", "service-a"]), ("service-a", &["lib"])]);

        let json = serde_json::to_string(&graph).unwrap();

        assert_eq!(
            json,
            r#"{"service-b":["lib","service-a"],"service-a":["lib"]}"#
        );
    }
}
