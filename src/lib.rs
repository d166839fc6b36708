//! uvgraph - Workspace dependency graph discovery for uv-style Python
//! monorepos
//!
//! This crate locates the root of a uv workspace (a pyproject.toml
//! declaring `[tool.uv.workspace] members`), resolves inter-member
//! dependency references, and builds a graph of which members depend on
//! which other members.

pub mod core;

pub use core::{
    error::{GraphError, ManifestError},
    graph::{build_dependency_graph, DependencyGraph},
    manifest::Manifest,
    resolver::PackageMap,
    spec::base_name,
    workspace::{find_workspace_root, Workspace},
};
