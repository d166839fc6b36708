//! Command implementations

pub mod completions;
pub mod graph;
pub mod members;
pub mod root;

use std::path::PathBuf;

use anyhow::Result;
use uvgraph::find_workspace_root;

/// Resolve the start directory for a search (explicit `--path` or cwd).
pub fn start_dir(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}

/// Locate the workspace root from a start directory, or fail with a
/// user-facing message.
pub fn locate_root(start: &std::path::Path) -> Result<PathBuf> {
    find_workspace_root(start).ok_or_else(|| {
        anyhow::anyhow!(
            "could not find a uv workspace in {} or any parent directory\n\
             help: A workspace root declares [tool.uv.workspace] members in pyproject.toml",
            start.display()
        )
    })
}
