//! `uvgraph graph` command

use anyhow::{Context, Result};

use crate::cli::{GraphArgs, GraphFormat};
use crate::commands::{locate_root, start_dir};
use uvgraph::{build_dependency_graph, DependencyGraph};

pub fn execute(args: GraphArgs) -> Result<()> {
    let start = start_dir(args.path)?;
    let root = locate_root(&start)?;

    let graph = build_dependency_graph(&root)
        .with_context(|| format!("failed to build dependency graph for {}", root.display()))?;

    match args.format {
        GraphFormat::Json => print_json(&graph)?,
        GraphFormat::Tree => print_tree(&graph),
    }

    Ok(())
}

fn print_json(graph: &DependencyGraph) -> Result<()> {
    let json = serde_json::to_string_pretty(graph).context("failed to serialize graph")?;
    println!("{json}");
    Ok(())
}

fn print_tree(graph: &DependencyGraph) {
    for (member, deps) in graph.iter() {
        println!("{member}");

        for (idx, dep) in deps.iter().enumerate() {
            let branch = if idx + 1 == deps.len() {
                "└── "
            } else {
                "├── "
            };
            println!("{branch}{dep}");
        }
    }
}
