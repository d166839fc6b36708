//! uvgraph CLI - dependency graph discovery for uv workspaces

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("uvgraph=debug")
    } else {
        EnvFilter::new("uvgraph=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Root(args) => commands::root::execute(args),
        Commands::Members(args) => commands::members::execute(args),
        Commands::Graph(args) => commands::graph::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
