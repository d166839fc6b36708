//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// uvgraph - dependency graph discovery for uv-style Python workspaces
#[derive(Parser)]
#[command(name = "uvgraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Locate the workspace root
    Root(RootArgs),

    /// List workspace member directories
    Members(MembersArgs),

    /// Print the workspace dependency graph
    Graph(GraphArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct RootArgs {
    /// Directory to start searching from (defaults to the current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct MembersArgs {
    /// Directory to start searching from (defaults to the current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct GraphArgs {
    /// Directory to start searching from (defaults to the current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: GraphFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    /// JSON object mapping member directory to its workspace dependencies
    Json,
    /// Indented tree, one member per top-level line
    Tree,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
