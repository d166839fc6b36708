//! `uvgraph members` command

use anyhow::{Context, Result};

use crate::cli::MembersArgs;
use crate::commands::{locate_root, start_dir};
use uvgraph::Workspace;

pub fn execute(args: MembersArgs) -> Result<()> {
    let start = start_dir(args.path)?;
    let root = locate_root(&start)?;

    let ws = Workspace::open(&root)
        .with_context(|| format!("failed to open workspace at {}", root.display()))?;

    for member in ws.members() {
        println!("{member}");
    }

    Ok(())
}
