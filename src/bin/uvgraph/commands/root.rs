//! `uvgraph root` command

use anyhow::Result;

use crate::cli::RootArgs;
use crate::commands::{locate_root, start_dir};

pub fn execute(args: RootArgs) -> Result<()> {
    let start = start_dir(args.path)?;
    let root = locate_root(&start)?;

    println!("{}", root.display());

    Ok(())
}
