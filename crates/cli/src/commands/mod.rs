pub mod init;
pub mod resolve;
pub mod run;

pub use init::init_command;
pub use resolve::resolve_command;
pub use run::run_command;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Absolute directory commands start from: `--cwd` or the process's current directory
pub(crate) fn start_dir(cwd: Option<&str>) -> Result<PathBuf> {
    match cwd {
        Some(dir) => std::path::absolute(dir)
            .with_context(|| format!("Failed to resolve directory {dir}")),
        None => std::env::current_dir().context("Failed to get current directory"),
    }
}
