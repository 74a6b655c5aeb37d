use anyhow::{Context, Result};
use tracing::debug;

use super::start_dir;
use crate::project::ProjectFile;
use crate::project::project_file::PROJECT_FILE_NAME;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = start_dir(cwd)?
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(PROJECT_FILE_NAME);
    if config_path.exists() && !force {
        println!("❌ Project file already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let name = project_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string());
    debug!("Creating project file for '{}'", name);

    ProjectFile::template(&name).save_to_file(&config_path)?;
    println!("✅ Created project file: {}", config_path.display());

    Ok(())
}
