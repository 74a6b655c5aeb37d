use anyhow::{Context, Result};
use startwd_core::resolve;

use super::start_dir;
use crate::project::CliHost;

pub fn resolve_command(cwd: Option<&str>, configuration: Option<String>, json: bool) -> Result<()> {
    let dir = start_dir(cwd)?;
    let host = CliHost::discover(&dir)?.with_configuration(configuration);

    let Some(settings) = host.start_settings() else {
        println!("❌ No project file found from {}", dir.display());
        return Ok(());
    };
    let resolved = resolve(&settings);

    if json {
        let output =
            serde_json::to_string_pretty(&resolved).context("Failed to serialize launch")?;
        println!("{output}");
        return Ok(());
    }

    if let Some(project_dir) = host.project_dir() {
        println!("📁 Project: {}", project_dir.display());
    }
    println!("   Executable: {}", resolved.executable_path.display());
    println!("   Working directory: {}", resolved.working_directory.display());
    match resolved.arguments.as_deref() {
        Some(args) if !args.is_empty() => println!("   Arguments: {args}"),
        _ => println!("   Arguments: (none)"),
    }

    Ok(())
}
