use anyhow::Result;
use startwd_core::{CommandOutcome, StartWithoutDebugging, resolve};
use tracing::{debug, info};

use super::start_dir;
use crate::project::CliHost;

pub fn run_command(
    cwd: Option<&str>,
    configuration: Option<String>,
    no_build: bool,
    dry_run: bool,
) -> Result<()> {
    let dir = start_dir(cwd)?;
    debug!("Running project from: {}", dir.display());

    let host = CliHost::discover(&dir)?
        .with_configuration(configuration)
        .with_skip_build(no_build);

    if dry_run {
        if let Some(settings) = host.start_settings() {
            let resolved = resolve(&settings);
            println!("{}", resolved.to_shell_command());
            if !resolved.working_directory.as_os_str().is_empty() {
                println!("Working directory: {}", resolved.working_directory.display());
            }
        }
        return Ok(());
    }

    let command = StartWithoutDebugging::register(host);
    match command.execute() {
        CommandOutcome::Launched(handle) => {
            info!("Started ({})", handle);
            println!("🚀 Started process {}", handle.pid);
        }
        CommandOutcome::LaunchFailed(_) => {
            // the host already showed the message
            std::process::exit(1);
        }
        CommandOutcome::NoProject | CommandOutcome::BuildFailed => {}
    }

    Ok(())
}
