use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{init_command, resolve_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "startwd")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the project and start its program without a debugger
    #[command(visible_alias = "r")]
    Run {
        /// Directory to look for the project file from (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Build configuration to use instead of the active one
        #[arg(short = 'C', long)]
        configuration: Option<String>,

        /// Start the existing build output without building first
        #[arg(long)]
        no_build: bool,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Show the program, working directory and arguments that would be started
    Resolve {
        /// Directory to look for the project file from (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Build configuration to use instead of the active one
        #[arg(short = 'C', long)]
        configuration: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a project file
    Init {
        /// Directory to create the project file in (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Force overwrite existing project file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Run {
                cwd,
                configuration,
                no_build,
                dry_run,
            } => run_command(cwd.as_deref(), configuration, no_build, dry_run),
            Commands::Resolve {
                cwd,
                configuration,
                json,
            } => resolve_command(cwd.as_deref(), configuration, json),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
