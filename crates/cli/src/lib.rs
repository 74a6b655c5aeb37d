pub mod cli;
pub mod commands;
pub mod project;

// Re-export commonly used items
pub use cli::{Cli, Commands};
pub use project::{CliHost, ProjectFile};
