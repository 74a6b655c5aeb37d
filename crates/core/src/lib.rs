//! startwd-core - resolve a project's start settings and launch it without a debugger
//!
//! This crate provides functionality to:
//! - Read start settings from a host's string-keyed property bags
//! - Resolve the effective executable, working directory and arguments
//! - Spawn the resolved program as a detached, untracked child process
//! - Drive the whole "start without debugging" command against a [`Host`]
pub mod command;
pub mod error;
pub mod interfaces;
pub mod launcher;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{LaunchError, PropertyError};
pub use types::*;

// Re-export main API components
pub use command::{CommandId, CommandOutcome, StartWithoutDebugging};
pub use interfaces::{DebuggerMode, FromPropertyValue, Host, PropertySource, get_value};
pub use launcher::{launch, resolve};
pub use services::MapPropertySource;
