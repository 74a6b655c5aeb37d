use std::io;
use std::path::PathBuf;

/// Failure to start the child process.
///
/// The display text is the underlying OS (or argument parsing) message so it
/// can be shown to the user as is.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("{source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid arguments '{arguments}': {reason}")]
    InvalidArguments { arguments: String, reason: String },

    #[error("No executable path to start")]
    EmptyExecutable,
}

impl LaunchError {
    /// Message suitable for a user-facing acknowledgment dialog.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Reasons a host property lookup can yield no usable value.
///
/// These never reach the user; the typed accessor turns them into `None`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyError {
    #[error("property '{0}' not found")]
    Missing(String),

    #[error("property '{name}' unavailable: {reason}")]
    Unavailable { name: String, reason: String },

    #[error("property '{name}' is {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}
