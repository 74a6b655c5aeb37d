pub mod launch;
pub mod settings;

// Re-export commonly used types
pub use launch::{ProcessHandle, ResolvedLaunch};
pub use settings::StartSettings;
