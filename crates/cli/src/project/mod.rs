//! Project file (`.startwd.json`) handling

pub mod host;
pub mod project_file;

pub use host::CliHost;
pub use project_file::{BuildConfig, ProjectFile};
