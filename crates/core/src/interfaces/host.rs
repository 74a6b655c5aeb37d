//! Host capabilities consumed by the start-without-debugging command

use super::PropertySource;

/// Debugger state of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebuggerMode {
    /// No debug or run session is active
    #[default]
    Design,
    /// A session is active and stopped at a breakpoint
    Break,
    /// A session is active and running
    Run,
}

/// The project the command acts on, with its property bags
#[derive(Debug, Clone)]
pub struct SelectedProject<P> {
    pub unique_name: String,
    /// Name of the active build configuration (e.g. "Debug")
    pub configuration_name: String,
    /// Project-wide properties (`FullPath`, `OutputFileName`)
    pub project_properties: P,
    /// Properties of the active configuration (`OutputPath`, `Start*`)
    pub configuration_properties: P,
}

/// Trait implemented by whatever environment hosts the command
pub trait Host {
    type Properties: PropertySource;

    /// The currently selected project, if any
    fn selected_project(&self) -> Option<SelectedProject<Self::Properties>>;

    fn debugger_mode(&self) -> DebuggerMode;

    /// Build `unique_name` under `configuration`, blocking until the build is done
    fn build_project(&self, configuration: &str, unique_name: &str) -> anyhow::Result<()>;

    /// Show a message and block until the user acknowledges it
    fn show_message(&self, title: &str, message: &str);
}
