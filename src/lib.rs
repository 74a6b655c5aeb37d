//! Test support for the workspace integration tests
//!
//! Provides an in-memory [`Host`] that records what the command asked of it.

use startwd_core::interfaces::SelectedProject;
use startwd_core::{DebuggerMode, Host, MapPropertySource};
use std::cell::RefCell;

/// Host whose project, debugger state and build result are fixed up front
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub project: Option<SelectedProject<MapPropertySource>>,
    pub mode: DebuggerMode,
    pub build_error: Option<String>,
    pub builds: RefCell<Vec<(String, String)>>,
    pub messages: RefCell<Vec<(String, String)>>,
}

impl RecordingHost {
    pub fn with_project(
        project_properties: MapPropertySource,
        configuration_properties: MapPropertySource,
    ) -> Self {
        Self {
            project: Some(SelectedProject {
                unique_name: "fixture".to_string(),
                configuration_name: "Debug".to_string(),
                project_properties,
                configuration_properties,
            }),
            ..Default::default()
        }
    }
}

impl Host for RecordingHost {
    type Properties = MapPropertySource;

    fn selected_project(&self) -> Option<SelectedProject<MapPropertySource>> {
        self.project.clone()
    }

    fn debugger_mode(&self) -> DebuggerMode {
        self.mode
    }

    fn build_project(&self, configuration: &str, unique_name: &str) -> anyhow::Result<()> {
        self.builds
            .borrow_mut()
            .push((configuration.to_string(), unique_name.to_string()));
        match &self.build_error {
            Some(e) => Err(anyhow::anyhow!("{e}")),
            None => Ok(()),
        }
    }

    fn show_message(&self, title: &str, message: &str) {
        self.messages
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}
