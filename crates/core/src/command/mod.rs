//! The "start without debugging" command
//!
//! Glues the launcher to a [`Host`]: pick the selected project, build it when
//! no session is active, resolve its start settings and launch.

use crate::interfaces::{DebuggerMode, Host};
use crate::launcher::{launch, resolve};
use crate::types::{ProcessHandle, StartSettings};
use tracing::{debug, info, warn};

/// Title used for the failure notification
pub const MESSAGE_TITLE: &str = "Start without debugging";

/// Identity under which a host registers the command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandId {
    pub command_set: &'static str,
    pub id: u32,
}

impl CommandId {
    pub const START_WITHOUT_DEBUGGING: CommandId = CommandId {
        command_set: "396bc999-6977-4e9f-9609-3cefa7b67250",
        id: 0x0100,
    };
}

/// What a single execution of the command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing was selected; the command did nothing
    NoProject,
    /// The build step failed; the command stopped without notifying the user
    BuildFailed,
    Launched(ProcessHandle),
    /// The process could not be started; the user was shown this message
    LaunchFailed(String),
}

/// Registered command bound to its host
#[derive(Debug)]
pub struct StartWithoutDebugging<H> {
    host: H,
    id: CommandId,
}

impl<H: Host> StartWithoutDebugging<H> {
    /// Register the command with `host`. The returned value owns the host
    /// handle for as long as the command stays registered.
    pub fn register(host: H) -> Self {
        let id = CommandId::START_WITHOUT_DEBUGGING;
        debug!("Registered command {}:{:#06x}", id.command_set, id.id);
        Self { host, id }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Run the command once.
    ///
    /// Only a launch failure is reported to the user; every earlier failure
    /// is a silent no-op.
    pub fn execute(&self) -> CommandOutcome {
        let Some(project) = self.host.selected_project() else {
            debug!("No project selected");
            return CommandOutcome::NoProject;
        };

        if self.host.debugger_mode() == DebuggerMode::Design {
            info!(
                "Building {} ({})",
                project.unique_name, project.configuration_name
            );
            if let Err(e) = self
                .host
                .build_project(&project.configuration_name, &project.unique_name)
            {
                warn!("Build of {} failed: {:#}", project.unique_name, e);
                return CommandOutcome::BuildFailed;
            }
        } else {
            debug!("Debugger session active, skipping build");
        }

        let settings = StartSettings::from_properties(
            &project.project_properties,
            &project.configuration_properties,
        );
        let resolved = resolve(&settings);

        match launch(&resolved) {
            Ok(handle) => CommandOutcome::Launched(handle),
            Err(e) => {
                let message = format!("Cannot start process: {}", e.message());
                warn!("{}", message);
                self.host.show_message(MESSAGE_TITLE, &message);
                CommandOutcome::LaunchFailed(message)
            }
        }
    }
}
