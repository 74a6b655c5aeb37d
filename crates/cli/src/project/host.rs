//! Command-line implementation of the launcher host

use anyhow::{Context, Result, bail};
use startwd_core::interfaces::SelectedProject;
use startwd_core::interfaces::property_source::FULL_PATH;
use startwd_core::{DebuggerMode, Host, MapPropertySource, StartSettings};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

use super::ProjectFile;

/// Environment variable carrying the configuration name to the build command
pub const CONFIGURATION_ENV: &str = "STARTWD_CONFIGURATION";

/// Host backed by a project file found on disk
#[derive(Debug)]
pub struct CliHost {
    /// Loaded project file and the directory it lives in
    project: Option<(ProjectFile, PathBuf)>,
    configuration: Option<String>,
    skip_build: bool,
}

impl CliHost {
    /// Locate and load the project file governing `start_dir`.
    ///
    /// A missing project file is not an error: the host simply has no project selected.
    pub fn discover(start_dir: &Path) -> Result<Self> {
        let project = match ProjectFile::find_config_file(start_dir) {
            Some(path) => {
                debug!("Using project file {}", path.display());
                let file = ProjectFile::load_from_file(&path)?;
                let dir = path
                    .parent()
                    .map(Path::to_path_buf)
                    .context("Project file has no parent directory")?;
                Some((file, dir))
            }
            None => {
                debug!("No project file above {}", start_dir.display());
                None
            }
        };

        Ok(Self {
            project,
            configuration: None,
            skip_build: false,
        })
    }

    pub fn with_configuration(mut self, configuration: Option<String>) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn with_skip_build(mut self, skip_build: bool) -> Self {
        self.skip_build = skip_build;
        self
    }

    /// Start settings of the selected project, without building or launching
    pub fn start_settings(&self) -> Option<StartSettings> {
        self.selected_project().map(|project| {
            StartSettings::from_properties(
                &project.project_properties,
                &project.configuration_properties,
            )
        })
    }

    /// Directory holding the project file
    pub fn project_dir(&self) -> Option<&Path> {
        self.project.as_ref().map(|(_, dir)| dir.as_path())
    }
}

impl Host for CliHost {
    type Properties = MapPropertySource;

    fn selected_project(&self) -> Option<SelectedProject<MapPropertySource>> {
        let (file, dir) = self.project.as_ref()?;

        let configuration_name = self
            .configuration
            .clone()
            .unwrap_or_else(|| file.active_configuration.clone());

        let configuration_properties = match file.configurations.get(&configuration_name) {
            Some(props) => MapPropertySource::from(props),
            None => {
                warn!(
                    "Configuration '{}' not defined in project file",
                    configuration_name
                );
                MapPropertySource::new()
            }
        };

        let mut project_properties = MapPropertySource::from(&file.project);
        if !project_properties.contains(FULL_PATH) {
            project_properties.insert(FULL_PATH, dir.display().to_string());
        }

        let unique_name = file.name.clone().unwrap_or_else(|| {
            dir.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        Some(SelectedProject {
            unique_name,
            configuration_name,
            project_properties,
            configuration_properties,
        })
    }

    fn debugger_mode(&self) -> DebuggerMode {
        // the CLI never runs inside a debugger session
        DebuggerMode::Design
    }

    fn build_project(&self, configuration: &str, unique_name: &str) -> Result<()> {
        if self.skip_build {
            debug!("Build of {} skipped", unique_name);
            return Ok(());
        }

        let Some((ProjectFile { build: Some(build), .. }, dir)) = self.project.as_ref() else {
            debug!("No build command configured for {}", unique_name);
            return Ok(());
        };

        info!("Running: {} {}", build.command, build.args.join(" "));
        let status = Command::new(&build.command)
            .args(&build.args)
            .current_dir(dir)
            .env(CONFIGURATION_ENV, configuration)
            .status()
            .with_context(|| format!("Failed to run build command '{}'", build.command))?;

        if !status.success() {
            bail!("build command '{}' exited with {}", build.command, status);
        }
        Ok(())
    }

    fn show_message(&self, title: &str, message: &str) {
        eprintln!("❌ {title}: {message}");
    }
}
