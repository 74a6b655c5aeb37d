use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const PROJECT_FILE_NAME: &str = ".startwd.json";
const ALT_PROJECT_FILE_NAME: &str = "startwd.json";

fn default_configuration() -> String {
    "Debug".to_string()
}

/// Start settings of one project, keyed the way host property bags are
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Project-wide properties (`FullPath`, `OutputFileName`, ...)
    #[serde(default)]
    pub project: Map<String, Value>,

    #[serde(default = "default_configuration")]
    pub active_configuration: String,

    /// Per-configuration properties (`OutputPath`, `StartProgram`, ...)
    #[serde(default)]
    pub configurations: BTreeMap<String, Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildConfig>,
}

/// Command that builds the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ProjectFile {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse project file {}", path.display()))
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize project file")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(PROJECT_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join(ALT_PROJECT_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Starter file for a cargo project named `name`
    pub fn template(name: &str) -> Self {
        let configuration = |output: &str| {
            let mut props = Map::new();
            props.insert("OutputPath".into(), Value::String(output.into()));
            props.insert("StartProgram".into(), Value::String(String::new()));
            props.insert("StartWorkingDirectory".into(), Value::String(String::new()));
            props.insert("StartArguments".into(), Value::String(String::new()));
            props
        };

        let mut project = Map::new();
        project.insert("OutputFileName".into(), Value::String(name.to_string()));

        Self {
            name: Some(name.to_string()),
            project,
            active_configuration: default_configuration(),
            configurations: BTreeMap::from([
                ("Debug".to_string(), configuration("target/debug")),
                ("Release".to_string(), configuration("target/release")),
            ]),
            build: Some(BuildConfig {
                command: "cargo".to_string(),
                args: vec!["build".to_string()],
            }),
        }
    }
}
