use crate::interfaces::property_source::{
    FULL_PATH, OUTPUT_FILE_NAME, OUTPUT_PATH, START_ARGUMENTS, START_PROGRAM,
    START_WORKING_DIRECTORY,
};
use crate::interfaces::{PropertySource, get_value};
use serde::{Deserialize, Serialize};

/// How a project wants to be started, as read from its properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StartSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_executable_path: Option<String>,
    #[serde(default)]
    pub project_full_path: String,
    #[serde(default)]
    pub output_relative_path: String,
    #[serde(default)]
    pub output_file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_working_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

impl StartSettings {
    /// Read start settings from a project's property bags.
    ///
    /// `FullPath` and `OutputFileName` come from the project, everything else
    /// from the active configuration. Unreadable fallback fields become empty.
    pub fn from_properties<P, C>(project: &P, configuration: &C) -> Self
    where
        P: PropertySource + ?Sized,
        C: PropertySource + ?Sized,
    {
        Self {
            explicit_executable_path: get_value(configuration, START_PROGRAM),
            project_full_path: get_value(project, FULL_PATH).unwrap_or_default(),
            output_relative_path: get_value(configuration, OUTPUT_PATH).unwrap_or_default(),
            output_file_name: get_value(project, OUTPUT_FILE_NAME).unwrap_or_default(),
            explicit_working_directory: get_value(configuration, START_WORKING_DIRECTORY),
            arguments: get_value(configuration, START_ARGUMENTS),
        }
    }

    /// The explicit executable path, if it is set to something non-blank
    pub fn executable_override(&self) -> Option<&str> {
        non_blank(self.explicit_executable_path.as_deref())
    }

    /// The explicit working directory, if it is set to something non-blank
    pub fn working_directory_override(&self) -> Option<&str> {
        non_blank(self.explicit_working_directory.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
