use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Effective program, directory and arguments for one launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLaunch {
    pub executable_path: PathBuf,
    /// Empty when the executable path has no directory portion; the child
    /// then inherits the caller's current directory.
    pub working_directory: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

impl ResolvedLaunch {
    pub fn to_shell_command(&self) -> String {
        let program = self.executable_path.display().to_string();
        let mut cmd = if program.contains(' ') {
            format!("\"{program}\"")
        } else {
            program
        };

        if let Some(args) = self.arguments.as_deref().filter(|a| !a.is_empty()) {
            cmd.push(' ');
            cmd.push_str(args);
        }
        cmd
    }
}

/// Reference to a started child process.
///
/// The process is not tracked: holding or dropping this handle has no
/// effect on the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessHandle {
    pub pid: u32,
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pid {}", self.pid)
    }
}
