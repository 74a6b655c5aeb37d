//! Start settings resolution and process launching
//!
//! [`resolve`] is pure path arithmetic. [`launch`] makes exactly one spawn
//! attempt and never waits on the child.

use crate::error::LaunchError;
use crate::types::{ProcessHandle, ResolvedLaunch, StartSettings};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Compute the effective executable, working directory and arguments.
///
/// Never fails and never touches the file system.
pub fn resolve(settings: &StartSettings) -> ResolvedLaunch {
    let executable_path = match settings.executable_override() {
        Some(path) => PathBuf::from(path),
        None => join_output_path(settings),
    };

    let working_directory = match settings.working_directory_override() {
        Some(dir) => PathBuf::from(dir),
        None => executable_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    debug!(
        "Resolved {} (working directory: {})",
        executable_path.display(),
        working_directory.display()
    );

    ResolvedLaunch {
        executable_path,
        working_directory,
        arguments: settings.arguments.clone(),
    }
}

// Empty parts are skipped; joining "" would leave a trailing separator.
fn join_output_path(settings: &StartSettings) -> PathBuf {
    [
        &settings.project_full_path,
        &settings.output_relative_path,
        &settings.output_file_name,
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .fold(PathBuf::new(), |path, part| path.join(part))
}

/// Start the resolved program as a detached child.
///
/// Returns as soon as the process exists; its output and exit status are
/// not observed. The child is never reaped, so on Unix it stays a zombie
/// after exiting until the calling process itself exits.
pub fn launch(resolved: &ResolvedLaunch) -> Result<ProcessHandle, LaunchError> {
    let mut command = build_command(resolved)?;

    info!("Starting: {}", resolved.to_shell_command());
    if !resolved.working_directory.as_os_str().is_empty() {
        info!("Working directory: {}", resolved.working_directory.display());
    }

    let child = command.spawn().map_err(|source| LaunchError::Spawn {
        program: resolved.executable_path.clone(),
        source,
    })?;

    let handle = ProcessHandle { pid: child.id() };
    debug!("Started {} ({})", resolved.executable_path.display(), handle);
    Ok(handle)
}

fn build_command(resolved: &ResolvedLaunch) -> Result<Command, LaunchError> {
    if resolved.executable_path.as_os_str().is_empty() {
        return Err(LaunchError::EmptyExecutable);
    }

    let mut command = Command::new(program_path(&resolved.executable_path));

    if let Some(arguments) = resolved.arguments.as_deref() {
        apply_arguments(&mut command, arguments)?;
    }

    if !resolved.working_directory.as_os_str().is_empty() {
        command.current_dir(&resolved.working_directory);
    }

    Ok(command)
}

// A relative path with a directory part is relative to our own directory,
// not the child's, so anchor it before current_dir changes its meaning.
fn program_path(executable: &Path) -> PathBuf {
    let has_dir = executable
        .parent()
        .is_some_and(|p| !p.as_os_str().is_empty());

    if executable.is_relative() && has_dir {
        std::path::absolute(executable).unwrap_or_else(|_| executable.to_path_buf())
    } else {
        executable.to_path_buf()
    }
}

#[cfg(windows)]
fn apply_arguments(command: &mut Command, arguments: &str) -> Result<(), LaunchError> {
    use std::os::windows::process::CommandExt;

    if !arguments.trim().is_empty() {
        command.raw_arg(arguments);
    }
    Ok(())
}

#[cfg(not(windows))]
fn apply_arguments(command: &mut Command, arguments: &str) -> Result<(), LaunchError> {
    let args = shell_words::split(arguments).map_err(|e| LaunchError::InvalidArguments {
        arguments: arguments.to_string(),
        reason: e.to_string(),
    })?;
    command.args(args);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback(full: &str, output: &str, file: &str) -> StartSettings {
        StartSettings {
            project_full_path: full.to_string(),
            output_relative_path: output.to_string(),
            output_file_name: file.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_executable_wins() {
        let settings = StartSettings {
            explicit_executable_path: Some("/opt/tools/server".to_string()),
            ..fallback("/work/proj", "target/debug", "app")
        };

        let resolved = resolve(&settings);

        assert_eq!(resolved.executable_path, PathBuf::from("/opt/tools/server"));
        assert_eq!(resolved.working_directory, PathBuf::from("/opt/tools"));
    }

    #[test]
    fn test_blank_executable_falls_back_to_output() {
        for blank in [None, Some(""), Some("   ")] {
            let settings = StartSettings {
                explicit_executable_path: blank.map(str::to_string),
                ..fallback("/work/proj", "target/debug", "app")
            };

            let resolved = resolve(&settings);

            assert_eq!(
                resolved.executable_path,
                Path::new("/work/proj").join("target/debug").join("app")
            );
            assert_eq!(
                resolved.working_directory,
                Path::new("/work/proj").join("target/debug")
            );
        }
    }

    #[test]
    fn test_explicit_working_directory_kept_verbatim() {
        let settings = StartSettings {
            explicit_working_directory: Some("/srv/data".to_string()),
            arguments: Some("--check".to_string()),
            ..fallback("/work/proj", "target/debug", "app")
        };

        let resolved = resolve(&settings);

        assert_eq!(resolved.working_directory, PathBuf::from("/srv/data"));
        assert_eq!(resolved.arguments.as_deref(), Some("--check"));
    }

    #[test]
    fn test_trailing_separator_not_doubled() {
        let resolved = resolve(&fallback("/work/proj/", "target/debug/", "app"));
        assert_eq!(
            resolved.executable_path,
            Path::new("/work/proj/").join("target/debug/").join("app")
        );
        assert_eq!(resolved.executable_path.to_str(), Some("/work/proj/target/debug/app"));
    }

    #[test]
    fn test_absolute_output_path_replaces_project_path() {
        let resolved = resolve(&fallback("/work/proj", "/var/build", "app"));
        assert_eq!(resolved.executable_path, PathBuf::from("/var/build/app"));
    }

    #[test]
    fn test_bare_file_name_has_empty_working_directory() {
        let resolved = resolve(&fallback("", "", "app"));
        assert_eq!(resolved.executable_path, PathBuf::from("app"));
        assert_eq!(resolved.working_directory, PathBuf::new());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let settings = fallback("/work/proj", "out", "tool");
        assert_eq!(resolve(&settings), resolve(&settings));
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_start_program() {
        let settings = StartSettings {
            explicit_executable_path: Some(r"C:\app\app.exe".to_string()),
            ..fallback(r"C:\other", "bin", "x.exe")
        };
        let resolved = resolve(&settings);
        assert_eq!(resolved.executable_path, PathBuf::from(r"C:\app\app.exe"));
        assert_eq!(resolved.working_directory, PathBuf::from(r"C:\app"));
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_output_fallback() {
        let mut settings = StartSettings {
            explicit_executable_path: Some(String::new()),
            explicit_working_directory: Some(String::new()),
            ..fallback(r"C:\proj", r"bin\Debug", "app.exe")
        };
        let resolved = resolve(&settings);
        assert_eq!(
            resolved.executable_path,
            PathBuf::from(r"C:\proj\bin\Debug\app.exe")
        );
        assert_eq!(resolved.working_directory, PathBuf::from(r"C:\proj\bin\Debug"));

        settings.explicit_working_directory = Some(r"C:\custom".to_string());
        let custom = resolve(&settings);
        assert_eq!(custom.working_directory, PathBuf::from(r"C:\custom"));
        assert_eq!(custom.executable_path, resolved.executable_path);
    }

    #[test]
    fn test_launch_missing_executable() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = ResolvedLaunch {
            executable_path: dir.path().join("does-not-exist"),
            working_directory: dir.path().to_path_buf(),
            arguments: None,
        };

        let err = launch(&resolved).unwrap_err();

        assert!(matches!(err, LaunchError::Spawn { .. }));
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_launch_empty_executable() {
        let resolved = ResolvedLaunch {
            executable_path: PathBuf::new(),
            working_directory: PathBuf::new(),
            arguments: None,
        };
        assert!(matches!(launch(&resolved), Err(LaunchError::EmptyExecutable)));
    }

    #[test]
    fn test_program_path_anchors_relative_dirs() {
        assert_eq!(program_path(Path::new("app")), PathBuf::from("app"));
        assert!(program_path(Path::new("target/debug/app")).is_absolute());
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::time::{Duration, Instant};

        fn wait_for(path: &Path) -> String {
            let deadline = Instant::now() + Duration::from_secs(10);
            loop {
                if let Ok(contents) = std::fs::read_to_string(path) {
                    if contents.ends_with('\n') {
                        return contents;
                    }
                }
                assert!(Instant::now() < deadline, "child never wrote {}", path.display());
                std::thread::sleep(Duration::from_millis(25));
            }
        }

        #[test]
        fn test_launch_uses_arguments_and_working_directory() {
            let dir = tempfile::tempdir().unwrap();
            let resolved = ResolvedLaunch {
                executable_path: PathBuf::from("/bin/sh"),
                working_directory: dir.path().to_path_buf(),
                arguments: Some(r#"-c 'echo "$1" > out.tmp && pwd -P > out.txt' sh "two words""#.to_string()),
            };

            let handle = launch(&resolved).unwrap();
            assert!(handle.pid > 0);

            let cwd = wait_for(&dir.path().join("out.txt"));
            assert_eq!(
                Path::new(cwd.trim()).canonicalize().unwrap(),
                dir.path().canonicalize().unwrap()
            );
            let arg = std::fs::read_to_string(dir.path().join("out.tmp")).unwrap();
            assert_eq!(arg, "two words\n");
        }

        #[test]
        fn test_launch_does_not_wait_for_child() {
            let resolved = ResolvedLaunch {
                executable_path: PathBuf::from("/bin/sh"),
                working_directory: PathBuf::new(),
                arguments: Some("-c 'sleep 5'".to_string()),
            };

            let started = Instant::now();
            let handle = launch(&resolved).unwrap();

            assert!(handle.pid > 0);
            assert!(started.elapsed() < Duration::from_secs(4));
        }

        #[test]
        fn test_program_path_keeps_absolute() {
            assert_eq!(
                program_path(Path::new("/usr/bin/env")),
                PathBuf::from("/usr/bin/env")
            );
        }

        #[test]
        fn test_launch_invalid_working_directory() {
            let dir = tempfile::tempdir().unwrap();
            let resolved = ResolvedLaunch {
                executable_path: PathBuf::from("/bin/sh"),
                working_directory: dir.path().join("missing"),
                arguments: Some("-c true".to_string()),
            };
            let err = launch(&resolved).unwrap_err();
            assert!(!err.message().is_empty());
        }

        #[test]
        fn test_launch_unbalanced_quote() {
            let resolved = ResolvedLaunch {
                executable_path: PathBuf::from("/bin/sh"),
                working_directory: PathBuf::new(),
                arguments: Some("-c 'true".to_string()),
            };
            let err = launch(&resolved).unwrap_err();
            assert!(matches!(err, LaunchError::InvalidArguments { .. }));
        }
    }
}
