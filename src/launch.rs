//! Open article links outside the terminal.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("No command configured to open links")]
    EmptyCommand,

    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(target_os = "macos")]
const DEFAULT_OPENER: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const DEFAULT_OPENER: &[&str] = &["cmd", "/C", "start", ""];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_OPENER: &[&str] = &["xdg-open"];

/// Program and leading arguments used to open `url`.
pub fn opener(open_command: Option<&str>) -> Result<(String, Vec<String>), LaunchError> {
    let parts: Vec<String> = match open_command.filter(|c| !c.trim().is_empty()) {
        Some(command) => command.split_whitespace().map(str::to_string).collect(),
        None => DEFAULT_OPENER.iter().map(|s| s.to_string()).collect(),
    };
    let mut parts = parts.into_iter();
    let program = parts.next().ok_or(LaunchError::EmptyCommand)?;
    Ok((program, parts.collect()))
}

/// Open `url` with the configured or platform opener.
///
/// The opener is spawned detached and reaped in the background.
pub fn open_url(url: &str, open_command: Option<&str>) -> Result<(), LaunchError> {
    let (program, args) = opener(open_command)?;
    tracing::debug!(%program, "Opening {}", url);

    let mut command = Command::new(&program);
    command.args(&args).arg(url);
    spawn_detached(&mut command, None)
        .map(drop)
        .map_err(|source| LaunchError::Spawn {
            command: program,
            source,
        })
}

/// Spawn `command` without waiting for it.
///
/// A background thread writes `input` to its stdin (when given), then
/// waits for the exit so the child is reaped. Unsuccessful exits are
/// only logged.
pub(crate) fn spawn_detached(
    command: &mut Command,
    input: Option<String>,
) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let program = command.get_program().to_string_lossy().into_owned();
    let stdin = if input.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    };
    let mut child = command
        .stdin(stdin)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(thread::spawn(move || {
        if let (Some(text), Some(mut pipe)) = (input, child.stdin.take()) {
            // Commands that ignore stdin may exit before we write.
            if let Err(e) = pipe.write_all(text.as_bytes()) {
                if e.kind() != io::ErrorKind::BrokenPipe {
                    tracing::warn!(%program, "Failed to write to stdin: {}", e);
                }
            }
        }

        match child.wait() {
            Ok(status) => {
                if !status.success() {
                    tracing::warn!(%program, %status, "Detached command exited unsuccessfully");
                }
                Some(status)
            }
            Err(e) => {
                tracing::warn!(%program, "Failed to wait for detached command: {}", e);
                None
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_command_is_split() {
        let (program, args) = opener(Some("firefox --new-tab")).unwrap();
        assert_eq!(program, "firefox");
        assert_eq!(args, vec!["--new-tab".to_string()]);
    }

    #[test]
    fn blank_command_uses_platform_default() {
        let (program, _) = opener(Some("  ")).unwrap();
        assert_eq!(program, DEFAULT_OPENER[0]);
    }

    #[cfg(unix)]
    #[test]
    fn detached_child_is_reaped() {
        let handle = spawn_detached(&mut Command::new("true"), None).unwrap();
        let status = handle.join().unwrap();
        assert!(status.is_some_and(|s| s.success()));
    }

    #[cfg(unix)]
    #[test]
    fn detached_child_receives_input() {
        let mut command = Command::new("sh");
        command.args(["-c", "test \"$(cat)\" = hello"]);
        let handle = spawn_detached(&mut command, Some("hello".into())).unwrap();
        assert!(handle.join().unwrap().is_some_and(|s| s.success()));
    }

    #[cfg(unix)]
    #[test]
    fn open_url_does_not_wait_for_the_opener() {
        let started = std::time::Instant::now();
        open_url("https://example.com", Some("sleep 5")).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn missing_program_is_reported() {
        let err = open_url("https://example.com", Some("no-such-opener-7c1")).unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { .. }));
    }
}
