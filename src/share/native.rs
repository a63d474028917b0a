use std::process::Command;

use super::{ShareError, ShareOutcome, SharePayload, ShareTarget};
use crate::launch::spawn_detached;

/// Native share tier backed by a user-configured command.
///
/// The command receives the share text on stdin and `TITLE URL` as its
/// last two arguments. Without a configured command the tier is absent.
///
/// Sharing is a hand-off: once the command starts the share counts as
/// done, and its exit status is only logged.
pub struct CommandShare {
    command: Option<String>,
}

impl CommandShare {
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
        }
    }
}

impl ShareTarget for CommandShare {
    fn name(&self) -> &'static str {
        "native"
    }

    fn is_available(&mut self) -> bool {
        self.command.is_some()
    }

    fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        let Some(command) = self.command.as_deref() else {
            return Err(ShareError::Unavailable);
        };

        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or(ShareError::Unavailable)?;

        let mut child = Command::new(program);
        child.args(parts).arg(&payload.title).arg(&payload.url);
        spawn_detached(&mut child, Some(payload.text.clone())).map_err(|source| {
            ShareError::Spawn {
                command: command.to_string(),
                source,
            }
        })?;

        Ok(ShareOutcome::Shared { tier: self.name() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SharePayload {
        SharePayload {
            title: "t".into(),
            text: "x".into(),
            url: "http://u".into(),
            clipboard_text: String::new(),
            confirmation: "",
        }
    }

    #[test]
    fn unconfigured_or_blank_command_is_unavailable() {
        assert!(!CommandShare::new(None).is_available());
        assert!(!CommandShare::new(Some("   ".into())).is_available());
        assert!(CommandShare::new(Some("share-tool".into())).is_available());
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let mut tier = CommandShare::new(Some("definitely-not-a-real-share-tool-9f2".into()));
        assert!(matches!(tier.share(&payload()), Err(ShareError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn successful_command_reports_shared() {
        let mut tier = CommandShare::new(Some("true".into()));
        assert_eq!(
            tier.share(&payload()).unwrap(),
            ShareOutcome::Shared { tier: "native" }
        );
    }

    #[cfg(unix)]
    #[test]
    fn long_running_command_does_not_block() {
        let mut tier = CommandShare::new(Some("sleep 5".into()));
        let started = std::time::Instant::now();
        assert_eq!(
            tier.share(&payload()).unwrap(),
            ShareOutcome::Shared { tier: "native" }
        );
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }
}
