use crate::backend::DisplayBackend;
use crate::error::ProcessError;
use crate::executor::ExecStatus;
use crate::monitor::ArrangementCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Same as the last executed command; nothing was spawned
    Unexecuted,
    Executed(ExecStatus),
}

/// Remembers the last arrangement handed to the backend so identical
/// consecutive layouts are only applied once.
#[derive(Debug, Default)]
pub struct CommandCache {
    last: Option<ArrangementCommand>,
}

impl CommandCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&ArrangementCommand> {
        self.last.as_ref()
    }

    /// Execute `command` unless it equals the previous one. The command is
    /// recorded after it ran, whatever its exit status, so a layout the tool
    /// keeps rejecting is not retried every cycle. A spawn failure leaves the
    /// cache untouched.
    pub fn apply<B: DisplayBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        command: &ArrangementCommand,
    ) -> Result<ApplyOutcome, ProcessError> {
        if self.last.as_ref() == Some(command) {
            log::debug!("Layout unchanged, skipping: '{}'", command);
            return Ok(ApplyOutcome::Unexecuted);
        }

        let status = backend.arrange(command)?;
        self.last = Some(command.clone());
        Ok(ApplyOutcome::Executed(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::monitor::{DisplaySnapshot, Directive, Role};
    use std::io;

    #[derive(Default)]
    struct RecordingBackend {
        arranged: Vec<ArrangementCommand>,
        exit_code: i32,
        fail_spawn: bool,
    }

    impl DisplayBackend for RecordingBackend {
        fn probe(&mut self) -> Result<DisplaySnapshot, ProbeError> {
            Ok(DisplaySnapshot::default())
        }

        fn arrange(&mut self, command: &ArrangementCommand) -> Result<ExecStatus, ProcessError> {
            if self.fail_spawn {
                return Err(ProcessError::Execution {
                    command: command.to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "xrandr not found"),
                });
            }
            self.arranged.push(command.clone());
            Ok(ExecStatus::from_code(self.exit_code))
        }
    }

    fn primary(name: &str) -> ArrangementCommand {
        ArrangementCommand::new(vec![Directive::Enable {
            name: name.to_string(),
            role: Role::Primary,
        }])
    }

    #[test]
    fn test_identical_command_runs_once() {
        let mut backend = RecordingBackend::default();
        let mut cache = CommandCache::new();
        let cmd = primary("DP-0");

        assert_eq!(
            cache.apply(&mut backend, &cmd).unwrap(),
            ApplyOutcome::Executed(ExecStatus::from_code(0))
        );
        assert_eq!(cache.apply(&mut backend, &cmd).unwrap(), ApplyOutcome::Unexecuted);
        assert_eq!(backend.arranged.len(), 1);
    }

    #[test]
    fn test_changed_command_runs_again() {
        let mut backend = RecordingBackend::default();
        let mut cache = CommandCache::new();

        cache.apply(&mut backend, &primary("DP-0")).unwrap();
        cache.apply(&mut backend, &primary("DP-2")).unwrap();
        cache.apply(&mut backend, &primary("DP-0")).unwrap();

        assert_eq!(backend.arranged, vec![primary("DP-0"), primary("DP-2"), primary("DP-0")]);
        assert_eq!(cache.last(), Some(&primary("DP-0")));
    }

    #[test]
    fn test_failed_command_is_remembered() {
        let mut backend = RecordingBackend { exit_code: 1, ..Default::default() };
        let mut cache = CommandCache::new();
        let cmd = primary("DP-0");

        match cache.apply(&mut backend, &cmd).unwrap() {
            ApplyOutcome::Executed(status) => assert!(!status.success()),
            ApplyOutcome::Unexecuted => panic!("first apply must execute"),
        }
        assert_eq!(cache.apply(&mut backend, &cmd).unwrap(), ApplyOutcome::Unexecuted);
        assert_eq!(backend.arranged.len(), 1);
    }

    #[test]
    fn test_spawn_failure_is_not_recorded() {
        let mut backend = RecordingBackend { fail_spawn: true, ..Default::default() };
        let mut cache = CommandCache::new();

        assert!(cache.apply(&mut backend, &primary("DP-0")).is_err());
        assert!(cache.last().is_none());
    }
}
