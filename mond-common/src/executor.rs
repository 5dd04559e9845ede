use std::process::{Command, Stdio};

use crate::command_builder::{describe, CommandBuilder};
use crate::error::{ProbeError, ProcessError};
use crate::monitor::ArrangementCommand;

/// Exit status of an arrangement run. `code` is `None` when the tool was
/// terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecStatus {
    pub code: Option<i32>,
}

impl ExecStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ExecStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self { code: status.code() }
    }
}

#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    command_builder: CommandBuilder,
}

impl ProcessExecutor {
    pub fn new(command_builder: CommandBuilder) -> Self {
        Self { command_builder }
    }

    pub fn command_builder(&self) -> &CommandBuilder {
        &self.command_builder
    }

    /// Run a probe command and return its stdout. Any non-zero exit is an error.
    pub fn run_probe(&self, mut cmd: Command) -> Result<String, ProbeError> {
        let command = describe(&cmd);
        log::debug!("Executing probe: {}", command);

        let output = cmd
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ProbeError::Spawn {
                command: command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::debug!("{} failed - exit code: {:?}, stderr: {}",
                command, output.status.code(), stderr);
            return Err(ProbeError::NonZeroExit {
                command,
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Run the arrangement and wait for it. A non-zero exit is reported in the
    /// returned status, not as an error.
    pub fn run_arrangement(&self, arrangement: &ArrangementCommand) -> Result<ExecStatus, ProcessError> {
        let mut cmd = self.command_builder.build_arrange_command(arrangement);
        let command = describe(&cmd);
        log::info!("Executing: '{}'", command);

        let output = cmd
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ProcessError::Execution {
                command: command.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.is_empty() {
            log::debug!("xrandr stdout: {}", stdout);
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.is_empty() {
                log::warn!("xrandr stderr: {}", stderr.trim_end());
            }
        }

        Ok(output.status.into())
    }
}
