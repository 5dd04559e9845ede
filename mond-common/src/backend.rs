use crate::command_builder::CommandBuilder;
use crate::error::{ProbeError, ProcessError};
use crate::executor::{ExecStatus, ProcessExecutor};
use crate::inspector;
use crate::monitor::{ArrangementCommand, DisplaySnapshot};

/// The two things the daemon needs from the display subsystem.
pub trait DisplayBackend {
    /// Report connected and active outputs.
    fn probe(&mut self) -> Result<DisplaySnapshot, ProbeError>;

    /// Apply a layout, blocking until the tool exits.
    fn arrange(&mut self, command: &ArrangementCommand) -> Result<ExecStatus, ProcessError>;
}

/// Backend that shells out to `xrandr`
#[derive(Debug, Clone)]
pub struct XrandrBackend {
    executor: ProcessExecutor,
}

impl XrandrBackend {
    pub fn new(command_builder: CommandBuilder) -> Self {
        Self {
            executor: ProcessExecutor::new(command_builder),
        }
    }

    pub fn discover() -> Self {
        Self::new(CommandBuilder::discover())
    }
}

impl DisplayBackend for XrandrBackend {
    fn probe(&mut self) -> Result<DisplaySnapshot, ProbeError> {
        let connected = inspector::list_connected(&self.executor)?;
        let active = inspector::list_active(&self.executor)?;
        Ok(DisplaySnapshot { connected, active })
    }

    fn arrange(&mut self, command: &ArrangementCommand) -> Result<ExecStatus, ProcessError> {
        self.executor.run_arrangement(command)
    }
}
