use std::path::{Path, PathBuf};
use std::process::Command;

use crate::monitor::ArrangementCommand;

pub const LIST_ACTIVE_FLAG: &str = "--listactivemonitors";

#[derive(Debug, Clone)]
pub struct CommandBuilder {
    xrandr_path: PathBuf,
}

impl CommandBuilder {
    pub fn new(xrandr_path: PathBuf) -> Self {
        Self { xrandr_path }
    }

    /// Locate xrandr in PATH, falling back to the bare name so the spawn
    /// error names the missing binary.
    pub fn discover() -> Self {
        let xrandr_path = which::which("xrandr").unwrap_or_else(|_| {
            log::warn!("xrandr not found in PATH");
            PathBuf::from("xrandr")
        });
        Self::new(xrandr_path)
    }

    /// `xrandr` with no arguments: the full per-output report
    pub fn build_query_command(&self) -> Command {
        Command::new(&self.xrandr_path)
    }

    /// `xrandr --listactivemonitors`
    pub fn build_list_active_command(&self) -> Command {
        let mut cmd = Command::new(&self.xrandr_path);
        cmd.arg(LIST_ACTIVE_FLAG);
        cmd
    }

    pub fn build_arrange_command(&self, arrangement: &ArrangementCommand) -> Command {
        let mut cmd = Command::new(&self.xrandr_path);
        cmd.args(arrangement.to_args());
        cmd
    }
}

/// Render a command the way it would be typed in a shell, for logs and errors
pub fn describe(cmd: &Command) -> String {
    let program = Path::new(cmd.get_program())
        .file_name()
        .unwrap_or(cmd.get_program())
        .to_string_lossy()
        .to_string();
    std::iter::once(program)
        .chain(cmd.get_args().map(|a| a.to_string_lossy().to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}
