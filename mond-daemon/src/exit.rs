use std::process::ExitCode;

use mond_common::error::ConfigError;
use mond_common::MondError;

/// Process exit statuses. Failures inside the polling loop are only logged
/// and never change the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReturnCode {
    Ok = 0,
    ArgumentError = 1,
    ConfigNotFound = 2,
    ConfigError = 3,
    HomeNotFound = 4,
    StartupError = 5,
}

impl ReturnCode {
    /// Exit status for an error raised while loading the configuration
    pub fn for_startup_error(err: &MondError) -> Self {
        match err {
            MondError::Config(ConfigError::NotFound { .. }) => ReturnCode::ConfigNotFound,
            MondError::Config(ConfigError::NoHomeDir) => ReturnCode::HomeNotFound,
            MondError::Config(_) => ReturnCode::ConfigError,
            // Not produced while loading; listed to keep the match exhaustive
            MondError::Validation(_) => ReturnCode::ArgumentError,
            MondError::Probe(_) | MondError::Process(_) => ReturnCode::StartupError,
        }
    }
}

impl From<ReturnCode> for ExitCode {
    fn from(code: ReturnCode) -> Self {
        ExitCode::from(code as u8)
    }
}
