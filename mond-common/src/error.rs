use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mond operations
#[derive(Error, Debug)]
pub enum MondError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Display probe error: {0}")]
    Probe(#[from] ProbeError),

    #[error("Process execution error: {0}")]
    Process(#[from] ProcessError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration file: {path:?}")]
    FileRead { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse JSON configuration {path:?}: {message}")]
    JsonParse { path: PathBuf, message: String },

    #[error("Monitor '{name}' is configured more than once")]
    DuplicateName { name: String },

    #[error("Configuration entry {index} has an empty monitor name")]
    BlankName { index: usize },

    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Failures while asking the display subsystem which outputs exist
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Failed to run probe command: {command}")]
    Spawn { command: String, source: std::io::Error },

    #[error("{command} returned {code} during execution")]
    NonZeroExit { command: String, code: i32, stderr: String },
}

/// Process execution errors
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Command execution failed: {command}")]
    Execution { command: String, source: std::io::Error },
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid duration: {duration}")]
    InvalidDuration { duration: String },
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, MondError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::JsonParse {
            path: PathBuf::new(),
            message: err.to_string(),
        }
    }
}

// Error reporting utilities
pub trait ErrorReporting {
    fn log_error(&self, context: &str);
    fn user_friendly_message(&self) -> String;
}

impl ErrorReporting for MondError {
    fn log_error(&self, context: &str) {
        log::error!("{}: {}", context, self.user_friendly_message());
    }

    fn user_friendly_message(&self) -> String {
        match self {
            MondError::Config(ConfigError::NotFound { path }) => {
                format!("Configuration file not found at {}", path.display())
            }
            MondError::Config(ConfigError::JsonParse { path, message }) => {
                format!("Encountered an error while loading {}: {}", path.display(), message)
            }
            MondError::Config(ConfigError::NoHomeDir) => {
                "Unable to find HOME environment variable".to_string()
            }
            MondError::Probe(ProbeError::Spawn { command, .. }) => {
                format!("Could not run '{}'. Is xrandr installed and in PATH?", command)
            }
            MondError::Probe(ProbeError::NonZeroExit { command, code, stderr }) if !stderr.trim().is_empty() => {
                format!("{} returned {} during execution: {}", command, code, stderr.trim())
            }
            _ => self.to_string(),
        }
    }
}
