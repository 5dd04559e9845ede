pub mod monitor;
pub mod docking;
pub mod reconcile;
pub mod inspector;
pub mod command_builder;
pub mod executor;
pub mod backend;
pub mod cache;
pub mod duration;
pub mod error;

pub use monitor::{ArrangementCommand, Directive, DisplaySnapshot, MonitorConfigEntry, MonitorName, Role};
pub use docking::{docked_monitors, is_docked};
pub use reconcile::reconcile;
pub use command_builder::CommandBuilder;
pub use executor::{ExecStatus, ProcessExecutor};
pub use backend::{DisplayBackend, XrandrBackend};
pub use cache::{ApplyOutcome, CommandCache};
pub use duration::parse_interval;
pub use error::{MondError, Result, ErrorReporting};
