//! Docked/undocked classification of the connected monitor set.

use crate::monitor::{MonitorConfigEntry, MonitorName};

/// True when the connected set matches the configured layout exactly: every
/// connected output is configured and the counts agree.
pub fn is_docked(connected: &[MonitorName], config: &[MonitorConfigEntry]) -> bool {
    let all_configured = connected
        .iter()
        .all(|monitor| config.iter().any(|entry| &entry.name == monitor));

    all_configured && connected.len() == config.len()
}

/// Connected outputs whose configuration entry is flagged `docked`, in the
/// order they were reported.
pub fn docked_monitors(connected: &[MonitorName], config: &[MonitorConfigEntry]) -> Vec<MonitorName> {
    connected
        .iter()
        .filter(|monitor| {
            config
                .iter()
                .any(|entry| entry.docked && &entry.name == *monitor)
        })
        .cloned()
        .collect()
}
