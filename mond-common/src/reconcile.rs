//! Turns the connected monitor set and the configured layout into the
//! arrangement command to issue.

use crate::docking::{docked_monitors, is_docked};
use crate::monitor::{ArrangementCommand, Directive, MonitorConfigEntry, MonitorName, Role};

/// Compute the desired layout for the currently connected outputs.
///
/// When fully docked every connected output is eligible; otherwise only the
/// connected outputs flagged `docked` are. Eligible outputs are chained left
/// to right in configuration order, each placed to the right of the entry
/// configured just before it. The first eligible entry becomes primary and
/// every other configured entry is switched off.
pub fn reconcile(connected: &[MonitorName], config: &[MonitorConfigEntry]) -> ArrangementCommand {
    let valid = if is_docked(connected, config) {
        connected.to_vec()
    } else {
        docked_monitors(connected, config)
    };
    log::debug!("Valid monitors: {:?}", valid);

    let Some(first) = config.first() else {
        return ArrangementCommand::default();
    };

    let mut directives = Vec::with_capacity(config.len());
    let mut last = first.name.clone();
    let mut enabled = 0usize;

    for entry in config {
        if valid.contains(&entry.name) {
            let role = if enabled == 0 {
                Role::Primary
            } else {
                Role::RightOf(last.clone())
            };
            directives.push(Directive::Enable {
                name: entry.name.clone(),
                role,
            });
            enabled += 1;
        } else {
            directives.push(Directive::Disable {
                name: entry.name.clone(),
            });
        }
        last = entry.name.clone();
    }

    ArrangementCommand::new(directives)
}
