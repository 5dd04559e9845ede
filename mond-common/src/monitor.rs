use serde::Deserialize;
use std::fmt;

/// Connector name as reported by the display subsystem (e.g. "DP-0", "eDP-1")
pub type MonitorName = String;

/// One entry of the user layout. Entries are ordered left to right.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonitorConfigEntry {
    pub name: MonitorName,
    pub docked: bool,
}

impl MonitorConfigEntry {
    pub fn new(name: impl Into<MonitorName>, docked: bool) -> Self {
        Self {
            name: name.into(),
            docked,
        }
    }
}

/// Placement of an enabled output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Primary,
    RightOf(MonitorName),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Enable { name: MonitorName, role: Role },
    Disable { name: MonitorName },
}

impl Directive {
    pub fn name(&self) -> &str {
        match self {
            Directive::Enable { name, .. } | Directive::Disable { name } => name,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Directive::Enable { .. })
    }

    /// xrandr flags for this output
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["--output".to_string(), self.name().to_string()];
        match self {
            Directive::Enable { role, .. } => {
                args.push("--auto".to_string());
                match role {
                    Role::Primary => args.push("--primary".to_string()),
                    Role::RightOf(other) => {
                        args.push("--right-of".to_string());
                        args.push(other.clone());
                    }
                }
            }
            Directive::Disable { .. } => args.push("--off".to_string()),
        }
        args
    }
}

/// One desired layout: a directive per configured output, in configuration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrangementCommand {
    directives: Vec<Directive>,
}

impl ArrangementCommand {
    pub fn new(directives: Vec<Directive>) -> Self {
        Self { directives }
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn enabled_outputs(&self) -> impl Iterator<Item = &str> {
        self.directives
            .iter()
            .filter(|d| d.is_enabled())
            .map(Directive::name)
    }

    #[cfg(test)]
    pub(crate) fn primary(&self) -> Option<&str> {
        self.directives.iter().find_map(|d| match d {
            Directive::Enable { name, role: Role::Primary } => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn to_args(&self) -> Vec<String> {
        self.directives.iter().flat_map(Directive::to_args).collect()
    }
}

impl fmt::Display for ArrangementCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xrandr")?;
        for arg in self.to_args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What the display subsystem reported in one probe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySnapshot {
    pub connected: Vec<MonitorName>,
    pub active: Vec<MonitorName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_primary_args() {
        let directive = Directive::Enable {
            name: "DP-0".to_string(),
            role: Role::Primary,
        };
        assert_eq!(directive.to_args(), vec!["--output", "DP-0", "--auto", "--primary"]);
    }

    #[test]
    fn test_enable_right_of_args() {
        let directive = Directive::Enable {
            name: "DP-2".to_string(),
            role: Role::RightOf("DP-0".to_string()),
        };
        assert_eq!(
            directive.to_args(),
            vec!["--output", "DP-2", "--auto", "--right-of", "DP-0"]
        );
    }

    #[test]
    fn test_command_display() {
        let cmd = ArrangementCommand::new(vec![
            Directive::Enable { name: "DP-0".to_string(), role: Role::Primary },
            Directive::Disable { name: "HDMI-0".to_string() },
        ]);
        assert_eq!(
            cmd.to_string(),
            "xrandr --output DP-0 --auto --primary --output HDMI-0 --off"
        );
        assert_eq!(cmd.primary(), Some("DP-0"));
        assert_eq!(cmd.enabled_outputs().collect::<Vec<_>>(), vec!["DP-0"]);
    }

    #[test]
    fn test_config_entry_json() {
        let entry: MonitorConfigEntry =
            serde_json::from_str(r#"{"name": "DP-0", "docked": true}"#).unwrap();
        assert_eq!(entry, MonitorConfigEntry::new("DP-0", true));
    }
}
