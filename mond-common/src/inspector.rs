//! Queries xrandr for connected and active outputs.
//!
//! The report parsers are pure functions so they can be exercised against
//! captured xrandr output.

use crate::error::ProbeError;
use crate::executor::ProcessExecutor;
use crate::monitor::MonitorName;

/// Outputs marked `connected` in a plain `xrandr` report. The name is the
/// token preceding the marker.
pub fn parse_connected(report: &str) -> Vec<MonitorName> {
    report
        .lines()
        .filter_map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let marker = tokens.iter().position(|t| *t == "connected")?;
            marker.checked_sub(1).map(|i| tokens[i].to_string())
        })
        .collect()
}

/// Outputs listed by `xrandr --listactivemonitors`. Data rows are indented,
/// the header is not; the output name is the last token of a row.
pub fn parse_active(report: &str) -> Vec<MonitorName> {
    report
        .lines()
        .filter(|line| line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_whitespace().last())
        .map(str::to_string)
        .collect()
}

pub fn list_connected(executor: &ProcessExecutor) -> Result<Vec<MonitorName>, ProbeError> {
    let report = executor.run_probe(executor.command_builder().build_query_command())?;
    Ok(parse_connected(&report))
}

pub fn list_active(executor: &ProcessExecutor) -> Result<Vec<MonitorName>, ProbeError> {
    let report = executor.run_probe(executor.command_builder().build_list_active_command())?;
    Ok(parse_active(&report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_builder::CommandBuilder;
    use std::path::PathBuf;

    const QUERY_REPORT: &str = "Screen 0: minimum 8 x 8, current 6400 x 2160, maximum 32767 x 32767
DP-0 connected primary 2560x1440+0+0 (normal left inverted right x axis y axis) 708mm x 399mm
\t2560x1440     59.95*+  74.99
\t1920x1200     59.88
\t1920x1080     60.00    59.94    50.00
DP-1 disconnected (normal left inverted right x axis y axis)
HDMI-0 disconnected (normal left inverted right x axis y axis)
DP-2 connected 3840x2160+2560+0 (normal left inverted right x axis y axis) 697mm x 392mm
\t3840x2160     60.00*+  30.00    29.97
\t2560x1440     59.95
DP-3 disconnected (normal left inverted right x axis y axis)";

    const ACTIVE_REPORT: &str = "Monitors: 2
 0: +*DP-0 2560/708x1440/399+0+0  DP-0
 1: +DP-2 3840/697x2160/392+2560+0  DP-2";

    #[test]
    fn test_parse_connected() {
        assert_eq!(parse_connected(QUERY_REPORT), vec!["DP-0", "DP-2"]);
    }

    #[test]
    fn test_parse_connected_without_mode() {
        // A connected but switched-off output has no geometry on its line
        let report = "eDP-1 connected (normal left inverted right x axis y axis)\nDP-0 disconnected";
        assert_eq!(parse_connected(report), vec!["eDP-1"]);
    }

    #[test]
    fn test_parse_connected_empty_report() {
        assert!(parse_connected("").is_empty());
        assert!(parse_connected("Screen 0: minimum 8 x 8").is_empty());
    }

    #[test]
    fn test_parse_active() {
        assert_eq!(parse_active(ACTIVE_REPORT), vec!["DP-0", "DP-2"]);
    }

    #[test]
    fn test_parse_active_skips_blank_lines() {
        let report = "Monitors: 1\n\n 0: +*eDP-1 1920/344x1080/193+0+0  eDP-1\n   \n";
        assert_eq!(parse_active(report), vec!["eDP-1"]);
    }

    #[test]
    fn test_parse_active_no_monitors() {
        assert!(parse_active("Monitors: 0").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_listing_fails_when_tool_exits_non_zero() {
        let executor = ProcessExecutor::new(CommandBuilder::new(PathBuf::from("false")));

        match list_connected(&executor) {
            Err(ProbeError::NonZeroExit { code, .. }) => assert_eq!(code, 1),
            other => panic!("Expected ProbeError::NonZeroExit, got {:?}", other),
        }
        match list_active(&executor) {
            Err(ProbeError::NonZeroExit { command, code, .. }) => {
                assert_eq!(command, "false --listactivemonitors");
                assert_eq!(code, 1);
            }
            other => panic!("Expected ProbeError::NonZeroExit, got {:?}", other),
        }
    }
}
