use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use mond_common::ErrorReporting;

#[derive(Parser, Debug)]
#[command(name = "mond")]
#[command(about = "mond (monitor layout daemon)")]
#[command(version)]
pub struct Cli {
    /// Run in the background (requires --log)
    #[arg(short, long, requires = "log")]
    pub daemon: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write log records to this file instead of stderr
    #[arg(short, long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Polling interval: seconds, or a duration such as "500ms" or "2s"
    #[arg(short, long, value_name = "INTERVAL", default_value = "5", value_parser = parse_interval_arg)]
    pub timeout: Duration,

    /// Read the layout from this file instead of ~/.config/mond/config.json
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn parse_interval_arg(value: &str) -> Result<Duration, String> {
    mond_common::parse_interval(value).map_err(|e| e.user_friendly_message())
}

impl Cli {
    /// Arguments for the detached copy of this process: everything except
    /// `--daemon`, with paths made absolute.
    pub fn foreground_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if self.verbose {
            args.push("--verbose".into());
        }
        if let Some(log) = &self.log {
            args.push("--log".into());
            args.push(absolute(log).into_os_string());
        }
        args.push("--timeout".into());
        args.push(humantime::format_duration(self.timeout).to_string().into());
        if let Some(config) = &self.config {
            args.push("--config".into());
            args.push(absolute(config).into_os_string());
        }
        args
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
