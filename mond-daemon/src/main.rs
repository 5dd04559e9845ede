mod cli;
mod detach;
mod exit;
mod logging;
mod poller;

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use mond_common::{ErrorReporting, XrandrBackend};
use mond_config::Config;
use tokio::signal::unix::{signal, SignalKind};

use crate::cli::Cli;
use crate::exit::ReturnCode;
use crate::poller::{Poller, StopHandle};

fn main() -> ExitCode {
    run().into()
}

fn run() -> ReturnCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also come through here
            let code = if e.use_stderr() { ReturnCode::ArgumentError } else { ReturnCode::Ok };
            let _ = e.print();
            return code;
        }
    };

    if let Err(e) = logging::init(cli.verbose, cli.log.as_deref()) {
        eprintln!("ERROR: {:#}", e);
        return ReturnCode::ArgumentError;
    }

    log::debug!("Starting mond...");

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            e.log_error("Startup failed");
            return ReturnCode::for_startup_error(&e);
        }
    };

    log::info!("Configuration loaded: {} monitors", config.entries().len());

    if cli.daemon {
        // The detached copy reloads the configuration itself; the parent only
        // validated it so startup errors still reach the caller's exit status.
        return match detach::spawn_detached(&cli.foreground_args()) {
            Ok(pid) => {
                log::info!("mond running in the background (pid {})", pid);
                ReturnCode::Ok
            }
            Err(e) => {
                log::error!("Failed to start background process: {:#}", e);
                ReturnCode::StartupError
            }
        };
    }

    match run_foreground(config, cli.timeout) {
        Ok(()) => ReturnCode::Ok,
        Err(e) => {
            log::error!("{:#}", e);
            ReturnCode::StartupError
        }
    }
}

fn load_config(path: Option<&Path>) -> mond_common::Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn run_foreground(config: Config, interval: Duration) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .with_context(|| "Failed to start tokio runtime")?;

    runtime.block_on(async move {
        let stop = StopHandle::new();
        let signal_stop = stop.clone();

        tokio::spawn(async move {
            match wait_for_shutdown().await {
                Ok(()) => {
                    log::info!("Shutdown requested, stopping after the current cycle");
                    signal_stop.request_stop();
                }
                Err(e) => log::warn!("Failed to install signal handlers: {}", e),
            }
        });

        let mut poller = Poller::new(XrandrBackend::discover(), config.monitors, interval, stop);
        poller.run().await;

        if let Some(command) = poller.last_command() {
            log::debug!("Last applied layout: '{}'", command);
        }
        log::debug!("Polling loop finished: {:?}", poller.state());
    });

    Ok(())
}

async fn wait_for_shutdown() -> std::io::Result<()> {
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        _ = terminate.recv() => {}
    }

    Ok(())
}
