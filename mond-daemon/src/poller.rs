//! The polling loop: probe → reconcile → apply → sleep, until asked to stop.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mond_common::error::ProbeError;
use mond_common::{
    reconcile, ApplyOutcome, ArrangementCommand, CommandCache, DisplayBackend, ErrorReporting,
    MondError, MonitorConfigEntry, MonitorName,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopping,
    Stopped,
}

/// Cooperative stop flag shared between the loop and whoever wants it to end
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Nothing configured, nothing to arrange
    Idle,
    Applied(ApplyOutcome),
    /// The arrangement tool could not be started
    ArrangeFailed,
}

pub struct Poller<B> {
    backend: B,
    layout: Vec<MonitorConfigEntry>,
    interval: Duration,
    cache: CommandCache,
    stop: StopHandle,
    state: LoopState,
}

impl<B: DisplayBackend> Poller<B> {
    pub fn new(
        backend: B,
        layout: Vec<MonitorConfigEntry>,
        interval: Duration,
        stop: StopHandle,
    ) -> Self {
        Self {
            backend,
            layout,
            interval,
            cache: CommandCache::new(),
            stop,
            state: LoopState::Stopped,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn last_command(&self) -> Option<&ArrangementCommand> {
        self.cache.last()
    }

    /// One probe/reconcile/apply pass. Only a probe failure is an error;
    /// arrangement failures are logged and reported in the outcome.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome, ProbeError> {
        let snapshot = self.backend.probe()?;
        log::debug!("Monitors: {:?}", snapshot.connected);
        log::debug!("Active Monitors: {:?}", snapshot.active);

        let command = reconcile(&snapshot.connected, &self.layout);
        if command.is_empty() {
            log::debug!("No configured monitors, nothing to arrange");
            return Ok(CycleOutcome::Idle);
        }

        if active_matches(&command, &snapshot.active) {
            log::debug!("Active monitors already match the desired layout");
        }

        match self.cache.apply(&mut self.backend, &command) {
            Ok(ApplyOutcome::Executed(status)) if !status.success() => {
                match status.code {
                    Some(code) => log::error!("'{}' returned {}", command, code),
                    None => log::error!("'{}' was terminated by a signal", command),
                }
                Ok(CycleOutcome::Applied(ApplyOutcome::Executed(status)))
            }
            Ok(outcome) => Ok(CycleOutcome::Applied(outcome)),
            Err(e) => {
                MondError::from(e).log_error("Failed to apply layout");
                Ok(CycleOutcome::ArrangeFailed)
            }
        }
    }

    /// Poll until the stop handle is triggered or probing fails. The stop
    /// flag is checked after each sleep; a cycle in progress always completes.
    pub async fn run(&mut self) {
        log::info!("mond started");
        self.state = LoopState::Running;

        while self.state == LoopState::Running {
            if let Err(e) = self.run_cycle() {
                MondError::from(e).log_error("Probing displays failed");
                log::error!("quitting...");
                self.state = LoopState::Stopped;
                return;
            }

            tokio::time::sleep(self.interval).await;

            if self.stop.is_stop_requested() {
                self.state = LoopState::Stopping;
            }
        }

        log::info!("mond stopping");
        self.state = LoopState::Stopped;
    }
}

/// Whether the outputs the display subsystem reports as active are exactly
/// the ones `command` enables.
fn active_matches(command: &ArrangementCommand, active: &[MonitorName]) -> bool {
    let enabled: HashSet<&str> = command.enabled_outputs().collect();
    let active: HashSet<&str> = active.iter().map(String::as_str).collect();
    enabled == active
}
