//! Periodic refresh loop driving the countdown calculator.
//!
//! One logical timer per target: `start` always cancels the previous worker
//! before spawning a new one, and `stop`/`Drop` join the worker thread so no
//! tick can be published after teardown.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::calculator::{compute, TimeBreakdown};
use super::clock::{Clock, SystemClock};

/// Fixed refresh period of the live countdown.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Drives [`compute`] once immediately and then once per interval,
/// publishing each breakdown to the registered observer.
pub struct RefreshScheduler {
    interval: Duration,
    clock: Arc<dyn Clock>,
    worker: Option<Worker>,
}

struct Worker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_TICK_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self::with_clock(interval, Arc::new(SystemClock))
    }

    pub fn with_clock(interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            interval,
            clock,
            worker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Begin ticking against `target`.
    ///
    /// The observer receives one breakdown immediately and one per interval
    /// thereafter. Any previously running timer is cancelled first, so a
    /// target change can never leave two tickers racing the same observer.
    pub fn start<F>(&mut self, target: DateTime<Utc>, mut observer: F)
    where
        F: FnMut(TimeBreakdown) + Send + 'static,
    {
        self.stop();

        let (stop_tx, stop_rx) = mpsc::channel();
        let clock = Arc::clone(&self.clock);
        let interval = self.interval;

        let handle = std::thread::spawn(move || {
            observer(compute(target, clock.now()));
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => observer(compute(target, clock.now())),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        self.worker = Some(Worker { stop_tx, handle });
    }

    /// Cancel the running timer, if any, and wait for its thread to exit.
    /// Idempotent; safe to call from any state.
    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            // The worker may already have exited; a send failure is fine.
            let _ = worker.stop_tx.send(());
            if worker.handle.join().is_err() {
                log::warn!("countdown refresh worker panicked during shutdown");
            }
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
