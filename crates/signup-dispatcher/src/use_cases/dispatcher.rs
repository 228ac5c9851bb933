//! Run lifecycle: one sequential, cancellable dispatch loop at a time.
//!
//! ```text
//! Idle ──start──► Running ──(count reached)──► Idle(completed)
//!                    │
//!                    └────────stop───────────► Idle(stopped)
//! ```
//!
//! Each iteration issues exactly one request and then waits the configured
//! delay. Both waits race against the run's [`CancellationToken`], so a stop
//! aborts the in-flight request and skips the remaining delay.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::config::DispatcherSettings;
use crate::entities::{
    LogEntry, RunConfig, RunState, RunStatus, Severity, SignupRequest, TerminalStatus,
};
use crate::error::DispatchError;
use crate::use_cases::event_log::EventLog;
use crate::use_cases::ports::RequestExecutor;

const RUN_STARTED: &str = "--- sending started ---";
const RUN_FINISHED: &str = "--- sending finished ---";
const STOP_REQUESTED: &str = "stop requested";
const STOPPED_EARLY: &str = "sending was stopped";

struct Inner {
    state: RunState,
    /// Set while a dispatch loop owns the state, including the short drain after a stop
    active: bool,
    cancel: Option<CancellationToken>,
    log: EventLog,
    status: Option<TerminalStatus>,
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owned by a running `start` future; returns the dispatcher to idle if that
/// future is dropped before the loop finishes.
struct RunGuard<'a> {
    inner: &'a Mutex<Inner>,
    token: CancellationToken,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.token.cancel();

        let mut inner = lock(self.inner);
        if !inner.active {
            return;
        }
        inner.state.is_running = false;
        inner.active = false;
        inner.cancel = None;
        inner.log.record(RUN_FINISHED, Severity::Info);
        inner.status = Some(TerminalStatus::Stopped);
        tracing::debug!(sent = inner.state.sent_count, "run dropped before finishing");
    }
}

/// Drives runs of signup submissions through a [`RequestExecutor`].
///
/// Share it behind an `Arc` so a stop can be issued while [`Dispatcher::start`]
/// is being awaited elsewhere.
pub struct Dispatcher<E> {
    executor: E,
    settings: DispatcherSettings,
    inner: Mutex<Inner>,
}

impl<E: RequestExecutor> Dispatcher<E> {
    pub fn new(executor: E) -> Self {
        Self::with_settings(executor, DispatcherSettings::default())
    }

    pub fn with_settings(executor: E, settings: DispatcherSettings) -> Self {
        Self {
            executor,
            settings,
            inner: Mutex::new(Inner {
                state: RunState::default(),
                active: false,
                cancel: None,
                log: EventLog::new(),
                status: None,
            }),
        }
    }

    /// Start action fed with raw operator input.
    ///
    /// An invalid count is reported through [`Dispatcher::status`] and the run
    /// never starts. A start while a run is active is reported only through the
    /// returned [`DispatchError::AlreadyRunning`]; the status slot belongs to
    /// the active run and is left alone.
    pub async fn on_start(&self, email: &str, count: &str) -> Result<RunStatus, DispatchError> {
        if self.lock().active {
            return Err(DispatchError::AlreadyRunning);
        }

        let config = match RunConfig::from_input(email, count) {
            Ok(config) => config,
            Err(err) => {
                self.lock().status = Some(TerminalStatus::ValidationError(err.to_string()));
                return Err(err);
            }
        };

        self.start(config).await
    }

    /// Stop action
    pub fn on_stop(&self) {
        self.stop();
    }

    /// Run `config` to completion or until [`Dispatcher::stop`] is called.
    ///
    /// Fails with [`DispatchError::AlreadyRunning`], without touching any state,
    /// if a run is already active.
    ///
    /// Dropping the returned future mid-run cancels the in-flight request and
    /// leaves the dispatcher idle with a `stopped` status.
    pub async fn start(&self, config: RunConfig) -> Result<RunStatus, DispatchError> {
        let run_token = {
            let mut inner = self.lock();
            if inner.active {
                return Err(DispatchError::AlreadyRunning);
            }

            let token = CancellationToken::new();
            inner.state = RunState::started();
            inner.active = true;
            inner.cancel = Some(token.clone());
            inner.status = None;
            inner.log.clear();
            inner.log.record(RUN_STARTED, Severity::Info);
            token
        };
        let _guard = RunGuard {
            inner: &self.inner,
            token: run_token.clone(),
        };

        let total = config.total_count().get();
        let request = SignupRequest::new(config.target());
        tracing::debug!(email = config.target(), total, "run started");

        loop {
            let sequence = {
                let mut inner = self.lock();
                inner.state.sent_count += 1;
                let sent = inner.state.sent_count;
                inner.log.record(format!("send #{sent}/{total}..."), Severity::Info);

                if !inner.state.is_running {
                    inner.log.record(STOPPED_EARLY, Severity::Info);
                    break;
                }
                sent
            };

            // The child token lives for this iteration only.
            let outcome = self.executor.send(&request, run_token.child_token()).await;
            tracing::debug!(
                sequence,
                kind = ?outcome.kind,
                status = ?outcome.status_code,
                "request resolved"
            );
            self.lock()
                .log
                .record(outcome.log_line(config.target()), outcome.severity());

            let delay = time::sleep(self.settings.delay);
            tokio::pin!(delay);
            select! {
                _ = &mut delay => {}
                _ = run_token.cancelled() => {}
            }

            let keep_going = {
                let inner = self.lock();
                inner.state.is_running && inner.state.sent_count < total
            };
            if !keep_going {
                break;
            }
        }

        let status = {
            let mut inner = self.lock();
            inner.state.is_running = false;
            inner.active = false;
            inner.cancel = None;
            inner.log.record(RUN_FINISHED, Severity::Info);

            let status = if inner.state.sent_count >= total {
                RunStatus::Completed
            } else {
                RunStatus::Stopped
            };
            inner.status = Some(status.into());
            tracing::debug!(sent = inner.state.sent_count, total, %status, "run finished");
            status
        };

        Ok(status)
    }

    /// Request the active run to end.
    ///
    /// Cancels the in-flight request, if any. No-op while idle.
    pub fn stop(&self) {
        let mut inner = self.lock();
        if !inner.state.is_running {
            return;
        }

        inner.state.is_running = false;
        if let Some(token) = inner.cancel.take() {
            token.cancel();
        }
        inner.log.record(STOP_REQUESTED, Severity::Info);
    }

    pub fn is_running(&self) -> bool {
        self.lock().state.is_running
    }

    pub fn sent_count(&self) -> u32 {
        self.lock().state.sent_count
    }

    pub fn state(&self) -> RunState {
        self.lock().state
    }

    /// Status message of the last start action, cleared when a run starts
    pub fn status(&self) -> Option<TerminalStatus> {
        self.lock().status.clone()
    }

    /// Log snapshot, newest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().log.entries()
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        lock(&self.inner)
    }
}
