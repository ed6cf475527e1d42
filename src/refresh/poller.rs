//! Timer-driven background refresh.
//!
//! A [`RefreshLoop`] owns one [`DataSource`] and the [`ViewState`] of the view
//! fed by it. The initial load is visible (spinner, error message); background
//! refreshes are silent. They replace the data only when it differs, and on
//! failure they keep what is displayed. A [`FetchGate`] keeps at most one fetch
//! outstanding per loop, so ticks that arrive while a fetch is pending are
//! dropped rather than queued.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::ViewKind;

use super::gate::{FetchGate, FetchPhase};
use super::state::{ViewAction, ViewState};

/// A remote source a view polls.
pub trait DataSource: Send + Sync + 'static {
    /// What one fetch returns.
    type Data: Clone + PartialEq + Send + Sync + 'static;

    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Fetches a fresh snapshot.
    fn fetch(&self) -> impl Future<Output = EngineResult<Self::Data>> + Send;
}

/// What a single background refresh did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New data replaced the displayed snapshot.
    Updated,
    /// The source returned data identical to the displayed snapshot.
    Unchanged,
    /// Another fetch was in flight; nothing was requested.
    Skipped,
    /// The fetch failed; the displayed snapshot was kept.
    Failed,
    /// The loop was stopped; any result was thrown away.
    Discarded,
}

struct Shared<S: DataSource> {
    view: ViewKind,
    source: S,
    gate: FetchGate,
    active: Arc<AtomicBool>,
    state: watch::Sender<ViewState<S::Data>>,
}

/// Polls a data source on behalf of one view.
///
/// Cloning is cheap and every clone drives the same state.
pub struct RefreshLoop<S: DataSource> {
    shared: Arc<Shared<S>>,
}

impl<S: DataSource> Clone for RefreshLoop<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S: DataSource> RefreshLoop<S> {
    /// Creates an active loop with an empty view state.
    pub fn new(view: ViewKind, source: S) -> Self {
        let (state, _) = watch::channel(ViewState::new(view));
        Self {
            shared: Arc::new(Shared {
                view,
                source,
                gate: FetchGate::new(),
                active: Arc::new(AtomicBool::new(true)),
                state,
            }),
        }
    }

    /// The view this loop feeds.
    pub fn view(&self) -> ViewKind {
        self.shared.view
    }

    /// The polled source.
    pub fn source(&self) -> &S {
        &self.shared.source
    }

    /// Receives every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<S::Data>> {
        self.shared.state.subscribe()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ViewState<S::Data> {
        self.shared.state.borrow().clone()
    }

    /// Whether a fetch is outstanding.
    pub fn phase(&self) -> FetchPhase {
        self.shared.gate.phase()
    }

    /// False once the loop has been stopped. Stopping is permanent.
    pub fn is_active(&self) -> bool {
        self.shared.active.load(Ordering::Acquire)
    }

    /// Applies an action to the view state.
    ///
    /// Subscribers are notified only when the reducer reports a change.
    /// Returns whether it did.
    pub fn apply(&self, action: ViewAction<S::Data>) -> bool {
        let now = Utc::now();
        self.shared
            .state
            .send_if_modified(|state| match state.reduce(action, now) {
                Some(next) => {
                    *state = next;
                    true
                }
                None => false,
            })
    }

    /// Performs the visible initial load.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FetchInFlight`] if a fetch is already pending,
    /// or the source's error, which is also recorded in the view state.
    pub async fn initial_load(&self) -> EngineResult<()> {
        let view = self.shared.view;
        let Some(_guard) = self.shared.gate.try_begin() else {
            return Err(EngineError::FetchInFlight {
                view: view.to_string(),
            });
        };

        self.apply(ViewAction::LoadStarted);
        info!(view = %view, source = self.shared.source.name(), "Initial load started");

        let result = self.shared.source.fetch().await;
        if !self.is_active() {
            debug!(view = %view, "Loop stopped during initial load, discarding result");
            return Ok(());
        }

        match result {
            Ok(data) => {
                self.apply(ViewAction::Loaded(data));
                Ok(())
            }
            Err(error) => {
                warn!(
                    view = %view,
                    source = self.shared.source.name(),
                    error = %error,
                    "Initial load failed"
                );
                self.apply(ViewAction::LoadFailed(error.to_string()));
                Err(error)
            }
        }
    }

    /// Performs one silent background refresh.
    pub async fn background_refresh(&self) -> RefreshOutcome {
        let view = self.shared.view;
        if !self.is_active() {
            return RefreshOutcome::Discarded;
        }
        let Some(_guard) = self.shared.gate.try_begin() else {
            debug!(view = %view, "Fetch in flight, dropping refresh tick");
            return RefreshOutcome::Skipped;
        };

        let result = self.shared.source.fetch().await;
        if !self.is_active() {
            debug!(view = %view, "Loop stopped, discarding fetch result");
            return RefreshOutcome::Discarded;
        }

        match result {
            Ok(data) => {
                if self.apply(ViewAction::BackgroundLoaded(data)) {
                    debug!(view = %view, "View data changed");
                    RefreshOutcome::Updated
                } else {
                    RefreshOutcome::Unchanged
                }
            }
            Err(error) => {
                warn!(
                    view = %view,
                    source = self.shared.source.name(),
                    error = %error,
                    "Background refresh failed, keeping previous data"
                );
                self.apply(ViewAction::BackgroundFailed(error.to_string()));
                RefreshOutcome::Failed
            }
        }
    }

    /// Starts polling every `period`; the first tick fires one period from now.
    ///
    /// Each tick runs [`RefreshLoop::background_refresh`] on its own task so a
    /// slow fetch never delays the timer. Missed ticks are skipped.
    pub fn start(&self, period: Duration) -> RefreshHandle {
        let period = period.max(Duration::from_millis(1));
        let view = self.shared.view;
        info!(view = %view, interval = ?period, "Starting refresh loop");

        let refresh = self.clone();
        let ticker = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let tick = refresh.clone();
                tokio::spawn(async move {
                    tick.background_refresh().await;
                });
            }
        });

        RefreshHandle {
            view,
            active: Arc::clone(&self.shared.active),
            ticker,
        }
    }
}

/// Keeps a started loop polling. Dropping it stops the loop.
#[derive(Debug)]
pub struct RefreshHandle {
    view: ViewKind,
    active: Arc<AtomicBool>,
    ticker: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stops the timer. A fetch already in flight completes but its result is
    /// discarded.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if self.active.swap(false, Ordering::AcqRel) {
            info!(view = %self.view, "Stopping refresh loop");
        }
        self.ticker.abort();
    }
}
