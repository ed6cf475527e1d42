//! Single-flight gate for a refresh loop.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

/// Whether a loop currently has a fetch outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    /// No fetch outstanding; the next tick may start one.
    Idle,
    /// A fetch is outstanding; ticks are dropped until it settles.
    Fetching,
}

/// Allows at most one fetch at a time.
///
/// [`FetchGate::try_begin`] moves `Idle -> Fetching` and hands back a guard;
/// dropping the guard moves back to `Idle`, whether the fetch succeeded,
/// failed or was cancelled.
#[derive(Debug, Default)]
pub struct FetchGate {
    fetching: AtomicBool,
}

impl FetchGate {
    /// Creates an idle gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters `Fetching`, or returns `None` if a fetch is already outstanding.
    pub fn try_begin(&self) -> Option<FetchGuard<'_>> {
        self.fetching
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FetchGuard { gate: self })
    }

    /// Current phase.
    pub fn phase(&self) -> FetchPhase {
        if self.fetching.load(Ordering::Acquire) {
            FetchPhase::Fetching
        } else {
            FetchPhase::Idle
        }
    }
}

/// Returns the gate to `Idle` when dropped.
#[derive(Debug)]
pub struct FetchGuard<'a> {
    gate: &'a FetchGate,
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        self.gate.fetching.store(false, Ordering::Release);
    }
}
