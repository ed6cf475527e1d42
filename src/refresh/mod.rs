//! View state and background polling.
//!
//! Every dashboard view keeps its data fresh by polling its source on a fixed
//! interval. This module holds the view-state reducer, the single-flight fetch
//! gate and the tokio-driven refresh loop.

mod gate;
mod poller;
mod state;

pub use gate::{FetchGate, FetchGuard, FetchPhase};
pub use poller::{DataSource, RefreshHandle, RefreshLoop, RefreshOutcome};
pub use state::{LoadStatus, ViewAction, ViewFilters, ViewState};
