//! Observer hooks for renderers, loggers, and tests.

use sd_grid::{Escape, Snapshot};

use crate::SimReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// Every hook runs on the thread that called `run`, which doubles as the
/// render actor while the agent threads are live.
///
/// # Example: terminal printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_frame(&mut self, _frame: u64, snapshot: &Snapshot) {
///         print!("\x1b[H{snapshot}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once with the initial grid, before any actor starts.
    fn on_start(&mut self, _snapshot: &Snapshot) {}

    /// Called at the render cadence while the simulation runs, and once more
    /// after every actor has stopped.  `frame` counts from 1.
    fn on_frame(&mut self, _frame: u64, _snapshot: &Snapshot) {}

    /// Called once after all actors have stopped, if a sheep escaped.
    fn on_escape(&mut self, _escape: &Escape) {}

    /// Called once at the very end.
    fn on_sim_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
