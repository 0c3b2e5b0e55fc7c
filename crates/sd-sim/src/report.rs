//! End-of-run summary.

use std::time::Duration;

use sd_core::AgentId;
use sd_grid::Escape;

/// What a finished [`Sim::run`][crate::Sim::run] observed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    /// The first sheep to escape, if any did.
    pub winner:          Option<Escape>,
    /// Frames handed to the observer, including the final one.
    pub frames:          u64,
    /// Ticks each surviving actor completed, in `AgentId` order.
    pub ticks_per_agent: Vec<(AgentId, u64)>,
    /// Actor threads that panicked.  Their tokens stay on the grid.
    pub panicked_agents: usize,
    /// Wall-clock time from start to the last join.
    pub elapsed:         Duration,
}

impl SimReport {
    pub fn total_ticks(&self) -> u64 {
        self.ticks_per_agent.iter().map(|&(_, n)| n).sum()
    }

    #[inline]
    pub fn escaped(&self) -> bool {
        self.winner.is_some()
    }
}
