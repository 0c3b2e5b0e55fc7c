//! One-shot end-of-game latch.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use sd_core::{AgentId, Pos};

/// The sheep that ended the game, and where.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Escape {
    pub agent: AgentId,
    pub label: String,
    /// Last cell the sheep occupied.
    pub from:  Pos,
    /// The gate it went through.
    pub gate:  Pos,
}

impl std::fmt::Display for Escape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sheep {} escaped through the gate at {}", self.label, self.gate)
    }
}

/// Monotonic game-over flag plus the first recorded winner.
///
/// The flag starts `false`, is raised at most once in effect, and is never
/// lowered.  Readers poll it without any cell lock.
#[derive(Debug, Default)]
pub struct GameOver {
    over:   AtomicBool,
    winner: OnceLock<Escape>,
}

impl GameOver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock-free read of the flag.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.over.load(Ordering::Acquire)
    }

    /// The first sheep to escape, once there is one.
    #[inline]
    pub fn winner(&self) -> Option<&Escape> {
        self.winner.get()
    }

    /// Record `escape` and raise the flag.
    ///
    /// Returns `true` only for the first caller; a sheep escaping in the
    /// window before other actors observe the flag leaves the recorded
    /// winner untouched.  The winner is stored before the flag is raised, so
    /// any reader that sees `is_over()` also sees `winner()`.
    pub(crate) fn declare(&self, escape: Escape) -> bool {
        let first = self.winner.set(escape).is_ok();
        self.over.store(true, Ordering::Release);
        first
    }
}
