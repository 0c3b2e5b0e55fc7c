//! Run configuration.
//!
//! [`EnclosureConfig`] describes the world to build; [`SimConfig`] describes
//! how the actors are paced once it runs.  Both are plain data, typically
//! filled from command-line arguments by the application crate.

use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Smallest accepted width/height: a border ring plus one cell per third.
pub const MIN_DIMENSION: i32 = 5;

/// Largest accepted `width * height`.  Keeps every cell index, and every
/// agent ID, well inside `i32`/`u32` arithmetic.
pub const MAX_CELLS: i64 = 1 << 22;

// ── EnclosureConfig ───────────────────────────────────────────────────────────

/// Dimensions, population, and seed for one enclosure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnclosureConfig {
    /// Grid width including the border ring.  `(width - 2) % 3 == 0`.
    pub width: i32,

    /// Grid height including the border ring.  `(height - 2) % 3 == 0`.
    pub height: i32,

    /// Sheep placed in the inner zone.
    pub sheep: usize,

    /// Dogs placed in the interior outside the inner zone.
    pub dogs: usize,

    /// Master seed for gate placement, agent placement, and per-agent RNGs.
    pub seed: u64,
}

impl EnclosureConfig {
    /// Width of one third of the interior.
    #[inline]
    pub fn zone_width(&self) -> i32 {
        (self.width - 2) / 3
    }

    /// Height of one third of the interior.
    #[inline]
    pub fn zone_height(&self) -> i32 {
        (self.height - 2) / 3
    }

    /// Cells available to sheep at placement time (the inner zone).
    pub fn inner_capacity(&self) -> usize {
        (self.zone_width().max(0) as usize) * (self.zone_height().max(0) as usize)
    }

    /// Cells available to dogs at placement time (interior minus inner zone).
    pub fn outer_capacity(&self) -> usize {
        let interior = ((self.width - 2).max(0) as usize) * ((self.height - 2).max(0) as usize);
        interior.saturating_sub(self.inner_capacity())
    }

    /// Check every construction precondition.
    ///
    /// Runs before any cell is allocated, so a rejected config never leaves a
    /// half-built enclosure behind.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, dim) in [("width", self.width), ("height", self.height)] {
            if dim < MIN_DIMENSION {
                return Err(CoreError::Config(format!(
                    "{name} {dim} is below the minimum of {MIN_DIMENSION}"
                )));
            }
            if (dim - 2) % 3 != 0 {
                return Err(CoreError::Config(format!(
                    "{name} {dim} must be a multiple of 3 plus 2 (e.g. 8, 11, 14)"
                )));
            }
        }
        let cells = i64::from(self.width) * i64::from(self.height);
        if cells > MAX_CELLS {
            return Err(CoreError::Config(format!(
                "{}x{} enclosure has {cells} cells, above the limit of {MAX_CELLS}",
                self.width, self.height
            )));
        }
        if self.sheep > self.inner_capacity() {
            return Err(CoreError::Config(format!(
                "{} sheep do not fit in the {}-cell inner zone",
                self.sheep,
                self.inner_capacity()
            )));
        }
        if self.dogs > self.outer_capacity() {
            return Err(CoreError::Config(format!(
                "{} dogs do not fit in the {}-cell outer interior",
                self.dogs,
                self.outer_capacity()
            )));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Pacing for the agent and render threads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Sleep before each agent tick.  Pacing only; correctness never depends
    /// on it.
    pub tick_interval: Duration,

    /// Sleep between rendered frames.  Must be non-zero.
    pub frame_interval: Duration,

    /// Ticks each agent runs before stopping on its own.  `None` runs until a
    /// sheep escapes.
    pub tick_limit: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval:  Duration::from_millis(200),
            frame_interval: Duration::from_millis(200),
            tick_limit:     None,
        }
    }
}
