//! Fluent builder for constructing a [`Sim`].

use std::time::Duration;

use sd_core::{EnclosureConfig, Pos, SimConfig, Species};
use sd_grid::{EnclosureBuilder, Side};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`EnclosureConfig`]: grid size, agent counts, placement seed.
/// - [`SimConfig`]: tick and frame cadence, optional tick limit.
///
/// # Optional inputs
///
/// | Method          | Default                               |
/// |-----------------|---------------------------------------|
/// | `.gate(s, o)`   | Random non-corner offset on each side |
/// | `.place(s, p)`  | No explicit agents                    |
/// | `.actor_stack_size(n)` | Platform default thread stack  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(enclosure_config, SimConfig::default()).build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    seed:   u64,
    grid:   EnclosureBuilder,
    stack:  Option<usize>,
}

impl SimBuilder {
    pub fn new(enclosure: EnclosureConfig, config: SimConfig) -> Self {
        Self {
            config,
            seed: enclosure.seed,
            grid: EnclosureBuilder::new(enclosure),
            stack: None,
        }
    }

    /// See [`EnclosureBuilder::gate`].
    pub fn gate(mut self, side: Side, offset: i32) -> Self {
        self.grid = self.grid.gate(side, offset);
        self
    }

    /// See [`EnclosureBuilder::place`].
    pub fn place(mut self, species: Species, pos: Pos) -> Self {
        self.grid = self.grid.place(species, pos);
        self
    }

    /// Stack size in bytes for each actor thread.
    pub fn actor_stack_size(mut self, bytes: usize) -> Self {
        self.stack = Some(bytes);
        self
    }

    /// Validate the cadence, build the enclosure, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.config.frame_interval == Duration::ZERO {
            return Err(SimError::Config("frame interval must be non-zero".into()));
        }
        if self.config.tick_limit == Some(0) {
            return Err(SimError::Config("tick limit must be at least 1 when set".into()));
        }

        let (enclosure, agents) = self.grid.build()?;
        Ok(Sim {
            config: self.config,
            seed: self.seed,
            enclosure,
            agents,
            actor_stack_size: self.stack,
        })
    }
}
