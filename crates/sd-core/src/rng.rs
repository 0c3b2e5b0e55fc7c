//! Per-agent and construction-time RNG wrappers.
//!
//! # Seeding
//!
//! Every agent thread owns a `SmallRng` derived from the run seed:
//!
//!   agent_seed = run_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! `MIXING_CONSTANT` is the golden ratio as a 64-bit fraction, so adjacent
//! agent IDs land far apart in seed space.
//!
//! - Agents never share RNG state, so an agent thread draws its random
//!   numbers without touching any shared lock.
//! - A single agent's stream is reproducible from the seed.  A whole run is
//!   not: thread interleaving decides which moves win contended cells.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// Golden-ratio fraction, 2^64 / phi.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent RNG, owned by the agent's thread for the whole run.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed from the run's global seed and an agent ID.
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        let seed = run_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A fair coin.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    /// Uniform draw from `{-1, 0, 1}`.
    #[inline]
    pub fn unit_delta(&mut self) -> i32 {
        self.0.gen_range(-1..=1)
    }

    /// `-1` or `1` with equal probability.
    #[inline]
    pub fn sign(&mut self) -> i32 {
        if self.coin() { 1 } else { -1 }
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// RNG for construction-time decisions (gate positions, agent placement).
///
/// Used only while the enclosure is being built, on a single thread.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
