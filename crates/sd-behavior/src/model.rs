//! The `BehaviorModel` trait and closed-set dispatch over `Species`.

use sd_core::{AgentRng, Axis, Pos, Species, Step};

use crate::{DogBehavior, Proximity, SheepBehavior};

/// A movement policy.
///
/// Called once per agent per tick.  Implementations read the world only
/// through `world` and draw randomness only from the agent's own `rng`, so
/// two agents never contend for anything while deciding.
///
/// # Example
///
/// ```rust,ignore
/// struct Drift;
///
/// impl BehaviorModel for Drift {
///     fn propose(&self, _at: Pos, _world: &dyn Proximity, _rng: &mut AgentRng) -> Step {
///         Step::new(1, 0)
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Choose this tick's displacement for an agent last seen at `at`.
    ///
    /// The returned step may point at a wall, an occupied cell, or outside
    /// the grid; the enclosure refuses such moves when they are applied.
    fn propose(&self, at: Pos, world: &dyn Proximity, rng: &mut AgentRng) -> Step;
}

/// Each species moves by its own policy.
impl BehaviorModel for Species {
    #[inline]
    fn propose(&self, at: Pos, world: &dyn Proximity, rng: &mut AgentRng) -> Step {
        match self {
            Species::Sheep => SheepBehavior.propose(at, world, rng),
            Species::Dog   => DogBehavior.propose(at, world, rng),
        }
    }
}

/// Turn a zero step into a unit step along one random axis.
///
/// Fair coin for the axis, then a fair coin for the sign.  Non-zero steps
/// pass through untouched.  Every agent attempts to move every tick.
pub fn keep_moving(step: Step, rng: &mut AgentRng) -> Step {
    if !step.is_still() {
        return step;
    }
    let axis = if rng.coin() { Axis::Horizontal } else { Axis::Vertical };
    step.with(axis, rng.sign())
}
