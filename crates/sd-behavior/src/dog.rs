//! Dogs wander.

use sd_core::{AgentRng, Pos, Step};

use crate::{BehaviorModel, Proximity, keep_moving};

/// Uniform random walk over the eight neighbours.
///
/// `dx` and `dy` are drawn independently from `{-1, 0, 1}`; a `(0, 0)` draw
/// is replaced via [`keep_moving`].  Where a dog may *not* go (the inner
/// zone, gates) is enforced by the enclosure, not here.
#[derive(Copy, Clone, Debug, Default)]
pub struct DogBehavior;

impl BehaviorModel for DogBehavior {
    fn propose(&self, _at: Pos, _world: &dyn Proximity, rng: &mut AgentRng) -> Step {
        let step = Step::new(rng.unit_delta(), rng.unit_delta());
        keep_moving(step, rng)
    }
}
