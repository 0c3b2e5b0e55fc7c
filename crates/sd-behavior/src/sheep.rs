//! Sheep flee.

use sd_core::{AgentRng, Axis, Pos, Step};

use crate::{BehaviorModel, Proximity, keep_moving};

/// Random walk with avoidance.
///
/// Axes are decided independently, horizontal first:
///
/// - dog on the three-cell line along the axis → ±1 on that axis (fair coin);
/// - otherwise → uniform draw from `{-1, 0, 1}`.
///
/// A resulting `(0, 0)` is replaced via [`keep_moving`].
///
/// Fleeing picks a random direction, not the one pointing away from the dog.
/// Over many ticks this still pushes sheep off lines shared with dogs and
/// into open cells, gates included.
#[derive(Copy, Clone, Debug, Default)]
pub struct SheepBehavior;

impl BehaviorModel for SheepBehavior {
    fn propose(&self, at: Pos, world: &dyn Proximity, rng: &mut AgentRng) -> Step {
        let mut step = Step::STILL;
        for axis in Axis::BOTH {
            let delta = if world.is_dog_nearby(at, axis) {
                rng.sign()
            } else {
                rng.unit_delta()
            };
            step = step.with(axis, delta);
        }
        keep_moving(step, rng)
    }
}
