//! The world as a policy may see it.

use sd_core::{Axis, Pos};
use sd_grid::Enclosure;

/// Read-only proximity query handed to every
/// [`BehaviorModel::propose`][crate::BehaviorModel::propose] call.
///
/// Answers are weakly consistent: each probed cell is read under its own
/// lock, but a dog may move between two reads of the same query.  Policies
/// treat the answer as a hint, never as a guarantee.
pub trait Proximity {
    /// `true` if a dog stands on the three-cell line through `at` along
    /// `axis`.
    fn is_dog_nearby(&self, at: Pos, axis: Axis) -> bool;
}

impl Proximity for Enclosure {
    #[inline]
    fn is_dog_nearby(&self, at: Pos, axis: Axis) -> bool {
        Enclosure::is_dog_nearby(self, at, axis)
    }
}
