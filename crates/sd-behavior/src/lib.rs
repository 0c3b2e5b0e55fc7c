//! `sd-behavior`: per-agent movement policies.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`context`] | `Proximity`: the read-only query a policy may make of the world  |
//! | [`model`]   | `BehaviorModel` trait, `Species` dispatch, `keep_moving` tie-break |
//! | [`sheep`]   | `SheepBehavior`: flee on any axis with a dog, else random walk   |
//! | [`dog`]     | `DogBehavior`: unconditional random walk                         |
//!
//! # Design notes
//!
//! Each tick is split the same way for every agent:
//!
//! 1. **Propose** (this crate): from the agent's last committed position,
//!    proximity reads, and its own RNG, choose a [`Step`][sd_core::Step].
//!    No world state is written.
//! 2. **Apply** (`sd-sim`): hand `pos + step` to
//!    [`Enclosure::try_move`][sd_grid::Enclosure::try_move], which alone
//!    decides whether the move happens.  A refused move is dropped; there
//!    is no retry.
//!
//! Policies hold no per-agent state, so one value serves every agent of a
//! species and the trait only needs `Send + Sync`.

pub mod context;
pub mod dog;
pub mod model;
pub mod sheep;

#[cfg(test)]
mod tests;

pub use context::Proximity;
pub use dog::DogBehavior;
pub use model::{BehaviorModel, keep_moving};
pub use sheep::SheepBehavior;
