//! `sd-core`: foundational types for the sheepdog enclosure simulation.
//!
//! This crate is a dependency of every other `sd-*` crate.  It has no `sd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Pos`, `Axis`, `Step`                                 |
//! | [`species`]     | `Species` enum (`Sheep`, `Dog`)                       |
//! | [`config`]      | `EnclosureConfig`, `SimConfig`                        |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (construction)       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod species;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EnclosureConfig, SimConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{Axis, Pos, Step};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use species::Species;
