//! `sd-sim`: runs an enclosure with one thread per agent.
//!
//! # Actor layout
//!
//! ```text
//! caller thread (render actor)          agent threads (one per agent)
//! ─────────────────────────────         ─────────────────────────────
//! on_start(snapshot)                    loop:
//! spawn agents ───────────────────────►   sleep(tick_interval)
//! loop until over or none live:           stop if game over / tick limit
//!   on_frame(n, snapshot)                 step = species.propose(..)
//!   sleep(frame_interval)                 enclosure.try_move(agent, pos + step)
//! join all ◄──────────────────────────  return (agent, ticks)
//! on_frame(final) / on_escape / on_sim_end
//! ```
//!
//! Agents never share an RNG or a handle; the only shared state is the
//! [`Enclosure`][sd_grid::Enclosure] and two atomics (live count and halt).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sd_core::{EnclosureConfig, SimConfig};
//! use sd_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(enclosure_config, SimConfig::default()).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::SimReport;
pub use sim::Sim;
