//! `sd-grid`: the shared enclosure grid and its move protocol.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`cell`]        | `Tile` (what a cell holds), `Cell` (tile + its own lock)   |
//! | [`zone`]        | `Zones` geometry (bounds, border, inner refuge), `Side`    |
//! | [`agent`]       | `Agent` (actor-owned token handle), `AgentInfo` (roster)   |
//! | [`game_over`]   | `GameOver` one-shot latch, `Escape` record                 |
//! | [`enclosure`]   | `Enclosure`: `try_move`, `is_dog_nearby`, `snapshot`, `census` |
//! | [`builder`]     | `EnclosureBuilder` (validated construction + placement)    |
//! | [`snapshot`]    | `Snapshot` (display symbols), `Census` (cell counts)       |
//! | [`error`]       | `GridError`, `GridResult<T>`                               |
//!
//! # Locking discipline
//!
//! Every cell owns one `Mutex<Tile>`.  There is no grid-wide lock.
//!
//! - A cell's tile is only read or written while holding that cell's lock.
//! - No operation holds more than two cell locks.
//! - The only two-lock operation, [`Enclosure::try_move`], takes them in
//!   [`Pos::lock_rank`][sd_core::Pos::lock_rank] order and releases them in
//!   reverse.  Because the rank is a total order over cells, two moves
//!   contending for the same pair always queue in the same order and no
//!   cycle of waiters can form.
//! - Read-side scans (`is_dog_nearby`, `snapshot`, `census`) lock one cell at
//!   a time.  Each observed cell is consistent; the scan as a whole is not
//!   atomic.

pub mod agent;
pub mod builder;
pub mod cell;
pub mod enclosure;
pub mod error;
pub mod game_over;
pub mod snapshot;
pub mod zone;


pub use agent::{Agent, AgentInfo};
pub use builder::EnclosureBuilder;
pub use cell::{Cell, Tile};
pub use enclosure::{BlockReason, Enclosure, MoveOutcome};
pub use error::{GridError, GridResult};
pub use game_over::{Escape, GameOver};
pub use snapshot::{Census, Snapshot};
pub use zone::{Side, Zones};
