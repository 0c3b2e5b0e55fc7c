//! The smallest unit of shared state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use sd_core::{AgentId, Pos, Species};

/// What a cell currently holds.
///
/// Occupancy and occupant live in one value, so they can never disagree:
/// a `Sheep`/`Dog` tile always names its agent and no other tile does.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Tile {
    Empty,
    Wall,
    Gate,
    Sheep(AgentId),
    Dog(AgentId),
}

impl Tile {
    /// The tile an agent of `species` leaves on the cell it occupies.
    #[inline]
    pub fn occupied_by(species: Species, agent: AgentId) -> Tile {
        match species {
            Species::Sheep => Tile::Sheep(agent),
            Species::Dog   => Tile::Dog(agent),
        }
    }

    /// The occupying agent, if any.
    #[inline]
    pub fn occupant(self) -> Option<AgentId> {
        match self {
            Tile::Sheep(id) | Tile::Dog(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn is_dog(self) -> bool {
        matches!(self, Tile::Dog(_))
    }

    /// Fixed display symbol for unoccupied tiles.  Occupied tiles render as
    /// their occupant's label, which only the enclosure roster knows.
    pub fn terrain_symbol(self) -> Option<&'static str> {
        match self {
            Tile::Empty => Some(" "),
            Tile::Wall  => Some("#"),
            Tile::Gate  => Some("G"),
            Tile::Sheep(_) | Tile::Dog(_) => None,
        }
    }
}

/// One grid cell: an immutable coordinate plus its lock-guarded tile.
#[derive(Debug)]
pub struct Cell {
    pos:  Pos,
    tile: Mutex<Tile>,
}

impl Cell {
    pub(crate) fn new(pos: Pos, tile: Tile) -> Self {
        Self { pos, tile: Mutex::new(tile) }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Block until this cell's lock is held.
    ///
    /// A poisoned lock is recovered rather than propagated: the tile is a
    /// single `Copy` value, so a thread that panicked while holding the
    /// guard cannot have left it half-written.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, Tile> {
        self.tile.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Point-in-time copy of the tile, taken under the cell's lock.
    #[inline]
    pub fn read(&self) -> Tile {
        *self.lock()
    }
}
