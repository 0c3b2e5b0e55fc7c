//! The enclosure: cell array, roster, game-over latch, and move protocol.

use std::sync::MutexGuard;

use sd_core::{Axis, Pos, Species};
use tracing::info;

use crate::{Agent, AgentInfo, Cell, Census, Escape, GameOver, Snapshot, Tile, Zones};

// ── Move results ──────────────────────────────────────────────────────────────

/// Why a move was refused.  None of these are errors: the agent simply
/// stays where it is this tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BlockReason {
    /// Target lies outside the grid.  No lock was taken.
    OutOfBounds,
    /// Target is the agent's own cell.  No lock was taken.
    SelfTarget,
    /// The agent's token is not on the cell its handle names.
    Displaced,
    Wall,
    /// Another sheep or dog holds the target.
    Occupied,
    /// A dog tried to enter the inner zone.
    Refuge,
    /// A dog tried to step onto a gate.
    ///
    /// Stricter than the plain wall/occupied/refuge rules, which would let a
    /// dog stand on a gate: a dog leaving a gate would clear it to `Empty`
    /// and the border would lose its one gate per side.
    GateClosedToDogs,
}

/// Result of [`Enclosure::try_move`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// Token moved; the agent's position now names the target.
    Moved,
    /// A sheep reached a gate.  The game-over flag is raised; no cell changed.
    Escaped,
    Blocked(BlockReason),
}

impl MoveOutcome {
    /// `true` for `Moved` and `Escaped`.
    #[inline]
    pub fn is_success(self) -> bool {
        !matches!(self, MoveOutcome::Blocked(_))
    }
}

// ── Lock pair ─────────────────────────────────────────────────────────────────

/// Guards for the two cells of a move, acquired in lock-rank order.
///
/// Fields drop in declaration order, so `second` is released before
/// `first` on every exit path.
struct LockedPair<'a> {
    second:       MutexGuard<'a, Tile>,
    first:        MutexGuard<'a, Tile>,
    source_first: bool,
}

impl<'a> LockedPair<'a> {
    fn acquire(source: &'a Cell, target: &'a Cell) -> Self {
        let source_first = source.pos().lock_rank() < target.pos().lock_rank();
        let (lo, hi) = if source_first { (source, target) } else { (target, source) };
        let first = lo.lock();
        let second = hi.lock();
        Self { second, first, source_first }
    }

    fn source(&mut self) -> &mut Tile {
        if self.source_first { &mut *self.first } else { &mut *self.second }
    }

    fn target(&mut self) -> &mut Tile {
        if self.source_first { &mut *self.second } else { &mut *self.first }
    }
}

/// What validation decided the mover may do with the target cell.
enum Admission {
    Step,
    Escape,
}

// ── Enclosure ─────────────────────────────────────────────────────────────────

/// The shared grid.  `Sync`: every actor holds `&Enclosure` and all
/// mutation goes through per-cell locks.
///
/// Build one with [`EnclosureBuilder`][crate::EnclosureBuilder].
#[derive(Debug)]
pub struct Enclosure {
    pub(crate) zones:     Zones,
    /// Row-major, `zones.cell_count()` long.
    pub(crate) cells:     Vec<Cell>,
    pub(crate) roster:    Vec<AgentInfo>,
    /// One per side, in [`Side::ALL`][crate::Side::ALL] order.
    pub(crate) gates:     [Pos; 4],
    pub(crate) game_over: GameOver,
}

impl Enclosure {
    // ── Geometry and bookkeeping ──────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.zones.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.zones.height
    }

    #[inline]
    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    /// Gate positions, one per side: top, bottom, left, right.
    #[inline]
    pub fn gates(&self) -> [Pos; 4] {
        self.gates
    }

    /// Every agent ever placed, indexed by `AgentId`.
    #[inline]
    pub fn roster(&self) -> &[AgentInfo] {
        &self.roster
    }

    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        self.zones.index(pos).map(|i| &self.cells[i])
    }

    /// Locked point read of one cell.
    pub fn tile_at(&self, pos: Pos) -> Option<Tile> {
        self.cell(pos).map(Cell::read)
    }

    // ── Game-over latch ───────────────────────────────────────────────────

    #[inline]
    pub fn game_over(&self) -> &GameOver {
        &self.game_over
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.game_over.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<&Escape> {
        self.game_over.winner()
    }

    // ── Move protocol ─────────────────────────────────────────────────────

    /// Try to move `agent` to `target`.
    ///
    /// 1. Out-of-bounds or self targets are refused before any lock is taken.
    /// 2. The source and target locks are acquired in lock-rank order.
    /// 3. The target is re-validated under both locks: walls and occupied
    ///    cells refuse everyone; dogs are also refused the refuge and gates.
    /// 4. A sheep reaching a gate raises the game-over flag while both locks
    ///    are held and leaves every cell unchanged.
    /// 5. Otherwise the source is cleared, the target takes the agent's
    ///    tile, and `agent.pos` is updated, all before the locks drop.
    pub fn try_move(&self, agent: &mut Agent, target: Pos) -> MoveOutcome {
        let source = agent.pos;
        let Some(target_cell) = self.cell(target) else {
            return MoveOutcome::Blocked(BlockReason::OutOfBounds);
        };
        if target == source {
            return MoveOutcome::Blocked(BlockReason::SelfTarget);
        }
        let Some(source_cell) = self.cell(source) else {
            return MoveOutcome::Blocked(BlockReason::Displaced);
        };

        let mut pair = LockedPair::acquire(source_cell, target_cell);

        let own_tile = Tile::occupied_by(agent.species, agent.id);
        if *pair.source() != own_tile {
            return MoveOutcome::Blocked(BlockReason::Displaced);
        }

        match self.admit(agent.species, *pair.target(), target) {
            Err(reason) => MoveOutcome::Blocked(reason),
            Ok(Admission::Escape) => {
                let escape = Escape {
                    agent: agent.id,
                    label: agent.label.clone(),
                    from:  source,
                    gate:  target,
                };
                if self.game_over.declare(escape) {
                    info!(sheep = %agent.label, gate = %target, "sheep escaped through a gate");
                }
                MoveOutcome::Escaped
            }
            Ok(Admission::Step) => {
                *pair.source() = Tile::Empty;
                *pair.target() = own_tile;
                agent.pos = target;
                MoveOutcome::Moved
            }
        }
    }

    /// Decide what `species` may do with a cell currently holding `tile`.
    fn admit(&self, species: Species, tile: Tile, target: Pos) -> Result<Admission, BlockReason> {
        match (tile, species) {
            (Tile::Wall, _)                       => Err(BlockReason::Wall),
            (Tile::Sheep(_) | Tile::Dog(_), _)    => Err(BlockReason::Occupied),
            (Tile::Gate, Species::Sheep)          => Ok(Admission::Escape),
            (Tile::Gate, Species::Dog)            => Err(BlockReason::GateClosedToDogs),
            (Tile::Empty, Species::Dog) if self.zones.in_refuge(target) => Err(BlockReason::Refuge),
            (Tile::Empty, _)                      => Ok(Admission::Step),
        }
    }

    // ── Proximity ─────────────────────────────────────────────────────────

    /// `true` if a dog holds any in-bounds cell of the three-cell line
    /// through `at` along `axis`.
    ///
    /// Each cell is locked, inspected, and released before the next; a dog
    /// may enter or leave the line between two of the reads.
    pub fn is_dog_nearby(&self, at: Pos, axis: Axis) -> bool {
        axis.line_through(at)
            .into_iter()
            .filter_map(|pos| self.cell(pos))
            .any(|cell| cell.lock().is_dog())
    }

    // ── Read-side scans ───────────────────────────────────────────────────

    /// Display symbols for every cell, each read under its own lock.
    pub fn snapshot(&self) -> Snapshot {
        let rows = self
            .cells
            .chunks(self.zones.width as usize)
            .map(|row| row.iter().map(|cell| self.symbol(cell.read())).collect())
            .collect();
        Snapshot { width: self.zones.width, height: self.zones.height, rows }
    }

    /// Count every cell by kind, each read under its own lock.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.cells {
            let tile = cell.read();
            match tile {
                Tile::Empty    => census.empty += 1,
                Tile::Wall     => census.walls += 1,
                Tile::Gate     => census.gates += 1,
                Tile::Sheep(_) => census.sheep += 1,
                Tile::Dog(_)   => census.dogs += 1,
            }
            if let Some(id) = tile.occupant() {
                census.occupants.push((id, cell.pos()));
            }
        }
        census
    }

    fn symbol(&self, tile: Tile) -> String {
        match tile.occupant() {
            Some(id) => self
                .roster
                .get(id.index())
                .map_or_else(|| "?".to_owned(), |info| info.label.clone()),
            None => tile.terrain_symbol().unwrap_or(" ").to_owned(),
        }
    }
}
