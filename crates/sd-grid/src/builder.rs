//! Validated construction of an [`Enclosure`] and its agents.
//!
//! # Usage
//!
//! ```rust
//! use sd_core::EnclosureConfig;
//! use sd_grid::EnclosureBuilder;
//!
//! let config = EnclosureConfig { width: 8, height: 8, sheep: 1, dogs: 1, seed: 42 };
//! let (enclosure, agents) = EnclosureBuilder::new(config).build().unwrap();
//!
//! assert_eq!(enclosure.gates().len(), 4);
//! assert_eq!(agents.len(), 2);
//! ```

use sd_core::{AgentId, CoreError, EnclosureConfig, Pos, SimRng, Species};
use tracing::{debug, trace};

use crate::{Agent, AgentInfo, Cell, Enclosure, GameOver, GridError, GridResult, Side, Tile, Zones};

/// Fluent builder for an [`Enclosure`] plus the [`Agent`] handles its actors
/// will own.
///
/// Construction order:
///
/// 1. Validate the config (dimensions, zone capacities).
/// 2. Wall the border ring, then open one gate per side at a random
///    non-corner offset (or the offset given to [`gate`](Self::gate)).
/// 3. Place explicit agents from [`place`](Self::place), in call order.
/// 4. Place `config.sheep` sheep at random empty cells of the inner zone.
/// 5. Place `config.dogs` dogs at random empty interior cells outside it.
///
/// Random placement retries until it finds an empty cell; capacity is
/// checked first, so the retry loop always has a free cell to find.
pub struct EnclosureBuilder {
    config:     EnclosureConfig,
    gates:      [Option<i32>; 4],
    placements: Vec<(Species, Pos)>,
}

impl EnclosureBuilder {
    pub fn new(config: EnclosureConfig) -> Self {
        Self {
            config,
            gates:      [None; 4],
            placements: Vec::new(),
        }
    }

    /// Fix the gate on `side` at `offset` cells from that side's top/left
    /// corner instead of drawing it at random.
    pub fn gate(mut self, side: Side, offset: i32) -> Self {
        self.gates[side.slot()] = Some(offset);
        self
    }

    /// Place an agent of `species` at `pos` before any random placement.
    ///
    /// The cell must be an empty interior cell; dogs may not be placed in
    /// the inner zone.  Sheep may be placed anywhere in the interior.
    pub fn place(mut self, species: Species, pos: Pos) -> Self {
        self.placements.push((species, pos));
        self
    }

    /// Validate, lay out the grid, place every agent, and return the
    /// enclosure with one [`Agent`] handle per placed agent.
    pub fn build(self) -> GridResult<(Enclosure, Vec<Agent>)> {
        self.config.validate()?;

        let zones = Zones::new(self.config.width, self.config.height);
        let mut rng = SimRng::new(self.config.seed);
        let mut layout = Layout::walled(zones);

        // ── Gates ─────────────────────────────────────────────────────────
        let mut gates = [Pos::default(); 4];
        for side in Side::ALL {
            let span = side.span(&zones);
            let offset = match self.gates[side.slot()] {
                Some(offset) if (1..=span - 2).contains(&offset) => offset,
                Some(offset) => return Err(GridError::GateOffset { offset, span }),
                None => rng.gen_range(1..=span - 2),
            };
            let pos = side.cell(offset, &zones);
            layout.set(pos, Tile::Gate);
            gates[side.slot()] = pos;
        }

        // ── Explicit placements ───────────────────────────────────────────
        for &(species, pos) in &self.placements {
            let reason = if !zones.is_interior(pos) {
                Some("not an interior cell")
            } else if layout.get(pos) != Tile::Empty {
                Some("cell is already taken")
            } else if species == Species::Dog && zones.in_refuge(pos) {
                Some("dogs may not stand in the inner zone")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(GridError::Placement { species, pos, reason });
            }
            layout.spawn(species, pos)?;
        }

        // ── Random sheep: inner zone ──────────────────────────────────────
        let free = layout.free_cells(|p| zones.in_refuge(p));
        if self.config.sheep > free {
            return Err(GridError::Overcrowded {
                species:   Species::Sheep,
                zone:      "inner zone",
                requested: self.config.sheep,
                capacity:  free,
            });
        }
        for _ in 0..self.config.sheep {
            let pos = loop {
                let candidate = Pos::new(
                    rng.gen_range(zones.inner_x()),
                    rng.gen_range(zones.inner_y()),
                );
                if layout.get(candidate) == Tile::Empty {
                    break candidate;
                }
            };
            layout.spawn(Species::Sheep, pos)?;
        }

        // ── Random dogs: interior outside the inner zone ──────────────────
        let free = layout.free_cells(|p| zones.in_outer_ring(p));
        if self.config.dogs > free {
            return Err(GridError::Overcrowded {
                species:   Species::Dog,
                zone:      "outer interior",
                requested: self.config.dogs,
                capacity:  free,
            });
        }
        for _ in 0..self.config.dogs {
            let pos = loop {
                let candidate = Pos::new(
                    rng.gen_range(1..=zones.width - 2),
                    rng.gen_range(1..=zones.height - 2),
                );
                if !zones.in_refuge(candidate) && layout.get(candidate) == Tile::Empty {
                    break candidate;
                }
            };
            layout.spawn(Species::Dog, pos)?;
        }

        debug!(
            width  = zones.width,
            height = zones.height,
            sheep  = layout.counts[0],
            dogs   = layout.counts[1],
            ?gates,
            "enclosure built"
        );

        let Layout { tiles, agents, .. } = layout;
        let cells = tiles
            .into_iter()
            .enumerate()
            .map(|(i, tile)| Cell::new(zones.pos_of(i), tile))
            .collect();
        let roster = agents.iter().map(AgentInfo::from).collect();

        let enclosure = Enclosure {
            zones,
            cells,
            roster,
            gates,
            game_over: GameOver::new(),
        };
        Ok((enclosure, agents))
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Unlocked working grid, used only while the builder owns everything.
struct Layout {
    zones:  Zones,
    tiles:  Vec<Tile>,
    agents: Vec<Agent>,
    /// Agents placed so far per species: `[sheep, dogs]`.
    counts: [usize; 2],
}

impl Layout {
    fn walled(zones: Zones) -> Self {
        let tiles = (0..zones.cell_count())
            .map(|i| if zones.is_border(zones.pos_of(i)) { Tile::Wall } else { Tile::Empty })
            .collect();
        Self { zones, tiles, agents: Vec::new(), counts: [0; 2] }
    }

    /// Tile at `pos`; out-of-bounds reads as `Wall`.
    fn get(&self, pos: Pos) -> Tile {
        self.zones.index(pos).map_or(Tile::Wall, |i| self.tiles[i])
    }

    fn set(&mut self, pos: Pos, tile: Tile) {
        if let Some(i) = self.zones.index(pos) {
            self.tiles[i] = tile;
        }
    }

    /// Empty cells for which `keep` holds.
    fn free_cells(&self, keep: impl Fn(Pos) -> bool) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &tile)| tile == Tile::Empty && keep(self.zones.pos_of(i)))
            .count()
    }

    /// Bind a new agent to the empty cell at `pos`.
    fn spawn(&mut self, species: Species, pos: Pos) -> GridResult<()> {
        let id = AgentId::try_from(self.agents.len())
            .map_err(|_| CoreError::Config(format!("more than {} agents", u32::MAX)))?;
        let slot = match species {
            Species::Sheep => 0,
            Species::Dog   => 1,
        };
        let label = species.label(self.counts[slot]);
        self.counts[slot] += 1;

        self.set(pos, Tile::occupied_by(species, id));
        trace!(%species, %label, %pos, "agent placed");
        self.agents.push(Agent { id, species, label, pos });
        Ok(())
    }
}
