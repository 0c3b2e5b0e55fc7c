//! Read-only copies of the grid for renderers and tests.
//!
//! Both types are filled one cell at a time under that cell's lock.  Every
//! entry is a consistent reading of its cell; the whole is not an atomic
//! picture of the grid unless all actors are paused.

use std::fmt;

use sd_core::{AgentId, Pos};

/// Display symbols for every cell: `" "` empty, `"#"` wall, `"G"` gate,
/// otherwise the occupant's label.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub width:  i32,
    pub height: i32,
    /// `rows[y][x]`.
    pub rows:   Vec<Vec<String>>,
}

impl Snapshot {
    pub fn symbol_at(&self, pos: Pos) -> Option<&str> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.rows
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .map(String::as_str)
    }
}

impl fmt::Display for Snapshot {
    /// One grid row per line, symbols separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// Cell counts by kind, plus where every occupant was seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub empty: usize,
    pub walls: usize,
    pub gates: usize,
    pub sheep: usize,
    pub dogs:  usize,
    /// `(agent, cell)` for every occupied cell, in row-major order.
    pub occupants: Vec<(AgentId, Pos)>,
}
