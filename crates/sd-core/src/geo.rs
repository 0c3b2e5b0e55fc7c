//! Grid coordinates and unit displacements.
//!
//! Coordinates are signed so that `pos + step` can land outside the grid
//! (x = -1) without wrapping; the enclosure bounds-checks every target before
//! indexing.  `(0, 0)` is the top-left corner, `y` grows downward.

use std::fmt;

// ── Pos ───────────────────────────────────────────────────────────────────────

/// A cell coordinate in the enclosure grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one `step` away.  May be out of bounds.
    #[inline]
    pub fn offset(self, step: Step) -> Pos {
        Pos::new(self.x + step.dx, self.y + step.dy)
    }

    /// Position of this cell in the global lock order.
    ///
    /// Cells are ordered by `x + y`, ties broken by `x`.  The key is unique
    /// per cell, so any two distinct cells compare strictly.  Every operation
    /// that holds two cell locks acquires the lower-ranked one first.
    #[inline]
    pub fn lock_rank(self) -> (i32, i32) {
        (self.x + self.y, self.x)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Axis ──────────────────────────────────────────────────────────────────────

/// A grid axis, used for the three-cell proximity probe.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Along `x`: probes `(x-1, y)`, `(x, y)`, `(x+1, y)`.
    Horizontal,
    /// Along `y`: probes `(x, y-1)`, `(x, y)`, `(x, y+1)`.
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The three cells centred on `at` along this axis, lowest first.
    /// Some may be out of bounds.
    pub fn line_through(self, at: Pos) -> [Pos; 3] {
        match self {
            Axis::Horizontal => [
                Pos::new(at.x - 1, at.y),
                at,
                Pos::new(at.x + 1, at.y),
            ],
            Axis::Vertical => [
                Pos::new(at.x, at.y - 1),
                at,
                Pos::new(at.x, at.y + 1),
            ],
        }
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

/// A candidate displacement, each component in `{-1, 0, 1}`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub dx: i32,
    pub dy: i32,
}

impl Step {
    pub const STILL: Step = Step { dx: 0, dy: 0 };

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// `true` for the zero displacement.
    #[inline]
    pub fn is_still(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Component along `axis`.
    #[inline]
    pub fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.dx,
            Axis::Vertical   => self.dy,
        }
    }

    /// Copy of `self` with the component along `axis` replaced.
    #[inline]
    pub fn with(self, axis: Axis, delta: i32) -> Step {
        match axis {
            Axis::Horizontal => Step { dx: delta, ..self },
            Axis::Vertical   => Step { dy: delta, ..self },
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}/{:+}", self.dx, self.dy)
    }
}
