//! Enclosure geometry: bounds, border ring, and the inner refuge.
//!
//! The interior (everything inside the border ring) is split into thirds
//! along each axis.  The central third on both axes is the inner zone, a
//! refuge that dogs may never enter:
//!
//! ```text
//!   zone_w = (width  - 2) / 3        x ∈ [zone_w + 1, width  - zone_w - 2]
//!   zone_h = (height - 2) / 3        y ∈ [zone_h + 1, height - zone_h - 2]
//! ```

use sd_core::Pos;

/// Geometry derived once from validated dimensions.  `Copy` and lock-free.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Zones {
    pub width:       i32,
    pub height:      i32,
    pub zone_width:  i32,
    pub zone_height: i32,
}

impl Zones {
    /// Geometry for a `width × height` grid.  Assumes validated dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            zone_width:  (width - 2) / 3,
            zone_height: (height - 2) / 3,
        }
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Row-major index of `pos`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn pos_of(&self, index: usize) -> Pos {
        let i = index as i32;
        Pos::new(i % self.width, i / self.width)
    }

    /// `true` for the outermost ring of cells.
    #[inline]
    pub fn is_border(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && (pos.x == 0 || pos.y == 0 || pos.x == self.width - 1 || pos.y == self.height - 1)
    }

    /// `true` for the four corner cells.
    #[inline]
    pub fn is_corner(&self, pos: Pos) -> bool {
        (pos.x == 0 || pos.x == self.width - 1) && (pos.y == 0 || pos.y == self.height - 1)
    }

    /// `true` for in-bounds cells inside the border ring.
    #[inline]
    pub fn is_interior(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && !self.is_border(pos)
    }

    /// Inclusive x range of the inner zone.
    #[inline]
    pub fn inner_x(&self) -> std::ops::RangeInclusive<i32> {
        (self.zone_width + 1)..=(self.width - self.zone_width - 2)
    }

    /// Inclusive y range of the inner zone.
    #[inline]
    pub fn inner_y(&self) -> std::ops::RangeInclusive<i32> {
        (self.zone_height + 1)..=(self.height - self.zone_height - 2)
    }

    /// `true` inside the central third on both axes (the dog-free refuge).
    #[inline]
    pub fn in_refuge(&self, pos: Pos) -> bool {
        self.inner_x().contains(&pos.x) && self.inner_y().contains(&pos.y)
    }

    /// Interior cells outside the refuge: where dogs may stand.
    #[inline]
    pub fn in_outer_ring(&self, pos: Pos) -> bool {
        self.is_interior(pos) && !self.in_refuge(pos)
    }
}

// ── Side ──────────────────────────────────────────────────────────────────────

/// One side of the border ring.  Each side carries exactly one gate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Slot of this side in per-side arrays (same order as [`Side::ALL`]).
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Side::Top    => 0,
            Side::Bottom => 1,
            Side::Left   => 2,
            Side::Right  => 3,
        }
    }

    /// Length of this side, corners included.
    #[inline]
    pub fn span(self, zones: &Zones) -> i32 {
        match self {
            Side::Top | Side::Bottom => zones.width,
            Side::Left | Side::Right => zones.height,
        }
    }

    /// Border cell `offset` cells along this side from its top/left corner.
    pub fn cell(self, offset: i32, zones: &Zones) -> Pos {
        match self {
            Side::Top    => Pos::new(offset, 0),
            Side::Bottom => Pos::new(offset, zones.height - 1),
            Side::Left   => Pos::new(0, offset),
            Side::Right  => Pos::new(zones.width - 1, offset),
        }
    }

    /// The side a non-corner border cell belongs to.
    pub fn of(pos: Pos, zones: &Zones) -> Option<Side> {
        if !zones.is_border(pos) || zones.is_corner(pos) {
            return None;
        }
        Some(if pos.y == 0 {
            Side::Top
        } else if pos.y == zones.height - 1 {
            Side::Bottom
        } else if pos.x == 0 {
            Side::Left
        } else {
            Side::Right
        })
    }
}
