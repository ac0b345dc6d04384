//! The [`Cell`] type: one grid position with its search state.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Path cost. Costs are never negative.
pub type Cost = u32;

/// Sentinel for "no cost known yet".
pub const UNREACHABLE: Cost = Cost::MAX;

// ---------------------------------------------------------------------------
// CellFlags
// ---------------------------------------------------------------------------

/// Bitmask of per-cell search states.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFlags(pub u8);

impl CellFlags {
    pub const NONE: Self = Self(0);
    pub const VISITED: Self = Self(1 << 0);
    pub const ENQUEUED: Self = Self(1 << 1);
    pub const IMPASSABLE: Self = Self(1 << 2);
    pub const START: Self = Self(1 << 3);
    pub const GOAL: Self = Self(1 << 4);
    pub const PATH: Self = Self(1 << 5);

    /// Flags written by a search run (everything but `IMPASSABLE`).
    pub const SEARCH: Self =
        Self(Self::VISITED.0 | Self::ENQUEUED.0 | Self::START.0 | Self::GOAL.0 | Self::PATH.0);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for CellFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CellFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for CellFlags {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid position: its terrain glyph and traversal cost, plus the state a
/// search run attaches to it.
///
/// `prev` is an index into the owning [`Grid`](crate::Grid)'s cell vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    /// Cost of stepping onto this cell. Meaningless when impassable.
    pub cost: Cost,
    /// Cheapest known total cost from the start.
    pub best: Cost,
    pub prev: Option<usize>,
    pub flags: CellFlags,
}

impl Cell {
    /// A walkable cell entered at `cost`.
    #[inline]
    pub const fn passable(glyph: char, cost: Cost) -> Self {
        Self {
            glyph,
            cost,
            best: UNREACHABLE,
            prev: None,
            flags: CellFlags::NONE,
        }
    }

    /// A wall.
    #[inline]
    pub const fn impassable(glyph: char) -> Self {
        Self {
            glyph,
            cost: 0,
            best: UNREACHABLE,
            prev: None,
            flags: CellFlags::IMPASSABLE,
        }
    }

    #[inline]
    pub const fn is_impassable(&self) -> bool {
        self.flags.contains(CellFlags::IMPASSABLE)
    }

    #[inline]
    pub const fn is_visited(&self) -> bool {
        self.flags.contains(CellFlags::VISITED)
    }

    #[inline]
    pub const fn is_enqueued(&self) -> bool {
        self.flags.contains(CellFlags::ENQUEUED)
    }

    #[inline]
    pub const fn is_on_path(&self) -> bool {
        self.flags.contains(CellFlags::PATH)
    }

    /// Forget everything a previous search recorded.
    #[inline]
    pub fn reset_search(&mut self) {
        self.flags.remove(CellFlags::SEARCH);
        self.best = UNREACHABLE;
        self.prev = None;
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::impassable('#')
    }
}
