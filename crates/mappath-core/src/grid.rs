//! The [`Grid`] type: a flat arena of [`Cell`]s ringed by a sentinel border.
//!
//! Every grid carries a one-cell-thick rim of impassable cells, so any
//! interior position has four in-bounds neighbours and neighbour lookups in
//! the search loop need no bounds checks.

use crate::cell::{Cell, CellFlags, Cost};
use crate::geom::{Point, Range};

/// A 2D grid of [`Cell`]s stored row-major in one vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an all-impassable grid whose interior is
    /// `interior_width × interior_height`. The full grid is two cells wider
    /// and taller.
    pub fn with_border(interior_width: usize, interior_height: usize) -> Self {
        let width = interior_width + 2;
        let height = interior_height + 2;
        Self {
            cells: vec![Cell::default(); width * height],
            width,
            height,
        }
    }

    /// Full width, border included.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Full height, border included.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, border included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The whole grid as a range.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// The range inside the sentinel border.
    #[inline]
    pub fn interior(&self) -> Range {
        self.bounds().shift(1, 1, -1, -1)
    }

    /// Whether `p` lies strictly inside the border.
    #[inline]
    pub fn is_interior(&self, p: Point) -> bool {
        self.interior().contains(p)
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Flat-index offsets of the four neighbours, in the same order as
    /// [`Point::neighbors_4`].
    #[inline]
    pub fn neighbor_offsets(&self) -> [isize; 4] {
        let w = self.width as isize;
        [-w, w, -1, 1]
    }

    /// Cell at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn get(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Add `flags` to the cell at a flat index. Flags are only ever added
    /// here, so an impassable cell stays impassable.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn mark(&mut self, idx: usize, flags: CellFlags) {
        self.cells[idx].flags.insert(flags);
    }

    /// Record the best known cost and predecessor of the cell at a flat
    /// index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn set_best(&mut self, idx: usize, best: Cost, prev: Option<usize>) {
        let c = &mut self.cells[idx];
        c.best = best;
        c.prev = prev;
    }

    /// Cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable cell at an interior position. Border cells are not handed
    /// out.
    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        if !self.is_interior(p) {
            return None;
        }
        self.index(p).map(move |i| &mut self.cells[i])
    }

    /// Place `cell` at an interior position. Writes to the border or outside
    /// the grid are ignored so the sentinel rim stays intact. Returns whether
    /// the cell was written.
    pub fn set_cell(&mut self, p: Point, cell: Cell) -> bool {
        if !self.is_interior(p) {
            return false;
        }
        match self.index(p) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Clear search flags, best costs and predecessors on every cell.
    pub fn clear_search_state(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_search();
        }
    }

    /// Whether any cell carries all of `flags`.
    pub fn any(&self, flags: CellFlags) -> bool {
        self.cells.iter().any(|c| c.flags.contains(flags))
    }

    /// Row-major iterator over `(Point, &Cell)` pairs, border included.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (self.point(i), c))
    }

    /// Row-major iterator over the interior only.
    pub fn iter_interior(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.interior()
            .iter()
            .map(move |p| (p, &self.cells[p.y as usize * self.width + p.x as usize]))
    }
}
