use mappath_core::{Cost, Point};

/// A lowest-cost route, start first and goal last.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Sum of the traversal costs of every cell after the start.
    pub cost: Cost,
    pub cells: Vec<Point>,
}

impl Path {
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    /// The queue emptied before the goal was reached.
    NoPath,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPath => None,
        }
    }

    #[inline]
    pub fn cost(&self) -> Option<Cost> {
        self.path().map(|p| p.cost)
    }
}
