/// How many entries the search's priority queue may hold.
///
/// The queue never grows, so a search whose frontier outgrows the capacity
/// fails with [`SearchError::QueueFull`](crate::SearchError::QueueFull).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueueCapacity {
    /// Exactly this many entries.
    Fixed(usize),
    /// This many entries per grid cell (border included).
    PerCell(usize),
}

impl QueueCapacity {
    /// Number of entries for a grid of `cells` cells.
    #[inline]
    pub fn resolve(self, cells: usize) -> usize {
        match self {
            Self::Fixed(n) => n,
            Self::PerCell(k) => cells.saturating_mul(k),
        }
    }
}

impl Default for QueueCapacity {
    /// One entry per cell for each of the four directions a cell can be
    /// reached from.
    fn default() -> Self {
        Self::PerCell(4)
    }
}

/// Configuration for a search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub capacity: QueueCapacity,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the queue capacity policy (builder).
    pub fn with_capacity(mut self, capacity: QueueCapacity) -> Self {
        self.capacity = capacity;
        self
    }
}
