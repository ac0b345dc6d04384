use mappath_core::{Cost, Grid, Point};

/// A point in a search run at which observers are notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// Start and goal are flagged and the start is queued.
    Started,
    /// `pos` was dequeued at `cost` and its neighbours relaxed.
    Expanded { pos: Point, cost: Cost },
    /// The path has been marked on the grid.
    PathMarked,
}

/// Read-only hook called while a search runs, e.g. to animate it.
///
/// Observers see the grid by shared reference and cannot alter the search.
pub trait Observer {
    fn observe(&mut self, event: SearchEvent, grid: &Grid);
}

impl<F: FnMut(SearchEvent, &Grid)> Observer for F {
    fn observe(&mut self, event: SearchEvent, grid: &Grid) {
        self(event, grid)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl Observer for NoObserver {
    #[inline]
    fn observe(&mut self, _event: SearchEvent, _grid: &Grid) {}
}
