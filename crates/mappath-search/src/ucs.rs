use log::{debug, trace, warn};
use mappath_core::{CellFlags, Cost, Grid, Point};
use mappath_pq::{HeapEntry, PriorityQueue};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::observer::{NoObserver, Observer, SearchEvent};
use crate::outcome::{Path, SearchOutcome};

/// Find a lowest-cost path from `start` to `goal` with the default
/// configuration.
///
/// See [`ucs_path_with`].
pub fn ucs_path(grid: &mut Grid, start: Point, goal: Point) -> Result<SearchOutcome, SearchError> {
    ucs_path_with(grid, start, goal, &SearchConfig::default(), &mut NoObserver)
}

/// Find a lowest-cost path from `start` to `goal` using uniform-cost search.
///
/// Entering a cell costs that cell's traversal cost; the start's own cost is
/// never paid. On success the cells of the path are flagged
/// [`CellFlags::PATH`] and the returned [`Path`] lists them start first.
/// The grid keeps the visited/enqueued flags, best costs and predecessors
/// of the run until the next search clears them.
///
/// Both endpoints must lie inside the sentinel border and the start must be
/// passable, otherwise [`SearchError::InvalidEndpoint`] is returned before
/// anything is touched. An impassable or walled-off goal yields
/// [`SearchOutcome::NoPath`].
pub fn ucs_path_with<O: Observer + ?Sized>(
    grid: &mut Grid,
    start: Point,
    goal: Point,
    config: &SearchConfig,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError> {
    let start_idx = endpoint(grid, start)?;
    let goal_idx = endpoint(grid, goal)?;
    if grid.get(start_idx).is_impassable() {
        return Err(SearchError::InvalidEndpoint { pos: start });
    }

    let capacity = config.capacity.resolve(grid.len());
    debug!("ucs: {start} -> {goal}, queue capacity {capacity}");

    let mut frontier = Frontier::new(grid, start_idx, goal_idx, capacity)?;
    observer.observe(SearchEvent::Started, frontier.grid());

    let found = loop {
        match frontier.step()? {
            Step::Stale => continue,
            Step::Expanded { idx, cost } => {
                let pos = frontier.grid().point(idx);
                observer.observe(SearchEvent::Expanded { pos, cost }, frontier.grid());
            }
            Step::Goal => break true,
            Step::Exhausted => break false,
        }
    };

    let stats = frontier.stats;
    let outcome = if found {
        let path = mark_path(grid, goal_idx);
        observer.observe(SearchEvent::PathMarked, grid);
        SearchOutcome::Found(path)
    } else {
        SearchOutcome::NoPath
    };

    debug!(
        "ucs: {} (expanded {}, stale {}, pushed {}, peak queue {})",
        match outcome.cost() {
            Some(c) => format!("cost {c}"),
            None => "no path".to_string(),
        },
        stats.expanded,
        stats.stale,
        stats.pushed,
        stats.peak
    );
    Ok(outcome)
}

fn endpoint(grid: &Grid, p: Point) -> Result<usize, SearchError> {
    if !grid.is_interior(p) {
        return Err(SearchError::InvalidEndpoint { pos: p });
    }
    grid.index(p).ok_or(SearchError::InvalidEndpoint { pos: p })
}

/// Flag the path from goal back to start and collect it start first.
fn mark_path(grid: &mut Grid, goal_idx: usize) -> Path {
    let cost = grid.get(goal_idx).best;
    let mut cells = Vec::new();
    let mut i = goal_idx;
    loop {
        grid.mark(i, CellFlags::PATH);
        let cell = grid.get(i);
        let at_start = cell.flags.contains(CellFlags::START);
        let prev = cell.prev;
        cells.push(grid.point(i));
        if at_start {
            break;
        }
        match prev {
            Some(p) => i = p,
            None => break,
        }
    }
    cells.reverse();
    Path { cost, cells }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
struct Stats {
    expanded: usize,
    stale: usize,
    pushed: usize,
    peak: usize,
}

/// Result of one dequeue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// A superseded duplicate was discarded.
    Stale,
    /// The cell at `idx` was dequeued at `cost`, marked visited and its
    /// neighbours relaxed.
    Expanded { idx: usize, cost: Cost },
    /// The goal was dequeued.
    Goal,
    /// The queue is empty.
    Exhausted,
}

/// Search state for one run: the grid being explored and its queue.
struct Frontier<'g> {
    grid: &'g mut Grid,
    pq: PriorityQueue,
    stats: Stats,
}

impl<'g> Frontier<'g> {
    /// Reset the grid, flag the endpoints and queue the start at cost 0.
    fn new(
        grid: &'g mut Grid,
        start_idx: usize,
        goal_idx: usize,
        capacity: usize,
    ) -> Result<Self, SearchError> {
        grid.clear_search_state();
        grid.mark(start_idx, CellFlags::START);
        grid.mark(goal_idx, CellFlags::GOAL);
        grid.set_best(start_idx, 0, None);

        let pq = PriorityQueue::new(capacity)?;
        let mut frontier = Self {
            grid,
            pq,
            stats: Stats::default(),
        };
        frontier.push(start_idx, 0)?;
        frontier.grid.mark(start_idx, CellFlags::ENQUEUED);
        Ok(frontier)
    }

    #[inline]
    fn grid(&self) -> &Grid {
        &*self.grid
    }

    fn push(&mut self, idx: usize, cost: Cost) -> Result<(), SearchError> {
        if let Err(e) = self.pq.enqueue(idx, cost) {
            warn!("ucs: {e}; aborting search");
            return Err(e.into());
        }
        self.stats.pushed += 1;
        self.stats.peak = self.stats.peak.max(self.pq.len());
        Ok(())
    }

    fn step(&mut self) -> Result<Step, SearchError> {
        let Some(HeapEntry { value: ci, priority }) = self.pq.dequeue() else {
            return Ok(Step::Exhausted);
        };

        let cell = self.grid.get(ci);
        if priority > cell.best {
            self.stats.stale += 1;
            return Ok(Step::Stale);
        }
        if cell.flags.contains(CellFlags::GOAL) {
            return Ok(Step::Goal);
        }

        self.grid.mark(ci, CellFlags::VISITED);
        self.stats.expanded += 1;
        trace!("ucs: expand {} at {priority}", self.grid.point(ci));

        // Dequeued cells are passable, and passable cells sit inside the
        // border, so every neighbour index is in bounds.
        for off in self.grid.neighbor_offsets() {
            let ni = ci.wrapping_add_signed(off);
            self.relax(ci, priority, ni)?;
        }
        Ok(Step::Expanded { idx: ci, cost: priority })
    }

    /// Offer `to` a route through `from`, which was reached at `cost`.
    fn relax(&mut self, from: usize, cost: Cost, to: usize) -> Result<(), SearchError> {
        let n = self.grid.get(to);
        if n.is_impassable() || n.is_visited() {
            return Ok(());
        }
        let candidate = cost.saturating_add(n.cost);
        if n.is_enqueued() && candidate >= n.best {
            return Ok(());
        }

        self.grid.set_best(to, candidate, Some(from));
        // An improved cell gets a second entry; the old one goes stale.
        self.push(to, candidate)?;
        self.grid.mark(to, CellFlags::ENQUEUED);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueueCapacity;
    use mappath_core::{Cell, UNREACHABLE};

    /// Build a grid from rows of digits (cost) and `#` (wall). The first
    /// row/column of `rows` lands at (1, 1).
    fn grid(rows: &[&str]) -> Grid {
        let w = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut g = Grid::with_border(w, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32 + 1, y as i32 + 1);
                let cell = match ch.to_digit(10) {
                    Some(c) => Cell::passable(ch, c),
                    None => Cell::impassable(ch),
                };
                g.set_cell(p, cell);
            }
        }
        g
    }

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn assert_contiguous(path: &Path) {
        for w in path.cells.windows(2) {
            let d = w[1] - w[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1, "{} -> {} is not a step", w[0], w[1]);
        }
    }

    #[test]
    fn uniform_three_by_three() {
        let mut g = grid(&["111", "111", "111"]);
        let out = ucs_path(&mut g, p(1, 1), p(3, 3)).unwrap();
        let path = out.path().unwrap();
        assert_eq!(path.cost, 4);
        assert_eq!(path.len(), 5);
        assert_eq!(path.start(), Some(p(1, 1)));
        assert_eq!(path.goal(), Some(p(3, 3)));
        assert_contiguous(path);
        for &c in &path.cells {
            assert!(g.cell(c).unwrap().is_on_path());
        }
        let marked = g.iter().filter(|(_, c)| c.is_on_path()).count();
        assert_eq!(marked, 5);
    }

    #[test]
    fn cheaper_route_beats_fewer_hops() {
        // Straight along the top costs 5 + 5 + 5 = 15; the detour through the
        // bottom row costs 1 + 1 + 1 + 1 + 5 = 9.
        let mut g = grid(&["1555", "1111"]);
        let out = ucs_path(&mut g, p(1, 1), p(4, 1)).unwrap();
        let path = out.path().unwrap();
        assert_eq!(path.cost, 9);
        assert_eq!(
            path.cells,
            vec![p(1, 1), p(1, 2), p(2, 2), p(3, 2), p(4, 2), p(4, 1)]
        );
        assert!(!g.cell(p(2, 1)).unwrap().is_on_path());
    }

    #[test]
    fn path_cost_is_sum_of_entered_cells() {
        let mut g = grid(&["1289", "1#11", "1111"]);
        let out = ucs_path(&mut g, p(1, 1), p(4, 1)).unwrap();
        let path = out.path().unwrap();
        let sum: Cost = path.cells[1..]
            .iter()
            .map(|&c| g.cell(c).unwrap().cost)
            .sum();
        assert_eq!(path.cost, sum);
        assert_eq!(g.cell(p(4, 1)).unwrap().best, path.cost);
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        let mut g = grid(&["11111", "11###", "11#1#", "11###"]);
        let goal = p(4, 3);
        let mut expanded = Vec::new();
        let out = ucs_path_with(
            &mut g,
            p(1, 1),
            goal,
            &SearchConfig::default(),
            &mut |ev: SearchEvent, _: &Grid| {
                if let SearchEvent::Expanded { pos, .. } = ev {
                    expanded.push(pos);
                }
            },
        )
        .unwrap();
        assert_eq!(out, SearchOutcome::NoPath);
        assert!(!expanded.contains(&goal));
        let gc = g.cell(goal).unwrap();
        assert!(!gc.is_visited());
        assert!(!gc.is_enqueued());
        assert_eq!(gc.best, UNREACHABLE);
        // Every reachable cell was expanded exactly once.
        assert_eq!(expanded.len(), 11);
        assert!(!g.any(CellFlags::PATH));
    }

    #[test]
    fn impassable_goal_has_no_path() {
        let mut g = grid(&["11#"]);
        let out = ucs_path(&mut g, p(1, 1), p(3, 1)).unwrap();
        assert!(!out.is_found());
        assert_eq!(out.cost(), None);
    }

    #[test]
    fn start_equals_goal() {
        let mut g = grid(&["12", "34"]);
        let out = ucs_path(&mut g, p(2, 2), p(2, 2)).unwrap();
        let path = out.path().unwrap();
        assert_eq!(path.cost, 0);
        assert_eq!(path.cells, vec![p(2, 2)]);
    }

    #[test]
    fn endpoints_must_be_interior_and_start_passable() {
        let mut g = grid(&["1#", "11"]);
        assert_eq!(
            ucs_path(&mut g, p(0, 1), p(1, 1)),
            Err(SearchError::InvalidEndpoint { pos: p(0, 1) })
        );
        assert_eq!(
            ucs_path(&mut g, p(1, 1), p(3, 2)),
            Err(SearchError::InvalidEndpoint { pos: p(3, 2) })
        );
        assert_eq!(
            ucs_path(&mut g, p(1, 1), p(-5, 40)),
            Err(SearchError::InvalidEndpoint { pos: p(-5, 40) })
        );
        assert_eq!(
            ucs_path(&mut g, p(2, 1), p(1, 1)),
            Err(SearchError::InvalidEndpoint { pos: p(2, 1) })
        );
        assert!(!g.any(CellFlags::START));
    }

    #[test]
    fn undersized_queue_reports_queue_full() {
        let mut g = grid(&["11111", "11111", "11111"]);
        let cfg = SearchConfig::new().with_capacity(QueueCapacity::Fixed(2));
        let err = ucs_path_with(&mut g, p(3, 2), p(5, 3), &cfg, &mut NoObserver).unwrap_err();
        assert_eq!(err, SearchError::QueueFull { capacity: 2 });

        let cfg = SearchConfig::new().with_capacity(QueueCapacity::Fixed(0));
        let err = ucs_path_with(&mut g, p(3, 2), p(5, 3), &cfg, &mut NoObserver).unwrap_err();
        assert_eq!(err, SearchError::QueueFull { capacity: 0 });
    }

    #[test]
    fn oversized_queue_reports_out_of_memory() {
        let mut g = grid(&["11"]);
        let cfg = SearchConfig::new().with_capacity(QueueCapacity::Fixed(usize::MAX));
        let err = ucs_path_with(&mut g, p(1, 1), p(2, 1), &cfg, &mut NoObserver).unwrap_err();
        assert_eq!(err, SearchError::OutOfMemory { capacity: usize::MAX });
    }

    #[test]
    fn ties_follow_up_down_left_right() {
        // Both routes cost 2; the lower neighbour is queued first and wins.
        let mut g = grid(&["11", "11"]);
        let out = ucs_path(&mut g, p(1, 1), p(2, 2)).unwrap();
        assert_eq!(out.path().unwrap().cells, vec![p(1, 1), p(1, 2), p(2, 2)]);
    }

    #[test]
    fn observer_sees_start_then_steps_then_path() {
        let mut g = grid(&["111"]);
        let mut events = Vec::new();
        ucs_path_with(
            &mut g,
            p(1, 1),
            p(3, 1),
            &SearchConfig::default(),
            &mut |ev: SearchEvent, grid: &Grid| {
                if ev == SearchEvent::Started {
                    assert!(grid.cell(Point::new(1, 1)).unwrap().is_enqueued());
                }
                events.push(ev);
            },
        )
        .unwrap();
        assert_eq!(
            events,
            vec![
                SearchEvent::Started,
                SearchEvent::Expanded { pos: p(1, 1), cost: 0 },
                SearchEvent::Expanded { pos: p(2, 1), cost: 1 },
                SearchEvent::PathMarked,
            ]
        );
    }

    #[test]
    fn observer_does_not_change_result() {
        let rows = ["1235", "9#11", "1121"];
        let mut a = grid(&rows);
        let mut b = grid(&rows);
        let plain = ucs_path(&mut a, p(1, 1), p(4, 3)).unwrap();
        let mut n = 0usize;
        let watched = ucs_path_with(
            &mut b,
            p(1, 1),
            p(4, 3),
            &SearchConfig::default(),
            &mut |_: SearchEvent, _: &Grid| n += 1,
        )
        .unwrap();
        assert_eq!(plain, watched);
        assert_eq!(a, b);
        assert!(n > 0);
    }

    #[test]
    fn repeated_search_on_same_grid() {
        let mut g = grid(&["111", "1#1", "111"]);
        let first = ucs_path(&mut g, p(1, 1), p(3, 3)).unwrap();
        let second = ucs_path(&mut g, p(3, 3), p(1, 1)).unwrap();
        assert_eq!(first.cost(), Some(4));
        assert_eq!(second.cost(), Some(4));
        assert_eq!(g.iter().filter(|(_, c)| c.flags.contains(CellFlags::START)).count(), 1);
        assert_eq!(g.cell(p(3, 3)).unwrap().best, 0);
    }

    #[test]
    fn improved_cell_keeps_minimum_and_skips_stale_entries() {
        // S T X # G: the goal is walled off so every entry gets drained.
        let mut g = grid(&["111#1"]);
        let (s, t, x) = (
            g.index(p(1, 1)).unwrap(),
            g.index(p(2, 1)).unwrap(),
            g.index(p(3, 1)).unwrap(),
        );
        let goal = g.index(p(5, 1)).unwrap();
        let mut f = Frontier::new(&mut g, s, goal, 16).unwrap();

        assert_eq!(f.pq.len(), 1);
        f.relax(x, 9, t).unwrap();
        assert_eq!((f.grid().get(t).best, f.grid().get(t).prev), (10, Some(x)));
        assert_eq!(f.pq.len(), 2);
        f.relax(s, 3, t).unwrap();
        assert_eq!((f.grid().get(t).best, f.grid().get(t).prev), (4, Some(s)));
        assert_eq!(f.pq.len(), 3);
        // A worse offer afterwards changes nothing and queues nothing.
        f.relax(x, 6, t).unwrap();
        assert_eq!((f.grid().get(t).best, f.grid().get(t).prev), (4, Some(s)));
        assert_eq!(f.pq.len(), 3);

        assert_eq!(f.step().unwrap(), Step::Expanded { idx: s, cost: 0 });
        assert_eq!(f.grid().get(t).best, 1);
        assert_eq!(f.step().unwrap(), Step::Expanded { idx: t, cost: 1 });
        assert_eq!(f.step().unwrap(), Step::Expanded { idx: x, cost: 2 });
        assert_eq!(f.step().unwrap(), Step::Stale);
        assert_eq!(f.step().unwrap(), Step::Stale);
        assert_eq!(f.step().unwrap(), Step::Exhausted);
        assert_eq!(f.stats.stale, 2);

        let tc = f.grid().get(t);
        assert_eq!((tc.best, tc.prev), (1, Some(s)));
    }

    #[test]
    fn visited_cells_are_never_relaxed() {
        let mut g = grid(&["11"]);
        let (s, t) = (g.index(p(1, 1)).unwrap(), g.index(p(2, 1)).unwrap());
        let mut f = Frontier::new(&mut g, s, t, 8).unwrap();
        f.step().unwrap();
        assert!(f.grid().get(s).is_visited());
        let queued = f.pq.len();
        f.relax(t, 0, s).unwrap();
        assert_eq!(f.pq.len(), queued);
        let sc = f.grid().get(s);
        assert_eq!((sc.best, sc.prev), (0, None));
    }

    #[test]
    fn rim_stays_a_wall_through_every_mutator() {
        let mut g = grid(&["11", "11"]);
        let rim = p(1, 0);
        let ri = g.index(rim).unwrap();
        assert!(!g.set_cell(rim, Cell::passable('.', 1)));
        assert!(g.cell_mut(rim).is_none());
        g.mark(ri, CellFlags::PATH | CellFlags::ENQUEUED);
        g.set_best(ri, 0, None);
        assert!(g.cell(rim).unwrap().is_impassable());

        let out = ucs_path(&mut g, p(1, 1), p(2, 1)).unwrap();
        assert_eq!(out.cost(), Some(1));
        assert!(!g.cell(rim).unwrap().is_enqueued());
        assert!(!g.cell(rim).unwrap().is_on_path());
    }

    #[test]
    fn impassable_cells_are_never_enqueued() {
        let mut g = grid(&["1#1", "111"]);
        ucs_path(&mut g, p(1, 1), p(3, 1)).unwrap();
        let wall = g.cell(p(2, 1)).unwrap();
        assert!(!wall.is_enqueued() && !wall.is_visited());
        for (_, c) in g.iter() {
            if c.is_impassable() {
                assert!(!c.is_enqueued() && !c.is_visited());
            }
        }
    }

    /// Reference costs by repeated relaxation until nothing changes.
    fn brute_force(g: &Grid, start: Point) -> Vec<Cost> {
        let mut dist = vec![UNREACHABLE; g.len()];
        dist[g.index(start).unwrap()] = 0;
        let mut changed = true;
        while changed {
            changed = false;
            for (pt, _) in g.iter_interior() {
                let i = g.index(pt).unwrap();
                if dist[i] == UNREACHABLE || g.get(i).is_impassable() {
                    continue;
                }
                for np in pt.neighbors_4() {
                    let ni = g.index(np).unwrap();
                    let n = g.get(ni);
                    if n.is_impassable() {
                        continue;
                    }
                    let c = dist[i] + n.cost;
                    if c < dist[ni] {
                        dist[ni] = c;
                        changed = true;
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn random_grids_match_brute_force() {
        for _ in 0..40 {
            let w = rand::random_range(2..12usize);
            let h = rand::random_range(2..12usize);
            let mut g = Grid::with_border(w, h);
            for y in 1..=h as i32 {
                for x in 1..=w as i32 {
                    let cell = if rand::random_range(0..5u32) == 0 {
                        Cell::impassable('#')
                    } else {
                        let c = [1, 2, 5, 12][rand::random_range(0..4usize)];
                        Cell::passable('.', c)
                    };
                    g.set_cell(p(x, y), cell);
                }
            }
            let start = p(1, 1);
            let goal = p(w as i32, h as i32);
            g.set_cell(start, Cell::passable('.', 1));

            let expected = brute_force(&g, start)[g.index(goal).unwrap()];
            let out = ucs_path(&mut g, start, goal).unwrap();
            match out {
                SearchOutcome::Found(path) => {
                    assert_eq!(path.cost, expected);
                    assert_eq!(path.start(), Some(start));
                    assert_eq!(path.goal(), Some(goal));
                    assert_contiguous(&path);
                }
                SearchOutcome::NoPath => assert_eq!(expected, UNREACHABLE),
            }
        }
    }
}
