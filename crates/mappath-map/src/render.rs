use std::fmt::Write;

use mappath_core::{CellFlags, Grid};
use mappath_search::{Path, SearchOutcome};

/// Glyph drawn for a cell on the path.
fn path_glyph(flags: CellFlags) -> Option<char> {
    if !flags.contains(CellFlags::PATH) {
        return None;
    }
    Some(if flags.contains(CellFlags::START) {
        'A'
    } else if flags.contains(CellFlags::GOAL) {
        'B'
    } else {
        'o'
    })
}

/// Draw the interior of `grid`, one line per row. Cells on a marked path are
/// drawn as `A` (start), `B` (goal) and `o`.
pub fn render_map(grid: &Grid) -> String {
    let interior = grid.interior();
    let mut out = String::with_capacity(interior.len() + interior.height().max(0) as usize);
    for (p, cell) in grid.iter_interior() {
        out.push(path_glyph(cell.flags).unwrap_or(cell.glyph));
        if p.x == interior.max.x - 1 {
            out.push('\n');
        }
    }
    out
}

/// `(x, y) -> (x, y) -> …` from start to goal.
pub fn format_path(path: &Path) -> String {
    path.cells
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// The full text report for a finished search: map, coordinates and cost,
/// or a "no path" line.
pub fn render_report(grid: &Grid, outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found(path) => {
            let mut out = render_map(grid);
            let _ = writeln!(out, "{}", format_path(path));
            let _ = writeln!(out, "Path cost: {}", path.cost);
            out
        }
        SearchOutcome::NoPath => "No path found.\n".to_string(),
    }
}
