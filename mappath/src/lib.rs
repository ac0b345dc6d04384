//! The `mappath` command: load a map, validate the endpoints, run the search
//! and either print the result or animate it.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::info;

use mappath_core::{Grid, Point};
use mappath_crossterm::TerminalAnimator;
use mappath_map::{load_map, render_report, MapError};
use mappath_search::{
    ucs_path_with, NoObserver, QueueCapacity, SearchConfig, SearchError, SearchOutcome,
};

/// Lowest-cost path across a text map
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mappath", version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Map file
    pub mapfile: PathBuf,

    /// Start column (the map's first column is 1)
    pub x0: i32,

    /// Start row (the map's first row is 1)
    pub y0: i32,

    /// Goal column
    pub x1: i32,

    /// Goal row
    pub y1: i32,

    /// Microseconds between animation frames; 0 prints the result instead
    #[arg(default_value_t = 0)]
    pub interval: u64,

    /// Priority queue entries per map cell [default: 4]
    #[arg(long, conflicts_with = "capacity")]
    pub per_cell: Option<usize>,

    /// Fixed priority queue capacity
    #[arg(long)]
    pub capacity: Option<usize>,
}

/// Everything a run needs, resolved from [`Args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub map: PathBuf,
    pub start: Point,
    pub goal: Point,
    /// Frame interval; `None` prints a text report.
    pub animation: Option<Duration>,
    pub search: SearchConfig,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let capacity = match (args.capacity, args.per_cell) {
            (Some(n), _) => QueueCapacity::Fixed(n),
            (None, Some(k)) => QueueCapacity::PerCell(k),
            (None, None) => QueueCapacity::default(),
        };
        Self {
            map: args.mapfile,
            start: Point::new(args.x0, args.y0),
            goal: Point::new(args.x1, args.y1),
            animation: (args.interval > 0).then(|| Duration::from_micros(args.interval)),
            search: SearchConfig::new().with_capacity(capacity),
        }
    }
}

/// Errors that end a `mappath` run.
#[derive(Debug)]
pub enum RunError {
    Map(MapError),
    /// Start or goal is outside the map.
    CoordinatesOutOfRange { start: Point, goal: Point },
    Search(SearchError),
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(e) => write!(f, "{e}"),
            Self::CoordinatesOutOfRange { .. } => f.write_str("Coordinates are not in range."),
            Self::Search(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Map(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::CoordinatesOutOfRange { .. } => None,
        }
    }
}

impl From<MapError> for RunError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Reject endpoints that are not strictly inside the map's border.
pub fn check_endpoints(grid: &Grid, start: Point, goal: Point) -> Result<(), RunError> {
    if grid.is_interior(start) && grid.is_interior(goal) {
        Ok(())
    } else {
        Err(RunError::CoordinatesOutOfRange { start, goal })
    }
}

/// Run one search as configured.
///
/// Without animation the text report goes to `out`. With animation the
/// search is drawn on the terminal and nothing is written to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<SearchOutcome, RunError> {
    let mut grid = load_map(&config.map)?;
    check_endpoints(&grid, config.start, config.goal)?;
    info!(
        "searching {} from {} to {}",
        config.map.display(),
        config.start,
        config.goal
    );

    match config.animation {
        Some(interval) => {
            let mut animator = TerminalAnimator::new(interval);
            animator.begin()?;
            let outcome = ucs_path_with(
                &mut grid,
                config.start,
                config.goal,
                &config.search,
                &mut animator,
            )?;
            animator.finish()?;
            Ok(outcome)
        }
        None => {
            let outcome = ucs_path_with(
                &mut grid,
                config.start,
                config.goal,
                &config.search,
                &mut NoObserver,
            )?;
            out.write_all(render_report(&grid, &outcome).as_bytes())?;
            Ok(outcome)
        }
    }
}
