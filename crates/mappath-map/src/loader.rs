use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use mappath_core::{Grid, Point};

use crate::terrain::cell_for;

/// Errors that can occur when loading a map.
#[derive(Debug)]
pub enum MapError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The map has no cells.
    Empty,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot open file {}: {source}", path.display()),
            Self::Empty => f.write_str("map is empty"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Read and parse the map file at `path`.
pub fn load_map(path: impl AsRef<Path>) -> Result<Grid, MapError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_map(&text)?;
    debug!(
        "loaded {}: {}x{} cells with border",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

/// Parse map text into a bordered [`Grid`].
///
/// The map is as wide as its longest line; shorter lines are padded with
/// impassable cells. A final line without a newline still counts.
pub fn parse_map(text: &str) -> Result<Grid, MapError> {
    let lines: Vec<&str> = text.lines().collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if width == 0 {
        return Err(MapError::Empty);
    }

    let mut grid = Grid::with_border(width, lines.len());
    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            grid.set_cell(Point::new(x as i32 + 1, y as i32 + 1), cell_for(ch));
        }
    }
    Ok(grid)
}
