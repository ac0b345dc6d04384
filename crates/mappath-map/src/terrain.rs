//! Glyph ↔ terrain mapping.

use mappath_core::{Cell, Cost};

pub const PLAIN: char = '.';
pub const ROUGH: char = ':';
pub const MARSH: char = '=';
pub const MOUNTAIN: char = '+';
pub const WALL: char = '#';

/// Traversal cost of a glyph, or `None` if it is impassable.
pub fn glyph_cost(ch: char) -> Option<Cost> {
    match ch {
        PLAIN => Some(1),
        ROUGH => Some(2),
        MARSH => Some(5),
        MOUNTAIN => Some(12),
        _ => None,
    }
}

/// The cell a map glyph stands for.
pub fn cell_for(ch: char) -> Cell {
    match glyph_cost(ch) {
        Some(cost) => Cell::passable(ch, cost),
        None => Cell::impassable(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_glyphs() {
        assert_eq!(glyph_cost('.'), Some(1));
        assert_eq!(glyph_cost(':'), Some(2));
        assert_eq!(glyph_cost('='), Some(5));
        assert_eq!(glyph_cost('+'), Some(12));
        assert_eq!(glyph_cost('#'), None);
    }

    #[test]
    fn unknown_glyphs_are_walls() {
        let c = cell_for('x');
        assert!(c.is_impassable());
        assert_eq!(c.glyph, 'x');
        assert!(cell_for(' ').is_impassable());
    }
}
