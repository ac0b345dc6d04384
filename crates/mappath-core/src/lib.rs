//! **mappath-core**: foundational types for weighted grid pathfinding.
//!
//! This crate provides the geometry primitives, the per-cell search state and
//! the bordered [`Grid`] arena that the priority queue and the search engine
//! operate on. Cells are stored in one flat vector; predecessor links are
//! indices into that vector.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellFlags, Cost, UNREACHABLE};
pub use geom::{Point, Range};
pub use grid::Grid;
