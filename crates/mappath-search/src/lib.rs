//! Uniform-cost search (Dijkstra on a 4-connected grid) from one cell to
//! another.
//!
//! The engine seeds a bounded [`PriorityQueue`](mappath_pq::PriorityQueue)
//! with the start cell, repeatedly expands the cheapest frontier cell and
//! relaxes its neighbours, and stops when the goal is dequeued or the queue
//! runs dry. Improvements to an already-queued cell push a duplicate entry;
//! the outdated one is skipped when it surfaces.
//!
//! | Item | Purpose |
//! |---|---|
//! | [`ucs_path`] | Search with defaults and no observer |
//! | [`ucs_path_with`] | Search with a [`SearchConfig`] and an [`Observer`] |
//! | [`SearchOutcome`] | [`Path`] found, or no path |
//! | [`SearchError`] | Allocation, capacity and endpoint failures |

mod config;
mod error;
mod observer;
mod outcome;
mod ucs;

pub use config::{QueueCapacity, SearchConfig};
pub use error::SearchError;
pub use observer::{NoObserver, Observer, SearchEvent};
pub use outcome::{Path, SearchOutcome};
pub use ucs::{ucs_path, ucs_path_with};
