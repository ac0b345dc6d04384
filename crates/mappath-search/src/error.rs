use std::fmt;

use mappath_core::Point;
use mappath_pq::QueueError;

/// Errors that abort a search.
///
/// An unreachable goal is not an error; it is reported as
/// [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The priority queue's storage could not be allocated.
    OutOfMemory { capacity: usize },
    /// The frontier outgrew the configured queue capacity.
    QueueFull { capacity: usize },
    /// An endpoint is on the border, outside the grid, or (for the start)
    /// impassable.
    InvalidEndpoint { pos: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { capacity } => {
                write!(f, "not enough memory for a queue of {capacity} entries")
            }
            Self::QueueFull { capacity } => {
                write!(f, "min heap is full ({capacity} entries)")
            }
            Self::InvalidEndpoint { pos } => write!(f, "{pos} is not a usable endpoint"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<QueueError> for SearchError {
    fn from(e: QueueError) -> Self {
        match e {
            QueueError::OutOfMemory { capacity } => Self::OutOfMemory { capacity },
            QueueError::Full { capacity } => Self::QueueFull { capacity },
        }
    }
}
