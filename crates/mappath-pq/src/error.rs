use std::fmt;

/// Errors reported by [`PriorityQueue`](crate::PriorityQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Backing storage for `capacity` entries could not be allocated.
    OutOfMemory { capacity: usize },
    /// The queue already holds `capacity` entries.
    Full { capacity: usize },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { capacity } => {
                write!(f, "cannot allocate a priority queue of {capacity} entries")
            }
            Self::Full { capacity } => write!(f, "priority queue is full ({capacity} entries)"),
        }
    }
}

impl std::error::Error for QueueError {}
