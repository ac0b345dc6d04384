//! A bounded binary min-heap priority queue.
//!
//! [`PriorityQueue`] stores `(value, priority)` pairs in a 1-indexed array
//! whose capacity is fixed at construction. It never grows: inserting into a
//! full queue fails with [`QueueError::Full`] and leaves the queue unchanged.
//!
//! There is no decrease-key. A caller that wants to lower an element's
//! priority pushes a second entry and discards the stale one when it comes
//! out (lazy deletion).
//!
//! ```
//! use mappath_pq::PriorityQueue;
//!
//! let mut pq = PriorityQueue::new(4).unwrap();
//! pq.enqueue(7, 30).unwrap();
//! pq.enqueue(8, 10).unwrap();
//! let e = pq.dequeue().unwrap();
//! assert_eq!((e.value, e.priority), (8, 10));
//! ```

mod error;
mod queue;

pub use error::QueueError;
pub use queue::{HeapEntry, PriorityQueue};
