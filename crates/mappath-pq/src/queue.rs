use crate::error::QueueError;

/// One `(value, priority)` pair held by the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeapEntry {
    pub value: usize,
    pub priority: u32,
}

/// Fixed-capacity binary min-heap.
///
/// Entries live at indices `1..=len`; slot 0 is a reserved sentinel so that
/// the parent of `i` is `i / 2` and its children are `2i` and `2i + 1`.
/// For every `i > 1`, `entries[i].priority >= entries[i / 2].priority`.
///
/// Entries with equal priority come out in no particular order.
#[derive(Debug)]
pub struct PriorityQueue {
    entries: Vec<HeapEntry>,
    capacity: usize,
}

impl PriorityQueue {
    /// Allocate a queue that can hold `capacity` entries.
    ///
    /// The whole backing array is reserved up front; the queue never
    /// reallocates afterwards.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        let slots = capacity
            .checked_add(1)
            .ok_or(QueueError::OutOfMemory { capacity })?;
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(slots)
            .map_err(|_| QueueError::OutOfMemory { capacity })?;
        entries.push(HeapEntry::default());
        Ok(Self { entries, capacity })
    }

    /// Number of entries currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert `value` with `priority`.
    ///
    /// Fails with [`QueueError::Full`] when the queue is at capacity, leaving
    /// it untouched.
    pub fn enqueue(&mut self, value: usize, priority: u32) -> Result<(), QueueError> {
        if self.len() >= self.capacity {
            return Err(QueueError::Full {
                capacity: self.capacity,
            });
        }
        self.entries.push(HeapEntry { value, priority });
        self.sift_up(self.len());
        Ok(())
    }

    /// The entry with the smallest priority, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<HeapEntry> {
        self.entries.get(1).copied()
    }

    /// Remove and return the entry with the smallest priority.
    pub fn dequeue(&mut self) -> Option<HeapEntry> {
        let min = self.peek()?;
        self.delete_min();
        Some(min)
    }

    /// Remove the entry with the smallest priority without returning it.
    /// Returns `false` if the queue was empty.
    pub fn delete_min(&mut self) -> bool {
        match self.len() {
            0 => false,
            1 => {
                self.entries.truncate(1);
                true
            }
            n => {
                self.entries.swap(1, n);
                self.entries.truncate(n);
                self.sift_down(1);
                true
            }
        }
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.truncate(1);
    }

    /// Whether the min-heap property holds for every entry.
    pub fn is_heap(&self) -> bool {
        (2..=self.len()).all(|i| self.priority(i / 2) <= self.priority(i))
    }

    /// Entries in heap order (root first).
    pub fn entries(&self) -> &[HeapEntry] {
        &self.entries[1..]
    }

    #[inline]
    fn priority(&self, i: usize) -> u32 {
        self.entries[i].priority
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 1 {
            let parent = i / 2;
            if self.priority(parent) <= self.priority(i) {
                break;
            }
            self.entries.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.len();
        loop {
            let left = i * 2;
            if left > len {
                break;
            }
            let right = left + 1;
            // Ties between the children go left.
            let child = if right <= len && self.priority(right) < self.priority(left) {
                right
            } else {
                left
            };
            if self.priority(child) >= self.priority(i) {
                break;
            }
            self.entries.swap(i, child);
            i = child;
        }
    }
}
