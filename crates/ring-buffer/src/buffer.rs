//! Ring Buffer Implementation

use crate::BufferError;

/// Default buffer capacity (5 readings)
pub const DEFAULT_CAPACITY: usize = 5;

/// Fixed-capacity FIFO buffer, oldest value evicted first
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Slots in write order until full, then overwritten in place
    storage: Vec<T>,
    /// Capacity of the buffer
    capacity: usize,
    /// Index of the oldest value once the buffer is full
    head: usize,
    /// Total values written (for statistics)
    total_written: usize,
}

impl<T> RingBuffer<T> {
    /// Create a new ring buffer with given capacity
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        Ok(Self {
            storage: Vec::with_capacity(capacity),
            capacity,
            head: 0,
            total_written: 0,
        })
    }

    /// Create a buffer with default capacity (5 values)
    pub fn with_default_capacity() -> Self {
        Self {
            storage: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            head: 0,
            total_written: 0,
        }
    }

    /// Push a value into the buffer, returning the evicted oldest value if full
    pub fn push(&mut self, value: T) -> Option<T> {
        self.total_written += 1;

        if self.storage.len() < self.capacity {
            self.storage.push(value);
            return None;
        }

        let evicted = std::mem::replace(&mut self.storage[self.head], value);
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    /// Iterate values oldest-first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + Clone + '_ {
        let (newer, older) = self.storage.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Get the number of values currently in the buffer
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.storage.len() == self.capacity
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        self.len() as f64 / self.capacity as f64
    }

    /// Get total values written (for statistics)
    pub fn total_written(&self) -> usize {
        self.total_written
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.storage.clear();
        self.head = 0;
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copy the contents out, oldest-first
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Read the last N values (most recent first)
    pub fn read_last(&self, count: usize) -> Vec<T> {
        self.iter().rev().take(count).cloned().collect()
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
