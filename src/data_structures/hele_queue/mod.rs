// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hele FIFO Work Queue
//!
//! A single-threaded first-in, first-out queue of owned values. It drives
//! the breadth-first traversal of the Ulu Trie, where each value carries an
//! owned prefix buffer.
//!
//! # Ownership
//!
//! The queue owns every value it holds. [`HeleQueue::pop_front`] moves the
//! front value out to the caller, who becomes responsible for it. Values
//! still resident when the queue is dropped (or drained) are released with
//! it, so an early exit from a traversal never leaks a frontier entry.

use std::collections::VecDeque;

/// Error types for Hele Queue operations
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum HeleQueueError {
    /// Queue is empty
    #[error("Queue is empty")]
    QueueEmpty,
}

/// Result type for Hele Queue operations
pub type HeleQueueResult<T> = Result<T, HeleQueueError>;

/// Configuration for the Hele Queue
#[derive(Debug, Clone)]
pub struct HeleQueueConfig {
    /// Number of slots reserved up front
    pub initial_capacity: usize,
}

impl Default for HeleQueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
        }
    }
}

/// HeleQueue is a FIFO of owned values.
///
/// Values are delivered in exactly the order they were pushed, each one
/// exactly once.
///
/// # Type Parameters
///
/// * `T` - Type of items stored in the queue.
#[derive(Debug)]
pub struct HeleQueue<T> {
    /// Queued values, front first
    items: VecDeque<T>,

    /// Largest number of values held at once
    high_water_mark: usize,
}

impl<T> HeleQueue<T> {
    /// Creates a new empty `HeleQueue` with default configuration.
    pub fn new() -> Self {
        Self::with_config(HeleQueueConfig::default())
    }

    /// Creates a new empty `HeleQueue` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the queue.
    pub fn with_config(config: HeleQueueConfig) -> Self {
        Self {
            items: VecDeque::with_capacity(config.initial_capacity),
            high_water_mark: 0,
        }
    }

    /// Creates a queue holding a single initial value.
    pub fn with_initial(value: T) -> Self {
        let mut queue = Self::new();
        queue.push_back(value);
        queue
    }

    /// Returns the current number of values in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the largest number of values the queue has held at once.
    pub fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }

    /// Appends a value at the back of the queue.
    pub fn push_back(&mut self, value: T) {
        self.items.push_back(value);
        self.high_water_mark = self.high_water_mark.max(self.items.len());
    }

    /// Returns a reference to the front value without removing it.
    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Removes the front value and hands its ownership to the caller.
    ///
    /// # Returns
    ///
    /// Some(T) if a value was dequeued, None if the queue is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Removes the front value, reporting an empty queue as an error.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The dequeued value.
    /// * `Err(HeleQueueError::QueueEmpty)` - The queue is empty.
    pub fn try_pop_front(&mut self) -> HeleQueueResult<T> {
        self.pop_front().ok_or(HeleQueueError::QueueEmpty)
    }

    /// Removes every remaining value in FIFO order.
    ///
    /// Values not consumed by the caller are dropped when the iterator is.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..)
    }
}

impl<T> Default for HeleQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for HeleQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}
