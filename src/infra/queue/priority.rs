//! Global priority work queue using a binary heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::core::order::Item;
use crate::core::{ItemQueue, KitchenError};

/// Wrapper making items orderable: most urgent first, FIFO within a priority.
struct QueuedItem {
    item: Item,
    seq: u64,
}

impl PartialEq for QueuedItem {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for QueuedItem {}

impl PartialOrd for QueuedItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: a lower priority value or an earlier sequence ranks higher.
        other
            .item
            .priority
            .cmp(&self.item.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
struct HeapState {
    heap: BinaryHeap<QueuedItem>,
    next_seq: u64,
    closed: bool,
}

/// Queue that re-sorts across orders: every pop returns the most urgent
/// waiting item.
pub struct PriorityQueue {
    state: Mutex<HeapState>,
    not_empty: Condvar,
}

impl PriorityQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(HeapState::default()),
            not_empty: Condvar::new(),
        }
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemQueue for PriorityQueue {
    fn push(&self, item: Item) -> Result<(), KitchenError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(KitchenError::Shutdown);
        }
        let seq = state.next_seq;
        state.next_seq += 1;
        state.heap.push(QueuedItem { item, seq });
        drop(state);
        self.not_empty.notify_one();
        Ok(())
    }

    fn push_batch(&self, items: Vec<Item>) -> Result<(), KitchenError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(KitchenError::Shutdown);
        }
        for item in items {
            let seq = state.next_seq;
            state.next_seq += 1;
            state.heap.push(QueuedItem { item, seq });
        }
        drop(state);
        self.not_empty.notify_all();
        Ok(())
    }

    fn pop(&self) -> Option<Item> {
        let mut state = self.state.lock();
        loop {
            if let Some(queued) = state.heap.pop() {
                return Some(queued.item);
            }
            if state.closed {
                return None;
            }
            self.not_empty.wait(&mut state);
        }
    }

    fn pop_timeout(&self, timeout: Duration) -> Result<Item, KitchenError> {
        let deadline = Instant::now() + timeout;
        let mut state = self.state.lock();
        loop {
            if let Some(queued) = state.heap.pop() {
                return Ok(queued.item);
            }
            if state.closed {
                return Err(KitchenError::Shutdown);
            }
            if self.not_empty.wait_until(&mut state, deadline).timed_out() {
                return state
                    .heap
                    .pop()
                    .map(|queued| queued.item)
                    .ok_or(KitchenError::Timeout);
            }
        }
    }

    fn len(&self) -> usize {
        self.state.lock().heap.len()
    }

    fn close(&self) {
        self.state.lock().closed = true;
        self.not_empty.notify_all();
    }
}
