//! Work queue abstraction shared by intake and the cook workers.

use std::time::Duration;

use crate::core::order::Item;
use crate::core::KitchenError;

/// Concurrency-safe, unbounded queue of work items.
///
/// `pop` suspends the calling worker while the queue is empty. Once the
/// queue is closed, pushes are rejected and `pop` returns `None` after the
/// remaining items are drained.
pub trait ItemQueue: Send + Sync {
    /// Append an item.
    fn push(&self, item: Item) -> Result<(), KitchenError>;
    /// Append every item of a batch, or none of them if the queue is closed.
    fn push_batch(&self, items: Vec<Item>) -> Result<(), KitchenError>;
    /// Take the next item, blocking while empty. `None` once closed and drained.
    fn pop(&self) -> Option<Item>;
    /// Take the next item, waiting at most `timeout`.
    ///
    /// Returns `KitchenError::Timeout` if nothing arrived and
    /// `KitchenError::Shutdown` if the queue is closed and drained.
    fn pop_timeout(&self, timeout: Duration) -> Result<Item, KitchenError>;
    /// Items currently waiting.
    fn len(&self) -> usize;
    /// Whether no items are waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Stop accepting items and wake blocked poppers.
    fn close(&self);
}
