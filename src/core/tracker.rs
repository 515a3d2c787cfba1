//! Completion bookkeeping and the order-readiness test.
//!
//! Completion records live in a fixed set of shards keyed by order id. The
//! append, the readiness check, and the removal of a ready order all happen
//! under one shard lock, so exactly one completion observes the order as
//! ready. The hand-off to the notifier runs after that lock is released.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::core::kitchen::KitchenState;
use crate::core::order::{CompletionRecord, FinishedOrder, Item, Order};
use crate::core::KitchenError;
use crate::util::clock::elapsed_ms;
use crate::util::serde::{CookId, FoodId, OrderId};

/// Number of lock shards for completion state.
pub const DEFAULT_SHARDS: usize = 16;

type Shard = Mutex<HashMap<OrderId, Vec<CompletionRecord>>>;

/// Outcome of recording one completion in the tracker.
#[derive(Debug)]
pub enum Progress {
    /// More items are outstanding.
    Pending {
        /// Items recorded so far.
        completed: usize,
        /// Items in the order.
        total: usize,
    },
    /// This completion finished the order; its state has been removed.
    Ready(FinishedOrder),
}

/// What happened to a completion once hand-off was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOff {
    /// The order still has unfinished items.
    Pending {
        /// Items recorded so far.
        completed: usize,
        /// Items in the order.
        total: usize,
    },
    /// The order was finished and the notifier acknowledged it.
    Delivered,
    /// The order was finished but the notifier did not acknowledge it. It is
    /// still considered reported.
    Unacknowledged,
}

/// Per-order completion records (the order completion state).
#[derive(Debug)]
pub struct CompletionTracker {
    shards: Box<[Shard]>,
}

impl Default for CompletionTracker {
    fn default() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }
}

impl CompletionTracker {
    /// Create a tracker with the default shard count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker with `shards` locks. One shard gives a single global
    /// critical section.
    #[must_use]
    pub fn with_shards(shards: usize) -> Self {
        let shards = (0..shards.max(1))
            .map(|_| Mutex::new(HashMap::new()))
            .collect();
        Self { shards }
    }

    fn shard(&self, order_id: OrderId) -> &Shard {
        &self.shards[order_id as usize % self.shards.len()]
    }

    /// Append a record for `order` and, if every item is now recorded, remove
    /// the order's state and return the finished order.
    pub fn record(&self, order: &Arc<Order>, record: CompletionRecord) -> Progress {
        let total = order.item_count();
        let mut shard = self.shard(order.order_id).lock();
        let records = shard.entry(order.order_id).or_default();
        records.push(record);
        let completed = records.len();
        if completed < total {
            return Progress::Pending { completed, total };
        }

        // Removal under the same lock is the single point that makes
        // hand-off at-most-once.
        let cooking_details = shard.remove(&order.order_id).unwrap_or_default();
        drop(shard);
        let elapsed = u64::try_from(elapsed_ms(order.received_at_ms)).unwrap_or(u64::MAX);
        Progress::Ready(FinishedOrder {
            order: Arc::clone(order),
            cooking_time: Duration::from_millis(elapsed),
            cooking_details,
        })
    }

    /// Food ids recorded so far for an order, or `None` if nothing has been
    /// recorded (or the order was already handed off).
    #[must_use]
    pub fn completed_foods(&self, order_id: OrderId) -> Option<Vec<FoodId>> {
        self.shard(order_id)
            .lock()
            .get(&order_id)
            .map(|records| records.iter().map(|r| r.food_id).collect())
    }

    /// Number of recorded items for an order.
    #[must_use]
    pub fn completed_count(&self, order_id: OrderId) -> usize {
        self.shard(order_id).lock().get(&order_id).map_or(0, Vec::len)
    }

    /// Whether the tracker holds state for an order.
    #[must_use]
    pub fn is_tracking(&self, order_id: OrderId) -> bool {
        self.shard(order_id).lock().contains_key(&order_id)
    }

    /// Number of orders with partial progress.
    #[must_use]
    pub fn tracked_orders(&self) -> usize {
        self.shards.iter().map(|s| s.lock().len()).sum()
    }
}

/// Record that `cook_id` finished `item`, handing the order off if it is now
/// complete.
///
/// Fails with `KitchenError::UnknownOrder` if the order was never received.
/// A notifier error is logged and reported as [`HandOff::Unacknowledged`];
/// the order is not redelivered.
pub fn record_completion(
    state: &KitchenState,
    item: &Item,
    cook_id: CookId,
) -> Result<HandOff, KitchenError> {
    let order = state
        .orders
        .get(item.order_id)
        .ok_or(KitchenError::UnknownOrder(item.order_id))?;

    let record = CompletionRecord {
        food_id: item.food_id,
        cook_id,
    };
    let finished = match state.tracker.record(&order, record) {
        Progress::Pending { completed, total } => {
            tracing::debug!(
                order_id = order.order_id,
                food_id = item.food_id,
                cook_id,
                completed,
                total,
                "item recorded"
            );
            return Ok(HandOff::Pending { completed, total });
        }
        Progress::Ready(finished) => finished,
    };

    state.orders.remove(order.order_id);
    match state.notifier.deliver(&finished) {
        Ok(()) => {
            state.counters.record_delivered();
            tracing::info!(
                order_id = finished.order_id(),
                cooking_time_ms = finished.cooking_time.as_millis(),
                items = finished.cooking_details.len(),
                channel = state.notifier.channel_name(),
                "finished order handed off"
            );
            Ok(HandOff::Delivered)
        }
        Err(e) => {
            state.counters.record_delivery_failure();
            tracing::error!(
                order_id = finished.order_id(),
                channel = state.notifier.channel_name(),
                error = %e,
                "finished order was not acknowledged; not retrying"
            );
            Ok(HandOff::Unacknowledged)
        }
    }
}
