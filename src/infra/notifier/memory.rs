//! In-memory notifier for development and testing.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::core::order::FinishedOrder;
use crate::core::{KitchenError, Notifier};
use crate::util::serde::OrderId;

/// Stores every finished order it is handed.
///
/// When built with [`rejecting`](Self::rejecting) it still records each
/// attempt but reports non-acknowledgement.
#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    delivered: Mutex<Vec<FinishedOrder>>,
    arrived: Condvar,
    reject: bool,
}

impl InMemoryNotifier {
    /// Create an acknowledging notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notifier that records but never acknowledges.
    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    /// Snapshot of everything handed over so far.
    #[must_use]
    pub fn delivered(&self) -> Vec<FinishedOrder> {
        self.delivered.lock().clone()
    }

    /// How many hand-offs targeted `order_id`.
    #[must_use]
    pub fn count_for(&self, order_id: OrderId) -> usize {
        self.delivered
            .lock()
            .iter()
            .filter(|f| f.order_id() == order_id)
            .count()
    }

    /// Block until at least `count` orders arrived or `timeout` elapses.
    /// Returns whether the count was reached.
    pub fn wait_for(&self, count: usize, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut delivered = self.delivered.lock();
        while delivered.len() < count {
            if self.arrived.wait_until(&mut delivered, deadline).timed_out() {
                return delivered.len() >= count;
            }
        }
        true
    }
}

impl Notifier for InMemoryNotifier {
    fn deliver(&self, finished: &FinishedOrder) -> Result<(), KitchenError> {
        self.delivered.lock().push(finished.clone());
        self.arrived.notify_all();
        if self.reject {
            return Err(KitchenError::Delivery {
                order_id: finished.order_id(),
                reason: "rejected by in-memory notifier".into(),
            });
        }
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "in_memory"
    }
}
