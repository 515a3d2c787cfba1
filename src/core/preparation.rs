//! How a cook spends time on an item.

use std::time::Duration;

use async_trait::async_trait;

use crate::core::catalog::Cook;
use crate::core::order::Item;

/// Performs the timed work for one item while its equipment slot is held.
///
/// Called from a cook's worker thread inside that worker's single-threaded
/// tokio runtime, so implementations may await timers freely without
/// blocking other cooks.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use kitchen_scheduler::core::{Cook, Item, Preparation};
///
/// #[derive(Clone)]
/// struct Instant;
///
/// #[async_trait]
/// impl Preparation for Instant {
///     async fn prepare(&self, _item: &Item, _cook: &Cook) {}
/// }
/// ```
#[async_trait]
pub trait Preparation: Send + Sync + Clone + 'static {
    /// Prepare `item`. Completion is recorded when this returns.
    async fn prepare(&self, item: &Item, cook: &Cook);
}

/// Sleeps for the item's preparation time scaled by a fixed time unit.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedPreparation {
    time_unit: Duration,
}

impl SimulatedPreparation {
    /// Create a simulation where one preparation unit lasts `time_unit`.
    #[must_use]
    pub const fn new(time_unit: Duration) -> Self {
        Self { time_unit }
    }

    /// Wall-clock time an item occupies its cook.
    #[must_use]
    pub fn duration_of(&self, item: &Item) -> Duration {
        self.time_unit.saturating_mul(item.preparation_time)
    }
}

#[async_trait]
impl Preparation for SimulatedPreparation {
    async fn prepare(&self, item: &Item, cook: &Cook) {
        let duration = self.duration_of(item);
        tracing::trace!(
            cook_id = cook.id,
            order_id = item.order_id,
            food_id = item.food_id,
            duration_ms = duration.as_millis(),
            "preparing item"
        );
        tokio::time::sleep(duration).await;
    }
}
