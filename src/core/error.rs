//! Error types for kitchen operations.

use thiserror::Error;

use crate::util::serde::{FoodId, OrderId};

/// Errors produced by kitchen components.
#[derive(Debug, Error)]
pub enum KitchenError {
    /// An order referenced a food id missing from the catalog.
    #[error("unknown food id {food_id} in order {order_id}")]
    UnknownFood {
        /// Order being expanded.
        order_id: OrderId,
        /// Food id that failed lookup.
        food_id: FoodId,
    },
    /// A completion arrived for an order that was never received.
    #[error("unknown order {0}")]
    UnknownOrder(OrderId),
    /// An inbound order body could not be parsed.
    #[error("malformed order: {0}")]
    MalformedOrder(#[source] serde_json::Error),
    /// An order with this id is already in progress.
    #[error("duplicate order {0}")]
    DuplicateOrder(OrderId),
    /// An order without items can never become ready.
    #[error("order {0} has no items")]
    EmptyOrder(OrderId),
    /// Kitchen configuration, catalog, or roster is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The notifier did not acknowledge a finished order.
    #[error("delivery failed for order {order_id}: {reason}")]
    Delivery {
        /// Order that was being delivered.
        order_id: OrderId,
        /// Transport-specific reason.
        reason: String,
    },
    /// The kitchen has been shut down.
    #[error("kitchen has been shut down")]
    Shutdown,
    /// A cook worker thread could not be started.
    #[error("failed to spawn cook worker: {0}")]
    WorkerSpawn(#[from] std::io::Error),
    /// A bounded wait elapsed.
    #[error("operation timed out")]
    Timeout,
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
