//! Orders, the work items derived from them, and completion records.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::catalog::FoodSpec;
use crate::util::serde::{CookId, Equipment, FoodId, OrderId, Priority};

/// An order as delivered by the inbound transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier.
    pub order_id: OrderId,
    /// Food ids, in the order the customer listed them. Repeats are allowed.
    pub items: Vec<FoodId>,
    /// Lower is more urgent.
    pub priority: Priority,
    /// Maximum acceptable wait, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_wait: Option<f64>,
    /// Dining-hall table, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<u32>,
    /// Dining-hall waiter, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiter_id: Option<u32>,
    /// Arrival stamp in ms since epoch; set by intake.
    #[serde(skip)]
    pub received_at_ms: u128,
}

impl Order {
    /// Create an order with no passthrough fields.
    #[must_use]
    pub const fn new(order_id: OrderId, items: Vec<FoodId>, priority: Priority) -> Self {
        Self {
            order_id,
            items,
            priority,
            max_wait: None,
            table_id: None,
            waiter_id: None,
            received_at_ms: 0,
        }
    }

    /// Number of items the order expands into.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// One food's unit of work, carrying its order's priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Food being prepared.
    pub food_id: FoodId,
    /// Owning order.
    pub order_id: OrderId,
    /// Priority inherited from the order.
    pub priority: Priority,
    /// Equipment held while cooking.
    pub equipment: Option<Equipment>,
    /// Preparation duration in time units.
    pub preparation_time: u32,
    /// Complexity copied from the catalog.
    pub complexity: u32,
}

impl Item {
    /// Derive the work item for `spec` within `order`.
    #[must_use]
    pub const fn for_order(order: &Order, spec: &FoodSpec) -> Self {
        Self {
            food_id: spec.id,
            order_id: order.order_id,
            priority: order.priority,
            equipment: spec.cooking_apparatus,
            preparation_time: spec.preparation_time,
            complexity: spec.complexity,
        }
    }
}

/// Proof that one item was finished, tagged with the cook who finished it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    /// Food that was finished.
    pub food_id: FoodId,
    /// Cook that finished it.
    pub cook_id: CookId,
}

/// A fully prepared order, ready for hand-off.
#[derive(Debug, Clone)]
pub struct FinishedOrder {
    /// The original order, including its arrival stamp.
    pub order: Arc<Order>,
    /// Time between arrival and the last completion.
    pub cooking_time: Duration,
    /// One record per item, in completion order.
    pub cooking_details: Vec<CompletionRecord>,
}

impl FinishedOrder {
    /// Order identifier shortcut.
    #[must_use]
    pub fn order_id(&self) -> OrderId {
        self.order.order_id
    }
}
