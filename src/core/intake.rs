//! Order intake: arrival stamping, registration, and expansion into items.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::catalog::Catalog;
use crate::core::kitchen::KitchenState;
use crate::core::order::{Item, Order};
use crate::core::KitchenError;
use crate::util::clock::now_ms;
use crate::util::serde::OrderId;

/// Orders received and not yet reported.
///
/// Read-mostly: intake inserts, the tracker and estimator look up, and hand-off
/// removes.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    orders: RwLock<HashMap<OrderId, Arc<Order>>>,
}

impl OrderRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an order, rejecting an id that is still in progress.
    pub fn register(&self, order: Order) -> Result<Arc<Order>, KitchenError> {
        let mut orders = self.orders.write();
        if orders.contains_key(&order.order_id) {
            return Err(KitchenError::DuplicateOrder(order.order_id));
        }
        let order = Arc::new(order);
        orders.insert(order.order_id, Arc::clone(&order));
        Ok(order)
    }

    /// Look up an in-progress order.
    #[must_use]
    pub fn get(&self, order_id: OrderId) -> Option<Arc<Order>> {
        self.orders.read().get(&order_id).cloned()
    }

    /// Drop an order from the registry.
    pub fn remove(&self, order_id: OrderId) -> Option<Arc<Order>> {
        self.orders.write().remove(&order_id)
    }

    /// Orders currently in progress.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    /// Whether no orders are in progress.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}

/// Map every food id of `order` to a work item, sorted by priority.
///
/// The sort is stable, so items of equal priority keep the customer's order.
pub fn expand(order: &Order, catalog: &Catalog) -> Result<Vec<Item>, KitchenError> {
    let mut items = order
        .items
        .iter()
        .map(|&food_id| {
            catalog
                .get(food_id)
                .map(|spec| Item::for_order(order, spec))
                .ok_or(KitchenError::UnknownFood {
                    order_id: order.order_id,
                    food_id,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    items.sort_by_key(|item| item.priority);
    Ok(items)
}

/// Accept an order: stamp arrival, register it, and push its items.
///
/// Validation happens before registration and the items are pushed as one
/// batch, so a rejected order leaves no trace in the registry or the queue.
/// The intake gate is held throughout; closing the kitchen waits for it.
pub fn receive_order(state: &KitchenState, mut order: Order) -> Result<Arc<Order>, KitchenError> {
    let _gate = state.intake_gate.read();
    if !state.is_accepting() {
        return Err(KitchenError::Shutdown);
    }
    if order.items.is_empty() {
        return Err(KitchenError::EmptyOrder(order.order_id));
    }
    let items = expand(&order, &state.catalog)?;

    order.received_at_ms = now_ms();
    let order = state.orders.register(order)?;
    tracing::info!(
        order_id = order.order_id,
        items = items.len(),
        priority = %order.priority,
        "received order"
    );

    let queued = items.len();
    if let Err(e) = state.queue.push_batch(items) {
        state.orders.remove(order.order_id);
        tracing::warn!(order_id = order.order_id, error = %e, "order rejected during enqueue");
        return Err(e);
    }
    state.counters
        .record_enqueued(u64::try_from(queued).unwrap_or(u64::MAX));
    state.counters.record_order_received();
    Ok(order)
}
