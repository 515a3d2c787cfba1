//! Wire models for the inbound order transport and the outbound hand-off.
//!
//! Field names follow the dining-hall protocol (camelCase). Routing and HTTP
//! handling live outside this crate.

use serde::{Deserialize, Serialize};

use crate::core::{CompletionRecord, FinishedOrder, Kitchen, KitchenError, Order};
use crate::util::serde::OrderId;

/// Acknowledgement returned to the caller that submitted an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAccepted {
    /// Accepted order.
    pub order_id: OrderId,
    /// Items pushed onto the work queue.
    pub queued_items: usize,
}

/// Outbound body for a finished order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishedOrderPayload {
    /// The original order fields.
    #[serde(flatten)]
    pub order: Order,
    /// Whole seconds between arrival and completion.
    pub cooking_time: u64,
    /// One entry per item, in completion order.
    pub cooking_details: Vec<CompletionRecord>,
}

impl From<&FinishedOrder> for FinishedOrderPayload {
    fn from(finished: &FinishedOrder) -> Self {
        Self {
            order: finished.order.as_ref().clone(),
            cooking_time: finished.cooking_time.as_secs(),
            cooking_details: finished.cooking_details.clone(),
        }
    }
}

/// Remaining-time estimate response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    /// Order queried.
    pub order_id: OrderId,
    /// Estimated remaining time in preparation units.
    pub estimated_waiting_time: f64,
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Parse an inbound order body.
///
/// # Errors
///
/// `KitchenError::MalformedOrder` if the body is not a valid order.
pub fn parse_order(body: &str) -> Result<Order, KitchenError> {
    serde_json::from_str(body).map_err(KitchenError::MalformedOrder)
}

/// Submit an order to the kitchen.
///
/// # Errors
///
/// Intake errors are returned unchanged so the transport can map each kind
/// to its own status.
pub fn submit_order(kitchen: &Kitchen, order: Order) -> Result<OrderAccepted, KitchenError> {
    let order = kitchen.receive_order(order)?;
    Ok(OrderAccepted {
        order_id: order.order_id,
        queued_items: order.item_count(),
    })
}

/// Build the estimate response for an order.
#[must_use]
pub fn estimate(kitchen: &Kitchen, order_id: OrderId) -> EstimateResponse {
    EstimateResponse {
        order_id,
        estimated_waiting_time: kitchen.estimate_remaining(order_id),
    }
}

/// Return a health payload: healthy while the kitchen accepts orders.
#[must_use]
pub fn health(kitchen: &Kitchen) -> Health {
    Health {
        ok: kitchen.state().is_accepting(),
    }
}
