//! Remaining-time estimation for in-progress orders.
//!
//! The estimate is a throughput heuristic: unassisted work is spread over the
//! cooks' combined proficiency, equipment work over the equipment slots, and
//! the result is scaled by how much queue pressure sits ahead of the order's
//! remaining items.

use std::collections::HashMap;

use crate::core::kitchen::KitchenState;
use crate::util::serde::{FoodId, OrderId};

/// Inputs of the remaining-time formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateTerms {
    /// Summed duration of unfinished items that need no equipment (A).
    pub unassisted_time: f64,
    /// Sum of all cooks' proficiency ratings (B).
    pub proficiency_sum: f64,
    /// Summed duration of unfinished items that need equipment (C).
    pub equipment_time: f64,
    /// Total equipment slots across all classes (D).
    pub equipment_capacity: f64,
    /// Items currently waiting in the work queue (E).
    pub queue_depth: f64,
    /// Unfinished items of the order (F).
    pub remaining_items: f64,
}

impl EstimateTerms {
    /// `(A/B + C/D) * (E+F) / F`, or 0 when nothing remains.
    #[must_use]
    pub fn remaining_time(&self) -> f64 {
        if self.remaining_items <= 0.0 {
            return 0.0;
        }
        (self.unassisted_time / self.proficiency_sum + self.equipment_time / self.equipment_capacity)
            * (self.queue_depth + self.remaining_items)
            / self.remaining_items
    }
}

/// Food ids of `ordered` not covered by `completed`, counting repeats.
fn not_ready(ordered: &[FoodId], completed: &[FoodId]) -> Vec<FoodId> {
    let mut done: HashMap<FoodId, usize> = HashMap::with_capacity(completed.len());
    for &food_id in completed {
        *done.entry(food_id).or_default() += 1;
    }
    ordered
        .iter()
        .copied()
        .filter(|food_id| match done.get_mut(food_id) {
            Some(n) if *n > 0 => {
                *n -= 1;
                false
            }
            _ => true,
        })
        .collect()
}

/// Gather the formula inputs for an order.
///
/// Returns `None` when the order is unknown or nothing has been recorded for
/// it yet.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate_terms(state: &KitchenState, order_id: OrderId) -> Option<EstimateTerms> {
    let order = state.orders.get(order_id)?;
    let completed = state.tracker.completed_foods(order_id)?;

    let remaining = not_ready(&order.items, &completed);
    let mut unassisted_time = 0.0;
    let mut equipment_time = 0.0;
    for spec in remaining.iter().filter_map(|&id| state.catalog.get(id)) {
        let time = f64::from(spec.preparation_time);
        if spec.cooking_apparatus.is_some() {
            equipment_time += time;
        } else {
            unassisted_time += time;
        }
    }

    Some(EstimateTerms {
        unassisted_time,
        proficiency_sum: f64::from(state.roster.total_proficiency()),
        equipment_time,
        equipment_capacity: f64::from(state.equipment.total_capacity()),
        queue_depth: state.queue.len() as f64,
        remaining_items: remaining.len() as f64,
    })
}

/// Estimated remaining preparation time for an order, in time units.
///
/// 0 when the order is unknown, has no recorded progress yet, or has nothing
/// left. Proficiency and capacity are validated non-zero when the kitchen is
/// built, so the formula never divides by zero.
#[must_use]
pub fn estimate_remaining(state: &KitchenState, order_id: OrderId) -> f64 {
    estimate_terms(state, order_id).map_or(0.0, |terms| terms.remaining_time())
}
