//! Hand-off boundary for finished orders.

use crate::core::order::FinishedOrder;
use crate::core::KitchenError;

/// Receives each finished order exactly once.
///
/// `Ok(())` is the acknowledgement. An error is logged by the caller and the
/// order is not redelivered.
pub trait Notifier: Send + Sync {
    /// Deliver a finished order downstream.
    fn deliver(&self, finished: &FinishedOrder) -> Result<(), KitchenError>;

    /// Human-readable name for this channel, used in logs.
    fn channel_name(&self) -> &str {
        "notifier"
    }
}
