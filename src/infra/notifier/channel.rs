//! Notifier forwarding finished orders over a crossbeam channel.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::core::order::FinishedOrder;
use crate::core::{KitchenError, Notifier};

/// Forwards finished orders to a consumer thread, such as an outbound
/// transport. Delivery fails once the receiver is dropped.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<FinishedOrder>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver its orders arrive on.
    #[must_use]
    pub fn new() -> (Self, Receiver<FinishedOrder>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn deliver(&self, finished: &FinishedOrder) -> Result<(), KitchenError> {
        self.tx
            .send(finished.clone())
            .map_err(|_| KitchenError::Delivery {
                order_id: finished.order_id(),
                reason: "receiver disconnected".into(),
            })
    }

    fn channel_name(&self) -> &str {
        "channel"
    }
}
