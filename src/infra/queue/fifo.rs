//! FIFO work queue backed by an unbounded crossbeam channel.

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;

use crate::core::order::Item;
use crate::core::{ItemQueue, KitchenError};

/// Insertion-ordered queue. Items are never re-sorted after insertion, so
/// cross-order priority is best-effort.
pub struct FifoQueue {
    /// Sender side. `None` after close, which disconnects the receivers.
    tx: Mutex<Option<Sender<Item>>>,
    rx: Receiver<Item>,
}

impl FifoQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx: Mutex::new(Some(tx)),
            rx,
        }
    }
}

impl Default for FifoQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemQueue for FifoQueue {
    fn push(&self, item: Item) -> Result<(), KitchenError> {
        let tx = self.tx.lock();
        let Some(tx) = tx.as_ref() else {
            return Err(KitchenError::Shutdown);
        };
        tx.send(item).map_err(|_| KitchenError::Shutdown)
    }

    fn push_batch(&self, items: Vec<Item>) -> Result<(), KitchenError> {
        // Holding the sender lock keeps `close` out until the whole batch is in.
        let tx = self.tx.lock();
        let Some(tx) = tx.as_ref() else {
            return Err(KitchenError::Shutdown);
        };
        for item in items {
            tx.send(item).map_err(|_| KitchenError::Shutdown)?;
        }
        Ok(())
    }

    fn pop(&self) -> Option<Item> {
        // Blocks until an item arrives; errors only once closed and drained.
        self.rx.recv().ok()
    }

    fn pop_timeout(&self, timeout: Duration) -> Result<Item, KitchenError> {
        self.rx.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => KitchenError::Timeout,
            RecvTimeoutError::Disconnected => KitchenError::Shutdown,
        })
    }

    fn len(&self) -> usize {
        self.rx.len()
    }

    fn close(&self) {
        self.tx.lock().take();
    }
}
