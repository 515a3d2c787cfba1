//! Infrastructure adapters: work queue and notifier backends.

pub mod notifier;
pub mod queue;

pub use notifier::{ChannelNotifier, InMemoryNotifier};
pub use queue::{FifoQueue, PriorityQueue};
