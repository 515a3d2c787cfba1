//! Finished-order notifier backends.

pub mod channel;
pub mod memory;

pub use channel::ChannelNotifier;
pub use memory::InMemoryNotifier;
