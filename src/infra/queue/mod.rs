//! Work queue backends.

pub mod fifo;
pub mod priority;

pub use fifo::FifoQueue;
pub use priority::PriorityQueue;
