//! Configuration models for the kitchen and its equipment.

pub mod kitchen;

pub use kitchen::{KitchenConfig, QueuePolicy};
