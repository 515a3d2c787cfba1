//! Core scheduling: intake, equipment, cooks, completion tracking, estimation.

pub mod catalog;
pub mod cook_pool;
pub mod equipment;
pub mod error;
pub mod estimator;
pub mod intake;
pub mod kitchen;
pub mod notifier;
pub mod order;
pub mod preparation;
pub mod queue;
pub mod tracker;

pub use catalog::{Catalog, Cook, FoodSpec, Roster};
pub use cook_pool::CookPool;
pub use equipment::{EquipmentPool, EquipmentPools, SlotGuard};
pub use error::{AppResult, KitchenError};
pub use estimator::{estimate_remaining, EstimateTerms};
pub use intake::{receive_order, OrderRegistry};
pub use kitchen::{Kitchen, KitchenCounters, KitchenState, KitchenStats};
pub use notifier::Notifier;
pub use order::{CompletionRecord, FinishedOrder, Item, Order};
pub use preparation::{Preparation, SimulatedPreparation};
pub use queue::ItemQueue;
pub use tracker::{record_completion, CompletionTracker, HandOff, Progress};
