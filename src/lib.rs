//! # Kitchen Scheduler
//!
//! A resource-constrained scheduler for preparing multi-item orders with a
//! fixed set of shared equipment.
//!
//! Orders are expanded into items and pushed onto a shared work queue. A pool
//! of cook workers (one OS thread per cook) pulls items, takes the equipment
//! slot each item needs, performs the timed preparation, and records the
//! completion. When every item of an order has been recorded the order is
//! handed to a [`Notifier`](crate::core::Notifier) exactly once.
//!
//! ## Key Features
//!
//! - **Equipment Pools**: counting semaphores per equipment class (one stove,
//!   two ovens by default) with FIFO admission so no cook starves
//! - **Work Queue**: FIFO by default (priority sorted per order), or a global
//!   priority heap
//! - **At-most-once Hand-off**: completion state is sharded per order and the
//!   ready order is removed under the same lock that detects readiness;
//!   notification happens after the lock is released
//! - **Estimation**: remaining-time heuristic from cook proficiency, equipment
//!   capacity, and queue pressure
//! - **Injected State**: every kitchen owns its state; no process globals
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use kitchen_scheduler::config::KitchenConfig;
//! use kitchen_scheduler::builders::build_kitchen;
//! use kitchen_scheduler::core::Order;
//! use kitchen_scheduler::infra::notifier::ChannelNotifier;
//! use kitchen_scheduler::util::{init_tracing, Priority};
//!
//! init_tracing();
//! let cfg = KitchenConfig::from_env()?;
//! let (notifier, finished) = ChannelNotifier::new();
//! let kitchen = build_kitchen(&cfg, Arc::new(notifier))?;
//!
//! kitchen.receive_order(Order::new(1, vec![1, 2, 2], Priority(3)))?;
//! let done = finished.recv()?;
//! kitchen.shutdown();
//! ```
//!
//! For complete scenarios, see `tests/kitchen_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions and completion bookkeeping.
pub mod core;
/// Configuration models for the kitchen.
pub mod config;
/// Builders to construct a kitchen from configuration.
pub mod builders;
/// Infrastructure adapters for queues and notifiers.
pub mod infra;
/// Wire models for the order transport.
pub mod runtime;
/// Shared utilities.
pub mod util;
