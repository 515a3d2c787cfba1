//! Kitchen state and the facade that runs it.
//!
//! `KitchenState` owns everything the components share: catalog, roster,
//! equipment pools, work queue, order registry, completion tracker, notifier,
//! and counters. It is built once, wrapped in an `Arc`, and handed to intake,
//! the tracker, the estimator, and every cook worker. Separate kitchens never
//! share state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::config::{KitchenConfig, QueuePolicy};
use crate::core::catalog::{Catalog, Roster};
use crate::core::cook_pool::CookPool;
use crate::core::equipment::EquipmentPools;
use crate::core::estimator;
use crate::core::intake::{self, OrderRegistry};
use crate::core::order::Order;
use crate::core::preparation::{Preparation, SimulatedPreparation};
use crate::core::tracker::CompletionTracker;
use crate::core::{ItemQueue, KitchenError, Notifier};
use crate::infra::queue::{FifoQueue, PriorityQueue};
use crate::util::serde::{Equipment, OrderId};

/// Snapshot of kitchen activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KitchenStats {
    /// Cook workers running.
    pub cooks: usize,
    /// Orders accepted by intake.
    pub orders_received: u64,
    /// Orders still in the registry.
    pub orders_in_progress: usize,
    /// Items waiting in the work queue.
    pub items_queued: usize,
    /// Items taken by a cook and not yet finished.
    pub items_in_progress: u64,
    /// Items finished.
    pub items_completed: u64,
    /// Finished orders the notifier acknowledged.
    pub orders_delivered: u64,
    /// Finished orders the notifier did not acknowledge.
    pub delivery_failures: u64,
    /// Stove slots held.
    pub stoves_in_use: u32,
    /// Oven slots held.
    pub ovens_in_use: u32,
}

/// Activity counters (lock-free atomics).
#[derive(Debug, Default)]
pub struct KitchenCounters {
    orders_received: AtomicU64,
    items_enqueued: AtomicU64,
    items_in_progress: AtomicU64,
    items_completed: AtomicU64,
    orders_delivered: AtomicU64,
    delivery_failures: AtomicU64,
}

impl KitchenCounters {
    pub(crate) fn record_order_received(&self) {
        self.orders_received.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_enqueued(&self, items: u64) {
        self.items_enqueued.fetch_add(items, Ordering::Relaxed);
    }

    pub(crate) fn record_started(&self) {
        self.items_in_progress.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_finished(&self) {
        self.items_in_progress.fetch_sub(1, Ordering::Relaxed);
        self.items_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_delivered(&self) {
        self.orders_delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_delivery_failure(&self) {
        self.delivery_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Items pushed onto the work queue since start.
    #[must_use]
    pub fn items_enqueued(&self) -> u64 {
        self.items_enqueued.load(Ordering::Relaxed)
    }
}

/// Shared state of one kitchen instance.
pub struct KitchenState {
    pub(crate) config: KitchenConfig,
    pub(crate) catalog: Catalog,
    pub(crate) roster: Roster,
    pub(crate) equipment: EquipmentPools,
    pub(crate) queue: Box<dyn ItemQueue>,
    pub(crate) orders: OrderRegistry,
    pub(crate) tracker: CompletionTracker,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) counters: KitchenCounters,
    /// Held shared by intake for a whole order and exclusively by `close`.
    pub(crate) intake_gate: RwLock<()>,
    accepting: AtomicBool,
}

impl KitchenState {
    /// Assemble kitchen state, validating that every estimator divisor is
    /// non-zero and that every menu item's equipment exists.
    ///
    /// # Errors
    ///
    /// `KitchenError::InvalidConfig` on an invalid configuration or a menu
    /// item requiring equipment with zero slots.
    pub fn new(
        config: KitchenConfig,
        catalog: Catalog,
        roster: Roster,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, KitchenError> {
        config.validate().map_err(KitchenError::InvalidConfig)?;
        for food in catalog.foods() {
            if let Some(eq) = food.cooking_apparatus {
                if config.capacity(eq) == 0 {
                    return Err(KitchenError::InvalidConfig(format!(
                        "food {} needs a {eq} but the kitchen has none",
                        food.id
                    )));
                }
            }
        }

        let queue: Box<dyn ItemQueue> = match config.queue_policy {
            QueuePolicy::Fifo => Box::new(FifoQueue::new()),
            QueuePolicy::Priority => Box::new(PriorityQueue::new()),
        };
        Ok(Self {
            equipment: EquipmentPools::new(config.stoves, config.ovens),
            config,
            catalog,
            roster,
            queue,
            orders: OrderRegistry::new(),
            tracker: CompletionTracker::new(),
            notifier,
            counters: KitchenCounters::default(),
            intake_gate: RwLock::new(()),
            accepting: AtomicBool::new(true),
        })
    }

    /// Configuration the kitchen was built with.
    #[must_use]
    pub const fn config(&self) -> &KitchenConfig {
        &self.config
    }

    /// Menu catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cook roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Equipment pools.
    #[must_use]
    pub const fn equipment(&self) -> &EquipmentPools {
        &self.equipment
    }

    /// Work queue.
    #[must_use]
    pub fn queue(&self) -> &dyn ItemQueue {
        self.queue.as_ref()
    }

    /// Orders received and not yet reported.
    #[must_use]
    pub const fn orders(&self) -> &OrderRegistry {
        &self.orders
    }

    /// Completion tracker.
    #[must_use]
    pub const fn tracker(&self) -> &CompletionTracker {
        &self.tracker
    }

    /// Activity counters.
    #[must_use]
    pub const fn counters(&self) -> &KitchenCounters {
        &self.counters
    }

    /// Whether intake still accepts orders.
    #[must_use]
    pub fn is_accepting(&self) -> bool {
        self.accepting.load(Ordering::Acquire)
    }

    /// Stop intake and close the work queue. Queued items are still cooked.
    ///
    /// Waits for any order being received to finish enqueueing, so an order
    /// is either fully queued or rejected.
    pub fn close(&self) {
        let _gate = self.intake_gate.write();
        self.accepting.store(false, Ordering::Release);
        self.queue.close();
    }

    /// Snapshot of current activity.
    #[must_use]
    pub fn stats(&self, cooks: usize) -> KitchenStats {
        KitchenStats {
            cooks,
            orders_received: self.counters.orders_received.load(Ordering::Relaxed),
            orders_in_progress: self.orders.len(),
            items_queued: self.queue.len(),
            items_in_progress: self.counters.items_in_progress.load(Ordering::Relaxed),
            items_completed: self.counters.items_completed.load(Ordering::Relaxed),
            orders_delivered: self.counters.orders_delivered.load(Ordering::Relaxed),
            delivery_failures: self.counters.delivery_failures.load(Ordering::Relaxed),
            stoves_in_use: self.equipment.in_use(Equipment::Stove),
            ovens_in_use: self.equipment.in_use(Equipment::Oven),
        }
    }
}

/// A running kitchen: shared state plus its cook workers.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use kitchen_scheduler::config::KitchenConfig;
/// use kitchen_scheduler::core::{Catalog, Kitchen, Order, Roster};
/// use kitchen_scheduler::infra::notifier::InMemoryNotifier;
/// use kitchen_scheduler::util::Priority;
///
/// let kitchen = Kitchen::start(
///     KitchenConfig::new(),
///     Catalog::from_json_str(MENU)?,
///     Roster::from_json_str(COOKS)?,
///     Arc::new(InMemoryNotifier::new()),
/// )?;
/// kitchen.receive_order(Order::new(1, vec![1, 2], Priority(3)))?;
/// let eta = kitchen.estimate_remaining(1);
/// kitchen.shutdown();
/// ```
pub struct Kitchen {
    state: Arc<KitchenState>,
    cooks: CookPool,
    joined: AtomicBool,
}

impl Kitchen {
    /// Build state and start one worker per cook, simulating preparation with
    /// the configured time unit.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`KitchenState::new`] and thread
    /// spawn failures.
    pub fn start(
        config: KitchenConfig,
        catalog: Catalog,
        roster: Roster,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, KitchenError> {
        let preparation = SimulatedPreparation::new(config.time_unit());
        let state = KitchenState::new(config, catalog, roster, notifier)?;
        Self::start_with(state, &preparation)
    }

    /// Start workers over prepared state with a custom preparation strategy.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::WorkerSpawn` if a worker thread cannot start.
    pub fn start_with<P: Preparation>(
        state: KitchenState,
        preparation: &P,
    ) -> Result<Self, KitchenError> {
        let state = Arc::new(state);
        let cooks = CookPool::start(&state, preparation)?;
        Ok(Self {
            state,
            cooks,
            joined: AtomicBool::new(false),
        })
    }

    /// Accept an order and queue its items.
    ///
    /// # Errors
    ///
    /// `UnknownFood`, `EmptyOrder`, `DuplicateOrder`, or `Shutdown`.
    pub fn receive_order(&self, order: Order) -> Result<Arc<Order>, KitchenError> {
        intake::receive_order(&self.state, order)
    }

    /// Estimated remaining time for an order, in preparation time units.
    #[must_use]
    pub fn estimate_remaining(&self, order_id: OrderId) -> f64 {
        estimator::estimate_remaining(&self.state, order_id)
    }

    /// Snapshot of kitchen activity.
    #[must_use]
    pub fn stats(&self) -> KitchenStats {
        self.state.stats(self.cooks.worker_count())
    }

    /// Shared state, for inspection.
    #[must_use]
    pub const fn state(&self) -> &Arc<KitchenState> {
        &self.state
    }

    /// Stop intake, let the cooks finish every queued item, and join them.
    ///
    /// Safe to call more than once, and after [`KitchenState::close`].
    pub fn shutdown(&self) {
        self.state.close();
        if self.joined.swap(true, Ordering::AcqRel) {
            return;
        }
        info!("shutting down kitchen");
        self.cooks.join();
        info!(stats = ?self.stats(), "kitchen shut down");
    }
}

impl Drop for Kitchen {
    fn drop(&mut self) {
        // Close without joining; workers drain the queue and exit on their own.
        self.state.close();
    }
}
