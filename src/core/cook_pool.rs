//! Cook workers: one dedicated OS thread per cook on the roster.
//!
//! Each worker blocks on the work queue, takes the equipment slot its item
//! needs, runs the preparation on its own single-threaded tokio runtime,
//! releases the slot, and records the completion. Closing the queue lets the
//! workers drain what is left and exit.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use crate::core::catalog::Cook;
use crate::core::kitchen::KitchenState;
use crate::core::preparation::Preparation;
use crate::core::tracker::record_completion;
use crate::core::KitchenError;
use crate::util::serde::Equipment;

/// Handles to the running cook workers.
pub struct CookPool {
    workers: Mutex<Vec<JoinHandle<()>>>,
    worker_count: usize,
}

impl CookPool {
    /// Spawn one worker per cook in the state's roster.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::WorkerSpawn` if a thread cannot be created; any
    /// workers already started are left to exit once the queue closes.
    pub fn start<P: Preparation>(
        state: &Arc<KitchenState>,
        preparation: &P,
    ) -> Result<Self, KitchenError> {
        let cooks = state.roster.cooks();
        let mut workers = Vec::with_capacity(cooks.len());
        for (worker_id, cook) in cooks.iter().enumerate() {
            let worker = spawn_cook(
                worker_id,
                cook.clone(),
                Arc::clone(state),
                preparation.clone(),
            )
            .inspect_err(|_| state.queue.close())?;
            workers.push(worker);
        }

        info!(
            cooks = workers.len(),
            stoves = state.equipment.capacity(Equipment::Stove),
            ovens = state.equipment.capacity(Equipment::Oven),
            "cook workers started"
        );
        let worker_count = workers.len();
        Ok(Self {
            workers: Mutex::new(workers),
            worker_count,
        })
    }

    /// Number of workers started.
    #[must_use]
    pub const fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Wait for every worker to exit. The queue must already be closed.
    pub fn join(&self) {
        let mut workers = self.workers.lock();
        for (idx, worker) in workers.drain(..).enumerate() {
            if worker.join().is_err() {
                warn!(worker_id = idx, "cook worker panicked");
            } else {
                debug!(worker_id = idx, "cook worker joined");
            }
        }
    }
}

/// Spawn a worker thread for `cook`.
fn spawn_cook<P: Preparation>(
    worker_id: usize,
    cook: Cook,
    state: Arc<KitchenState>,
    preparation: P,
) -> Result<JoinHandle<()>, KitchenError> {
    let handle = thread::Builder::new()
        .name(format!("cook-{}", cook.id))
        .spawn(move || {
            debug!(worker_id, cook_id = cook.id, "cook worker started");

            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    error!(worker_id, cook_id = cook.id, error = %e, "failed to create cook runtime");
                    return;
                }
            };

            // Blocks on the queue; exits once it is closed and drained.
            while let Some(item) = state.queue.pop() {
                state.counters.record_started();
                {
                    let _slot = state.equipment.acquire(item.equipment);
                    rt.block_on(preparation.prepare(&item, &cook));
                }
                state.counters.record_finished();

                if let Err(e) = record_completion(&state, &item, cook.id) {
                    error!(
                        cook_id = cook.id,
                        order_id = item.order_id,
                        food_id = item.food_id,
                        error = %e,
                        "completion rejected"
                    );
                }
            }

            debug!(worker_id, cook_id = cook.id, "cook worker exiting");
        })?;
    Ok(handle)
}
