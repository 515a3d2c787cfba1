//! Counting pools for shared cooking equipment.
//!
//! Each equipment class is a counting semaphore built from a
//! `parking_lot::Mutex` plus `Condvar`. Waiters take a ticket and are admitted
//! strictly in ticket order, so a waiter is never starved while slots keep
//! being released.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::core::KitchenError;
use crate::util::serde::Equipment;

/// Mutable slot accounting guarded by the pool mutex.
#[derive(Debug, Default)]
struct SlotState {
    /// Slots currently held.
    in_use: u32,
    /// Highest `in_use` ever observed.
    peak: u32,
    /// Next ticket to hand out.
    next_ticket: u64,
    /// Tickets of blocked acquirers, oldest first.
    waiters: VecDeque<u64>,
}

/// A single equipment class with a fixed number of slots.
#[derive(Debug)]
pub struct EquipmentPool {
    equipment: Equipment,
    capacity: u32,
    state: Mutex<SlotState>,
    released: Condvar,
}

/// A held equipment slot. The slot is released on drop.
#[derive(Debug)]
#[must_use = "dropping the guard releases the slot immediately"]
pub struct SlotGuard<'a> {
    pool: &'a EquipmentPool,
}

impl SlotGuard<'_> {
    /// Equipment class this slot belongs to.
    #[must_use]
    pub const fn equipment(&self) -> Equipment {
        self.pool.equipment
    }
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        self.pool.release();
    }
}

impl EquipmentPool {
    /// Create a pool with `capacity` slots.
    #[must_use]
    pub fn new(equipment: Equipment, capacity: u32) -> Self {
        Self {
            equipment,
            capacity,
            state: Mutex::new(SlotState::default()),
            released: Condvar::new(),
        }
    }

    /// Block until a slot is free and take it.
    pub fn acquire(&self) -> SlotGuard<'_> {
        let mut state = self.state.lock();
        let ticket = Self::take_ticket(&mut state);
        while !self.can_admit(&state, ticket) {
            self.released.wait(&mut state);
        }
        self.admit(&mut state);
        SlotGuard { pool: self }
    }

    /// Like [`acquire`](Self::acquire), giving up after `timeout`.
    pub fn acquire_timeout(&self, timeout: Duration) -> Result<SlotGuard<'_>, KitchenError> {
        let deadline = Instant::now() + timeout;
        let mut state = self.state.lock();
        let ticket = Self::take_ticket(&mut state);
        while !self.can_admit(&state, ticket) {
            if self.released.wait_until(&mut state, deadline).timed_out()
                && !self.can_admit(&state, ticket)
            {
                state.waiters.retain(|&t| t != ticket);
                drop(state);
                // The head of the line may have changed.
                self.released.notify_all();
                tracing::debug!(equipment = %self.equipment, "slot acquisition timed out");
                return Err(KitchenError::Timeout);
            }
        }
        self.admit(&mut state);
        Ok(SlotGuard { pool: self })
    }

    /// Slots currently held.
    #[must_use]
    pub fn in_use(&self) -> u32 {
        self.state.lock().in_use
    }

    /// Highest number of simultaneously held slots so far.
    #[must_use]
    pub fn peak_in_use(&self) -> u32 {
        self.state.lock().peak
    }

    /// Acquirers currently blocked.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.state.lock().waiters.len()
    }

    /// Configured slot count.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    fn take_ticket(state: &mut SlotState) -> u64 {
        let ticket = state.next_ticket;
        state.next_ticket += 1;
        state.waiters.push_back(ticket);
        ticket
    }

    fn can_admit(&self, state: &SlotState, ticket: u64) -> bool {
        state.in_use < self.capacity && state.waiters.front() == Some(&ticket)
    }

    fn admit(&self, state: &mut SlotState) {
        state.waiters.pop_front();
        state.in_use += 1;
        state.peak = state.peak.max(state.in_use);
        tracing::trace!(equipment = %self.equipment, in_use = state.in_use, "slot acquired");
        if !state.waiters.is_empty() && state.in_use < self.capacity {
            // Let the next ticket holder check for the remaining free slot.
            self.released.notify_all();
        }
    }

    fn release(&self) {
        let mut state = self.state.lock();
        state.in_use = state.in_use.saturating_sub(1);
        tracing::trace!(equipment = %self.equipment, in_use = state.in_use, "slot released");
        let has_waiters = !state.waiters.is_empty();
        drop(state);
        if has_waiters {
            // Only the head ticket can be admitted; the rest go back to sleep.
            self.released.notify_all();
        }
    }
}

/// The kitchen's equipment: one pool per class.
#[derive(Debug)]
pub struct EquipmentPools {
    stove: EquipmentPool,
    oven: EquipmentPool,
}

impl EquipmentPools {
    /// Create pools with the given capacities.
    #[must_use]
    pub fn new(stoves: u32, ovens: u32) -> Self {
        Self {
            stove: EquipmentPool::new(Equipment::Stove, stoves),
            oven: EquipmentPool::new(Equipment::Oven, ovens),
        }
    }

    /// The pool for one equipment class.
    #[must_use]
    pub const fn pool(&self, equipment: Equipment) -> &EquipmentPool {
        match equipment {
            Equipment::Stove => &self.stove,
            Equipment::Oven => &self.oven,
        }
    }

    /// Block until a slot of `equipment` is free. `None` needs no slot.
    pub fn acquire(&self, equipment: Option<Equipment>) -> Option<SlotGuard<'_>> {
        equipment.map(|eq| self.pool(eq).acquire())
    }

    /// Bounded version of [`acquire`](Self::acquire).
    pub fn acquire_timeout(
        &self,
        equipment: Option<Equipment>,
        timeout: Duration,
    ) -> Result<Option<SlotGuard<'_>>, KitchenError> {
        equipment
            .map(|eq| self.pool(eq).acquire_timeout(timeout))
            .transpose()
    }

    /// Slots held for one class.
    #[must_use]
    pub fn in_use(&self, equipment: Equipment) -> u32 {
        self.pool(equipment).in_use()
    }

    /// Capacity of one class.
    #[must_use]
    pub const fn capacity(&self, equipment: Equipment) -> u32 {
        self.pool(equipment).capacity()
    }

    /// Total slots across all classes.
    #[must_use]
    pub fn total_capacity(&self) -> u32 {
        Equipment::ALL
            .iter()
            .map(|&eq| self.capacity(eq))
            .fold(0, u32::saturating_add)
    }
}
