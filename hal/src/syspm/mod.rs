//! System power management.
//!
//! [`SysPm`] is the power-manager state the board owns: the callback chain,
//! the deep-sleep lock and the supply voltages recorded at bring-up. The
//! platform's power-mode state machine is not implemented here; it calls
//! [`SysPm::dispatch`] around each transition.
//!
//! The chain may only change outside of a dispatch. Registration while a
//! dispatch holds the chain fails with [`PmError::TransitionInProgress`].

mod callback;

pub use callback::{CallbackChain, CallbackEntry, PowerCallback, Transition, TransitionMask};

use core::fmt;
use core::sync::atomic::{AtomicU16, Ordering};

use common::sync::IrqSpinLock;
use log::{debug, trace};

use crate::supply::Supply;

/// Default callback capacity.
pub const DEFAULT_CALLBACK_SLOTS: usize = 16;

pub struct SysPm<const N: usize = DEFAULT_CALLBACK_SLOTS> {
    chain: IrqSpinLock<CallbackChain<N>>,
    deep_sleep_locks: AtomicU16,
    supplies: [AtomicU16; Supply::COUNT],
}

impl<const N: usize> SysPm<N> {
    pub const fn new() -> Self {
        Self {
            chain: IrqSpinLock::new(CallbackChain::new()),
            deep_sleep_locks: AtomicU16::new(0),
            supplies: [const { AtomicU16::new(0) }; Supply::COUNT],
        }
    }

    /// Add `entry` to the callback chain.
    pub fn register_callback(&self, entry: CallbackEntry) -> Result<(), PmError> {
        let mut chain = self.chain.try_lock().ok_or(PmError::TransitionInProgress)?;
        chain.register(entry)?;
        debug!(
            "syspm: registered callback order {} for {:?}",
            entry.order, entry.mask
        );
        Ok(())
    }

    /// Remove the entry at `order` whose mask overlaps `mask`.
    pub fn unregister_callback(
        &self,
        order: u8,
        mask: TransitionMask,
    ) -> Result<CallbackEntry, PmError> {
        let mut chain = self.chain.try_lock().ok_or(PmError::TransitionInProgress)?;
        chain.unregister(order, mask)
    }

    /// Number of registered callbacks.
    pub fn callback_count(&self) -> usize {
        self.chain.lock().len()
    }

    /// Run `f` with the chain locked.
    pub fn with_callbacks<R>(&self, f: impl FnOnce(&CallbackChain<N>) -> R) -> R {
        let chain = self.chain.lock();
        f(&*chain)
    }

    /// Run the callbacks for `transition`.
    ///
    /// Called by the platform power manager. Deep-sleep entry is refused
    /// while anyone holds the deep-sleep lock.
    pub fn dispatch(&self, transition: Transition) -> Result<usize, PmError> {
        if transition == Transition::DeepSleepEnter && self.deep_sleep_locked() {
            return Err(PmError::DeepSleepLocked);
        }
        let chain = self.chain.lock();
        let ran = chain.invoke(transition);
        trace!("syspm: {:?} ran {} callbacks", transition, ran);
        Ok(ran)
    }

    /// Forbid deep sleep until a matching [`SysPm::unlock_deep_sleep`].
    pub fn lock_deep_sleep(&self) -> Result<(), PmError> {
        self.deep_sleep_locks
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_add(1))
            .map(|_| ())
            .map_err(|_| PmError::LockOverflow)
    }

    pub fn unlock_deep_sleep(&self) -> Result<(), PmError> {
        self.deep_sleep_locks
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .map(|_| ())
            .map_err(|_| PmError::NotLocked)
    }

    pub fn deep_sleep_locked(&self) -> bool {
        self.deep_sleep_locks.load(Ordering::Acquire) != 0
    }

    /// Remember the voltage `supply` was configured for.
    pub fn record_supply_voltage(&self, supply: Supply, mv: u16) {
        self.supplies[supply as usize].store(mv, Ordering::Release);
    }

    /// Voltage recorded for `supply`, if any.
    pub fn supply_voltage(&self, supply: Supply) -> Option<u16> {
        match self.supplies[supply as usize].load(Ordering::Acquire) {
            0 => None,
            mv => Some(mv),
        }
    }

    /// Forget all callbacks, locks and supplies. Test teardown.
    pub fn reset(&self) {
        self.chain.lock().clear();
        self.deep_sleep_locks.store(0, Ordering::Release);
        for supply in &self.supplies {
            supply.store(0, Ordering::Release);
        }
    }
}

impl<const N: usize> Default for SysPm<N> {
    fn default() -> Self {
        Self::new()
    }
}

// region: Error Types

/// Errors returned by the power manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "power manager errors must be handled"]
pub enum PmError {
    /// The fixed-size callback table has no free slot.
    CallbackTableFull,
    /// Another entry already uses this order for an overlapping mode.
    DuplicateOrder { order: u8 },
    /// No entry at this order for the given mode.
    CallbackNotFound { order: u8 },
    /// The chain is being dispatched; it cannot change now.
    TransitionInProgress,
    /// Deep sleep was requested while locked.
    DeepSleepLocked,
    /// Too many outstanding deep-sleep locks.
    LockOverflow,
    /// Unlock without a matching lock.
    NotLocked,
}

impl fmt::Display for PmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PmError::CallbackTableFull => f.write_str("power callback table is full"),
            PmError::DuplicateOrder { order } => {
                write!(f, "power callback order {} already taken", order)
            }
            PmError::CallbackNotFound { order } => {
                write!(f, "no power callback registered at order {}", order)
            }
            PmError::TransitionInProgress => f.write_str("power transition in progress"),
            PmError::DeepSleepLocked => f.write_str("deep sleep is locked"),
            PmError::LockOverflow => f.write_str("deep sleep lock count overflow"),
            PmError::NotLocked => f.write_str("deep sleep is not locked"),
        }
    }
}

impl core::error::Error for PmError {}

// endregion
