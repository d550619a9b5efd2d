//! Power-transition callback chain.
//!
//! Entries are kept sorted by ascending `order`. On entry into a low-power
//! mode they run lowest order first; on the way back out they run in reverse,
//! so whatever prepared last for sleep restores first on wake.

use core::fmt;

use bitflags::bitflags;

use super::PmError;

bitflags! {
    /// Low-power modes a callback participates in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TransitionMask: u8 {
        const SLEEP = 1 << 0;
        const DEEP_SLEEP = 1 << 1;
        const HIBERNATE = 1 << 2;
    }
}

/// One edge of a low-power transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    SleepEnter,
    SleepExit,
    DeepSleepEnter,
    DeepSleepExit,
    /// Hibernate has no exit edge; the device wakes through reset.
    HibernateEnter,
}

impl Transition {
    /// The mode this edge belongs to.
    pub const fn mode(self) -> TransitionMask {
        match self {
            Transition::SleepEnter | Transition::SleepExit => TransitionMask::SLEEP,
            Transition::DeepSleepEnter | Transition::DeepSleepExit => TransitionMask::DEEP_SLEEP,
            Transition::HibernateEnter => TransitionMask::HIBERNATE,
        }
    }

    /// Whether this edge leaves a low-power mode.
    pub const fn is_exit(self) -> bool {
        matches!(self, Transition::SleepExit | Transition::DeepSleepExit)
    }
}

/// Handler run on power transitions.
///
/// Handlers are expected to succeed; one that cannot honour its contract
/// reports through the platform fault path, not through a return value.
pub trait PowerCallback: Sync {
    fn on_transition(&self, transition: Transition, context: usize);
}

/// A registered callback.
#[derive(Clone, Copy)]
pub struct CallbackEntry {
    /// Position in the chain. Unique among entries with overlapping masks.
    pub order: u8,
    pub mask: TransitionMask,
    pub handler: &'static dyn PowerCallback,
    /// Opaque value handed back to the handler.
    pub context: usize,
}

impl CallbackEntry {
    pub const fn new(
        order: u8,
        mask: TransitionMask,
        handler: &'static dyn PowerCallback,
        context: usize,
    ) -> Self {
        Self {
            order,
            mask,
            handler,
            context,
        }
    }

    fn clashes_with(&self, other: &CallbackEntry) -> bool {
        self.order == other.order && self.mask.intersects(other.mask)
    }
}

impl fmt::Debug for CallbackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackEntry")
            .field("order", &self.order)
            .field("mask", &self.mask)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Fixed-capacity ordered list of [`CallbackEntry`].
pub struct CallbackChain<const N: usize> {
    entries: [Option<CallbackEntry>; N],
    len: usize,
}

impl<const N: usize> CallbackChain<N> {
    pub const fn new() -> Self {
        Self {
            entries: [None; N],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CallbackEntry> {
        self.entries[..self.len].iter().flatten()
    }

    /// Insert `entry` keeping ascending order.
    ///
    /// Entries with equal order but disjoint masks keep registration order.
    pub fn register(&mut self, entry: CallbackEntry) -> Result<(), PmError> {
        if self.iter().any(|e| e.clashes_with(&entry)) {
            return Err(PmError::DuplicateOrder { order: entry.order });
        }
        if self.len == N {
            return Err(PmError::CallbackTableFull);
        }

        let pos = self
            .iter()
            .position(|e| e.order > entry.order)
            .unwrap_or(self.len);
        self.entries[pos..=self.len].rotate_right(1);
        self.entries[pos] = Some(entry);
        self.len += 1;
        Ok(())
    }

    /// Remove the entry registered at `order` for a mask overlapping `mask`.
    pub fn unregister(
        &mut self,
        order: u8,
        mask: TransitionMask,
    ) -> Result<CallbackEntry, PmError> {
        let pos = self
            .iter()
            .position(|e| e.order == order && e.mask.intersects(mask))
            .ok_or(PmError::CallbackNotFound { order })?;
        let removed = self.entries[pos].take();
        self.entries[pos..self.len].rotate_left(1);
        self.len -= 1;
        removed.ok_or(PmError::CallbackNotFound { order })
    }

    /// Run every handler whose mask covers `transition`.
    ///
    /// Ascending order on entry edges, descending on exit edges. Returns the
    /// number of handlers run.
    pub fn invoke(&self, transition: Transition) -> usize {
        let mode = transition.mode();
        let mut ran = 0;
        let mut run = |entry: &CallbackEntry| {
            if entry.mask.intersects(mode) {
                entry.handler.on_transition(transition, entry.context);
                ran += 1;
            }
        };

        if transition.is_exit() {
            self.iter().rev().for_each(&mut run);
        } else {
            self.iter().for_each(&mut run);
        }
        ran
    }

    pub fn clear(&mut self) {
        self.entries = [None; N];
        self.len = 0;
    }
}

impl<const N: usize> Default for CallbackChain<N> {
    fn default() -> Self {
        Self::new()
    }
}
