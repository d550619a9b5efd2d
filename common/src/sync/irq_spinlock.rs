use core::{
    marker::PhantomData,
    mem::ManuallyDrop,
    ops::{Deref, DerefMut},
};

use spin::{Mutex, MutexGuard};

use super::irq::IrqControl;
use crate::CurrentIrq;

/// IRQ-safe spinlock.
///
/// - Masks interrupts before touching the inner [`spin::Mutex`]
/// - Releases the mutex, then restores the interrupt state, on drop
///
/// Safe to use from interrupt context and thread context alike: a handler
/// can never preempt a holder on the same core. Not fair. Not reentrant;
/// use [`IrqSpinLock::try_lock`] where reentry is possible.
pub struct IrqSpinLock<T, I: IrqControl = CurrentIrq> {
    inner: Mutex<T>,
    _irq: PhantomData<fn() -> I>,
}

impl<T, I: IrqControl> IrqSpinLock<T, I> {
    /// Create a new IRQ-safe spinlock.
    pub const fn new(data: T) -> Self {
        Self {
            inner: Mutex::new(data),
            _irq: PhantomData,
        }
    }

    /// Acquire the lock with interrupts masked, spinning until it is free.
    pub fn lock(&self) -> IrqSpinLockGuard<'_, T, I> {
        let irq_state = I::disable();
        IrqSpinLockGuard {
            guard: ManuallyDrop::new(self.inner.lock()),
            irq_state,
        }
    }

    /// Acquire the lock only if nobody holds it.
    ///
    /// Interrupts are left untouched when the lock is busy.
    pub fn try_lock(&self) -> Option<IrqSpinLockGuard<'_, T, I>> {
        let irq_state = I::disable();
        match self.inner.try_lock() {
            Some(guard) => Some(IrqSpinLockGuard {
                guard: ManuallyDrop::new(guard),
                irq_state,
            }),
            None => {
                I::restore(irq_state);
                None
            }
        }
    }

    /// Whether some context currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }
}

/// Guard returned by [`IrqSpinLock::lock`] and [`IrqSpinLock::try_lock`].
pub struct IrqSpinLockGuard<'a, T, I: IrqControl> {
    guard: ManuallyDrop<MutexGuard<'a, T>>,
    irq_state: I::State,
}

impl<T, I: IrqControl> Deref for IrqSpinLockGuard<'_, T, I> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T, I: IrqControl> DerefMut for IrqSpinLockGuard<'_, T, I> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

impl<T, I: IrqControl> Drop for IrqSpinLockGuard<'_, T, I> {
    fn drop(&mut self) {
        // SAFETY: the guard is dropped exactly once, here, and never touched again.
        unsafe { ManuallyDrop::drop(&mut self.guard) };
        I::restore(self.irq_state);
    }
}
