use crate::sync::irq::IrqControl;

const PRIMASK_PM_BIT: u32 = 1 << 0;

pub struct CortexMIrq;

/// Interrupt control for ARMv7-M cores (the PSoC 6 CM4).
///
/// Masks configurable-priority interrupts through PRIMASK.
///
/// # State Management
/// The `State` type is `bool`: whether interrupts were enabled before
/// `disable()` ran. `restore(true)` re-enables them, `restore(false)` leaves
/// them masked, so nested critical sections unwind correctly.
///
/// # Assembly Details
///
/// - `mrs {0}, PRIMASK`: read the current mask
/// - `cpsid i`: set PRIMASK (mask interrupts)
/// - `cpsie i`: clear PRIMASK (unmask interrupts)
///
/// Neither block is marked `nomem`, so the compiler treats them as memory
/// barriers and does not move accesses out of the critical section.
impl IrqControl for CortexMIrq {
    type State = bool;

    #[inline(always)]
    fn disable() -> bool {
        let primask: u32;
        unsafe {
            core::arch::asm!(
                "mrs {0}, PRIMASK",
                "cpsid i",
                out(reg) primask,
                options(nostack, preserves_flags)
            );
        }
        primask & PRIMASK_PM_BIT == 0
    }

    #[inline(always)]
    fn restore(prev_enabled: bool) {
        if prev_enabled {
            unsafe {
                core::arch::asm!("cpsie i", options(nostack, preserves_flags));
            }
        }
    }
}
