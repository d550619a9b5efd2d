//! Architecture plumbing shared by the HAL and the board package.
//!
//! - [`sync`]: interrupt masking trait and the interrupt-safe lock
//! - [`arch`]: per-architecture implementations of [`sync::irq::IrqControl`]
//!
//! [`CurrentIrq`] names the interrupt controller for the target being built.
//! On bare-metal ARM it masks PRIMASK; on hosted targets (unit tests) it is a
//! no-op.

#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod sync;

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "arm", target_os = "none"))] {
        pub use arch::arm::irq::CortexMIrq as CurrentIrq;
    } else {
        pub use sync::irq::NoIrq as CurrentIrq;
    }
}
