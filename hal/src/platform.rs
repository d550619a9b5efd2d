//! Platform Collaborators
//!
//! Board bring-up drives hardware it does not implement: the power-management
//! substrate, the supply regulators, the clock tree and the pin matrix. Each
//! silicon family implements the [`Platform`] trait once; the board package
//! calls it in a fixed order from its init sequencer.
//!
//! # Usage
//!
//! ```ignore
//! use bsp::init::{Board, board_init};
//!
//! let mut board: Board = Board::new(&bsp::boards::current::RESOURCE_LAYOUT);
//! board_init(&mut board, &mut MyPlatform::take())?;
//! ```

use crate::clock::SystemConfig;
use crate::config::ConfigError;
use crate::gpio::PinConfig;
use crate::supply::SupplyControl;
use crate::syspm::PowerCallback;

/// Platform trait - implemented by each supported silicon family
pub trait Platform {
    /// Platform name for debugging
    fn name(&self) -> &'static str;

    /// Bring up the power-management substrate.
    ///
    /// Called first, before any configuration is applied.
    fn init_power_management(&mut self) -> Result<(), ConfigError>;

    /// Supply regulator control, if this platform has one.
    ///
    /// Returning `None` skips supply configuration entirely.
    fn supply(&mut self) -> Option<&mut dyn SupplyControl> {
        None
    }

    /// Apply the clock tree, then the fixed-function peripherals.
    ///
    /// Called once, before [`Platform::apply_pin_config`]: pins such as the
    /// oscillator inputs need a settled clock tree.
    fn apply_clock_and_peripheral_config(&mut self, table: &SystemConfig)
    -> Result<(), ConfigError>;

    /// Drive every pin of `pins` to its configured mode and level.
    fn apply_pin_config(&mut self, pins: &[PinConfig]) -> Result<(), ConfigError>;

    /// The clock system's deep-sleep prepare/restore handler.
    fn sysclk_pm_handler(&self) -> &'static dyn PowerCallback;
}
