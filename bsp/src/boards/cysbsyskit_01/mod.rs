//! CYSBSYSKIT-01: Rapid IoT Connect kit, CYSBSYS-RP01 module built around a
//! PSoC 62 (CY8C6247FDI-D52) and a CYW43012 Wi-Fi/BT radio.

mod clocks;
mod pins;
mod resources;

pub use clocks::SYSTEM_CONFIG;
pub use pins::{PINS, pin};
pub use resources::{RESERVED, RESOURCE_LAYOUT};

/// VDDA is fed from the 3.3 V rail.
pub const VDDA_MV: Option<u16> = Some(3300);

pub const NAME: &str = "CYSBSYSKIT-01";
