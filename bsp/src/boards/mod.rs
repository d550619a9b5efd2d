//! Compiled-in board tables.
//!
//! Exactly one board is selected by cargo feature and re-exported as
//! [`current`]. Each board module provides:
//!
//! - `RESOURCE_LAYOUT`: the device's hardware inventory
//! - `SYSTEM_CONFIG`: clock tree and peripheral table
//! - `PINS`: the generated pin table
//! - `RESERVED`: blocks the board claims for itself, in reservation order
//! - `VDDA_MV`: analog supply voltage, if it must be configured

cfg_if::cfg_if! {
    if #[cfg(feature = "cysbsyskit-01")] {
        pub mod cysbsyskit_01;
        pub use cysbsyskit_01 as current;
    } else {
        compile_error!(
            "No board selected!\n\
            Use: cargo build --features cysbsyskit-01"
        );
    }
}
