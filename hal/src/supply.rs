//! Analog supply configuration.

use crate::config::ConfigError;

/// Externally provided supply rails whose voltage the firmware must be told.
#[repr(usize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Supply {
    /// Analog supply (ADC / comparator references).
    Vdda,
    /// Digital core supply.
    Vddd,
    Vddio0,
    Vddio1,
    /// Backup domain supply.
    Vbackup,
}

impl Supply {
    pub const COUNT: usize = 5;
}

/// Applies supply parameters.
///
/// A pure configuration write: no resource is claimed.
pub trait SupplyControl {
    fn set_supply_voltage(&mut self, supply: Supply, mv: u16) -> Result<(), ConfigError>;
}
