//! Clock tree and peripheral configuration tables.
//!
//! These describe *what* the clock system should look like after bring-up.
//! The divider math and register writes live in the platform's applicator.

use crate::resource::ResourceDescriptor;

/// Root oscillators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClockSource {
    /// Internal main oscillator, 8 MHz.
    Imo,
    /// External crystal oscillator.
    Eco,
    /// 32.768 kHz watch crystal.
    Wco,
    /// Internal low-speed oscillator, 32 kHz.
    Ilo,
}

/// Feeds a clock path from a source, optionally through the FLL or a PLL.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockPath {
    pub index: u8,
    pub source: ClockSource,
    /// Output frequency of the path's FLL (path 0) or PLL, if enabled.
    pub multiplier_hz: Option<u32>,
}

/// A high-frequency root clock (CLK_HFn).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HfClock {
    pub index: u8,
    pub path: u8,
    /// Pre-divider: 1, 2, 4 or 8.
    pub divider: u8,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SystemClockConfig {
    /// ECO crystal frequency, if fitted and enabled.
    pub eco_hz: Option<u32>,
    pub wco_enabled: bool,
    pub paths: &'static [ClockPath],
    pub hf_clocks: &'static [HfClock],
    /// CLK_PERI divider from CLK_HF0.
    pub peri_divider: u8,
}

/// A fixed-function block configured from the design file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PeripheralConfig {
    pub name: &'static str,
    pub resource: ResourceDescriptor,
    /// Peripheral clock divider feeding the block, if it needs one.
    pub clock: Option<ResourceDescriptor>,
}

/// Everything applied before the pins: clocks first, then peripherals.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    pub clocks: SystemClockConfig,
    pub peripherals: &'static [PeripheralConfig],
}
