//! GPIO pin configuration tables.
//!
//! The board's generated pin table is a list of [`PinConfig`]: which pin, how
//! it is driven, what level it starts at and which signal the pin mux routes
//! to it. Applying the table is the platform's job
//! ([`crate::platform::Platform::apply_pin_config`]).

use crate::resource::ResourceDescriptor;

/// Pin logic level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinLevel {
    /// Logic low (0V or ground).
    Low,
    /// Logic high (VDDIO of the port).
    High,
}

impl From<bool> for PinLevel {
    fn from(value: bool) -> Self {
        if value { PinLevel::High } else { PinLevel::Low }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> bool {
        matches!(level, PinLevel::High)
    }
}

/// Electrical drive mode of a pin.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DriveMode {
    /// Digital input buffer off; for analog signals and oscillators.
    Analog = 0,
    /// High impedance, input buffer on.
    HighZ = 1,
    /// Resistive pull-up, strong drive low.
    PullUp = 2,
    /// Resistive pull-down, strong drive high.
    PullDown = 3,
    /// Open drain, drives low.
    OpenDrainLow = 4,
    /// Open drain, drives high.
    OpenDrainHigh = 5,
    /// Strong drive both ways.
    Strong = 6,
    /// Resistive pull-up and pull-down.
    PullUpDown = 7,
}

impl DriveMode {
    /// Whether the digital input buffer is enabled in this mode.
    pub const fn input_buffer(self) -> bool {
        !matches!(self, DriveMode::Analog)
    }
}

/// High-speed I/O matrix selection: which signal drives the pin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Hsiom(pub u8);

impl Hsiom {
    /// Software-controlled GPIO.
    pub const GPIO: Hsiom = Hsiom(0);
    /// Deep-sleep capable alternate function 2 (CPUSS SWJ on port 6).
    pub const DS_2: Hsiom = Hsiom(29);
}

/// A physical pin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId {
    pub port: u8,
    pub pin: u8,
}

impl PinId {
    pub const fn new(port: u8, pin: u8) -> Self {
        Self { port, pin }
    }

    /// Registry key for this pin.
    pub const fn resource(self) -> ResourceDescriptor {
        ResourceDescriptor::gpio(self.port, self.pin)
    }
}

/// One row of the generated pin table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinConfig {
    /// Symbolic name from the design file.
    pub name: &'static str,
    pub id: PinId,
    pub drive_mode: DriveMode,
    pub init_level: PinLevel,
    pub hsiom: Hsiom,
}

impl PinConfig {
    pub const fn new(
        name: &'static str,
        id: PinId,
        drive_mode: DriveMode,
        init_level: PinLevel,
        hsiom: Hsiom,
    ) -> Self {
        Self {
            name,
            id,
            drive_mode,
            init_level,
            hsiom,
        }
    }
}
