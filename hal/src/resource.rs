//! Hardware resource descriptors.
//!
//! A [`ResourceDescriptor`] names one non-shareable hardware block. It carries
//! no ownership itself; it is the key the [`crate::hwmgr`] registry arbitrates
//! on.

use core::fmt;

/// Family of a hardware block.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    /// SAR analog-to-digital converter.
    Adc,
    /// Peripheral clock divider.
    Clock,
    /// DMA / DataWire channel.
    Dma,
    /// GPIO pin. Block is the port, channel the pin.
    Gpio,
    /// Inter-IC sound.
    I2s,
    /// Low-power comparator.
    Lpcomp,
    /// PDM-to-PCM converter.
    Pdm,
    /// Real-time clock.
    Rtc,
    /// Serial communication block (UART / SPI / I2C).
    Scb,
    /// SD host controller.
    Sdhc,
    /// Serial memory interface (QSPI).
    Smif,
    /// Timer / counter / PWM.
    Tcpwm,
    /// USB device.
    Usb,
}

impl ResourceKind {
    pub const fn name(self) -> &'static str {
        match self {
            ResourceKind::Adc => "adc",
            ResourceKind::Clock => "clock",
            ResourceKind::Dma => "dma",
            ResourceKind::Gpio => "gpio",
            ResourceKind::I2s => "i2s",
            ResourceKind::Lpcomp => "lpcomp",
            ResourceKind::Pdm => "pdm",
            ResourceKind::Rtc => "rtc",
            ResourceKind::Scb => "scb",
            ResourceKind::Sdhc => "sdhc",
            ResourceKind::Smif => "smif",
            ResourceKind::Tcpwm => "tcpwm",
            ResourceKind::Usb => "usb",
        }
    }
}

/// Peripheral clock divider families, used as the block index of
/// [`ResourceKind::Clock`] descriptors.
pub mod clock_block {
    /// 8-bit integer dividers.
    pub const PERIPHERAL_8BIT: u8 = 0;
    /// 16-bit integer dividers.
    pub const PERIPHERAL_16BIT: u8 = 1;
    /// 16.5-bit fractional dividers.
    pub const PERIPHERAL_16_5BIT: u8 = 2;
    /// 24.5-bit fractional dividers.
    pub const PERIPHERAL_24_5BIT: u8 = 3;
}

/// Identifies a physical hardware block.
///
/// Two descriptors are equal iff kind, block and channel all match.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    pub block: u8,
    pub channel: u16,
}

impl ResourceDescriptor {
    pub const fn new(kind: ResourceKind, block: u8, channel: u16) -> Self {
        Self {
            kind,
            block,
            channel,
        }
    }

    /// Peripheral clock divider `channel` of divider family `block`.
    pub const fn clock(block: u8, channel: u16) -> Self {
        Self::new(ResourceKind::Clock, block, channel)
    }

    /// GPIO `pin` of `port`.
    pub const fn gpio(port: u8, pin: u8) -> Self {
        Self::new(ResourceKind::Gpio, port, pin as u16)
    }
}

impl fmt::Display for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}.{}]", self.kind.name(), self.block, self.channel)
    }
}
