use hal::gpio::{DriveMode, Hsiom, PinConfig, PinId, PinLevel};

/// Pins configured at bring-up, in application order.
pub const PINS: &[PinConfig] = &[
    PinConfig::new(
        "WCO_IN",
        pin::WCO_IN,
        DriveMode::Analog,
        PinLevel::High,
        Hsiom::GPIO,
    ),
    PinConfig::new(
        "WCO_OUT",
        pin::WCO_OUT,
        DriveMode::Analog,
        PinLevel::High,
        Hsiom::GPIO,
    ),
    PinConfig::new(
        "SWDIO",
        pin::SWDIO,
        DriveMode::PullUp,
        PinLevel::High,
        Hsiom::DS_2,
    ),
    PinConfig::new(
        "SWDCK",
        pin::SWDCK,
        DriveMode::PullDown,
        PinLevel::High,
        Hsiom::DS_2,
    ),
];

/// Board signal names.
pub mod pin {
    use super::PinId;

    pub const WCO_IN: PinId = PinId::new(0, 0);
    pub const WCO_OUT: PinId = PinId::new(0, 1);
    pub const USER_BTN1: PinId = PinId::new(0, 4);
    pub const USER_BTN: PinId = USER_BTN1;

    pub const SPI_MOSI: PinId = PinId::new(5, 0);
    pub const SPI_MISO: PinId = PinId::new(5, 1);
    pub const SPI_CLK: PinId = PinId::new(5, 2);
    pub const SPI_CS: PinId = PinId::new(5, 3);
    pub const DEBUG_UART_RX: PinId = PinId::new(5, 4);
    pub const DEBUG_UART_TX: PinId = PinId::new(5, 5);
    pub const DEBUG_UART_RTS: PinId = PinId::new(5, 6);
    pub const DEBUG_UART_CTS: PinId = PinId::new(5, 7);

    pub const I2C_SCL: PinId = PinId::new(6, 0);
    pub const I2C_SDA: PinId = PinId::new(6, 1);
    pub const UART_RX: PinId = PinId::new(6, 4);
    pub const UART_TX: PinId = PinId::new(6, 5);
    pub const SWDIO: PinId = PinId::new(6, 6);
    pub const SWDCK: PinId = PinId::new(6, 7);

    pub const GPIO5: PinId = PinId::new(8, 4);
    pub const GPIO13: PinId = PinId::new(9, 0);
    pub const GPIO12: PinId = PinId::new(9, 1);
    pub const GPIO11: PinId = PinId::new(9, 2);
    pub const GPIO10: PinId = PinId::new(9, 3);
    pub const GPIO9: PinId = PinId::new(9, 4);
    pub const GPIO6: PinId = PinId::new(9, 7);

    pub const GPIOA0: PinId = PinId::new(10, 0);
    pub const GPIOA1: PinId = PinId::new(10, 1);
    pub const GPIOA2: PinId = PinId::new(10, 2);
    pub const GPIOA3: PinId = PinId::new(10, 3);
    pub const GPIOA4: PinId = PinId::new(10, 4);
    pub const GPIOA5: PinId = PinId::new(10, 5);
    pub const THERM_VDD: PinId = PinId::new(10, 6);
    pub const THERM_OUT: PinId = PinId::new(10, 7);

    pub const USER_LED1: PinId = PinId::new(11, 1);
    pub const USER_LED: PinId = USER_LED1;
    pub const QSPI_SS: PinId = PinId::new(11, 2);
    pub const QSPI_D3: PinId = PinId::new(11, 3);
    pub const QSPI_D2: PinId = PinId::new(11, 4);
    pub const QSPI_D1: PinId = PinId::new(11, 5);
    pub const QSPI_D0: PinId = PinId::new(11, 6);
    pub const QSPI_SCK: PinId = PinId::new(11, 7);

    pub const BT_POWER: PinId = PinId::new(12, 0);
    pub const BT_DEVICE_WAKE: PinId = PinId::new(12, 2);
    pub const BT_HOST_WAKE: PinId = PinId::new(12, 3);
    pub const ECO_IN: PinId = PinId::new(12, 6);
    pub const ECO_OUT: PinId = PinId::new(12, 7);

    pub const BT_UART_RX: PinId = PinId::new(13, 4);
    pub const BT_UART_TX: PinId = PinId::new(13, 5);
    pub const BT_UART_RTS: PinId = PinId::new(13, 6);
    pub const BT_UART_CTS: PinId = PinId::new(13, 7);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::current::RESOURCE_LAYOUT;

    #[test]
    fn every_pin_exists_on_the_device() {
        for cfg in PINS {
            assert!(
                RESOURCE_LAYOUT.index_of(cfg.id.resource()).is_some(),
                "{} is not a device pin",
                cfg.name
            );
        }
        for id in [pin::USER_LED, pin::USER_BTN, pin::BT_UART_CTS, pin::THERM_OUT] {
            assert!(RESOURCE_LAYOUT.index_of(id.resource()).is_some());
        }
    }

    #[test]
    fn oscillator_pins_are_analog() {
        let wco: Vec<_> = PINS.iter().filter(|p| p.name.starts_with("WCO")).collect();
        assert_eq!(wco.len(), 2);
        assert!(wco.iter().all(|p| p.drive_mode == DriveMode::Analog));
    }
}
