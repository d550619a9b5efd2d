use hal::clock::{ClockPath, ClockSource, HfClock, SystemClockConfig, SystemConfig};

pub const SYSTEM_CONFIG: SystemConfig = SystemConfig {
    clocks: SystemClockConfig {
        // ECO footprint (P12.6/P12.7) is not populated.
        eco_hz: None,
        wco_enabled: true,
        paths: &[
            ClockPath {
                index: 0,
                source: ClockSource::Imo,
                multiplier_hz: Some(100_000_000),
            },
            ClockPath {
                index: 1,
                source: ClockSource::Imo,
                multiplier_hz: Some(48_000_000),
            },
            ClockPath {
                index: 2,
                source: ClockSource::Imo,
                multiplier_hz: None,
            },
        ],
        hf_clocks: &[
            HfClock { index: 0, path: 0, divider: 1 },
            HfClock { index: 2, path: 0, divider: 2 },
            HfClock { index: 3, path: 1, divider: 1 },
        ],
        peri_divider: 2,
    },
    peripherals: &[],
};
