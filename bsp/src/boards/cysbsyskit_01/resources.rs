use hal::hwmgr::{BlockLayout, ResourceLayout};
use hal::resource::{ResourceDescriptor, ResourceKind, clock_block};

/// Hardware inventory of the CY8C6247FDI-D52.
///
/// The die has no SDHC block; the radio's SDIO link runs on UDBs.
pub static RESOURCE_LAYOUT: ResourceLayout = ResourceLayout::new(&[
    BlockLayout::new(ResourceKind::Adc, &[1]),
    // 8-bit, 16-bit, 16.5-bit and 24.5-bit peripheral dividers.
    BlockLayout::new(ResourceKind::Clock, &[8, 16, 4, 1]),
    // DataWire 0 and 1.
    BlockLayout::new(ResourceKind::Dma, &[16, 16]),
    BlockLayout::new(
        ResourceKind::Gpio,
        &[6, 6, 8, 6, 2, 8, 8, 8, 8, 8, 8, 8, 8, 8, 2],
    ),
    BlockLayout::new(ResourceKind::I2s, &[1]),
    BlockLayout::new(ResourceKind::Lpcomp, &[2]),
    BlockLayout::new(ResourceKind::Pdm, &[1]),
    BlockLayout::new(ResourceKind::Rtc, &[1]),
    BlockLayout::new(ResourceKind::Scb, &[1; 9]),
    BlockLayout::new(ResourceKind::Smif, &[1]),
    // 32-bit and 16-bit counter groups.
    BlockLayout::new(ResourceKind::Tcpwm, &[8, 24]),
    BlockLayout::new(ResourceKind::Usb, &[1]),
]);

/// Dividers used by the connectivity module's host interface.
///
/// Reserved in this order by the last init stage.
pub const RESERVED: &[ResourceDescriptor] = &[
    ResourceDescriptor::clock(clock_block::PERIPHERAL_16BIT, 0),
    ResourceDescriptor::clock(clock_block::PERIPHERAL_16BIT, 1),
];
