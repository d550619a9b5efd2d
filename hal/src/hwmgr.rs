//! Hardware manager: exclusive ownership of hardware blocks.
//!
//! Every block the device has is assigned one bit of a fixed bitmap by a
//! static [`ResourceLayout`]. Reserving is a single `fetch_or` on the word
//! holding that bit and releasing a single `fetch_and`; both inspect the
//! previous value, so a check-then-set can never interleave with another
//! context's check-then-set on the same descriptor. Each descriptor is an
//! independent atomic unit; nothing spans several descriptors.
//!
//! Double reservation is an error, never a no-op: two owners of the same
//! block is a configuration bug and is reported at the call site that loses.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use log::debug;

use crate::resource::{ResourceDescriptor, ResourceKind};

/// Bits per bitmap word.
const WORD_BITS: usize = u32::BITS as usize;

/// Default bitmap size in words (1024 resources).
pub const DEFAULT_WORDS: usize = 32;

/// Blocks of one resource kind.
#[derive(Debug, Clone, Copy)]
pub struct BlockLayout {
    pub kind: ResourceKind,
    /// Number of channels in each block, indexed by block number.
    pub channels: &'static [u16],
}

impl BlockLayout {
    pub const fn new(kind: ResourceKind, channels: &'static [u16]) -> Self {
        Self { kind, channels }
    }

    fn total(&self) -> usize {
        self.channels.iter().map(|&c| c as usize).sum()
    }
}

/// Resource inventory of a device.
///
/// Pure data. Bits are assigned in table order: kinds in the order listed,
/// then blocks, then channels.
#[derive(Debug, Clone, Copy)]
pub struct ResourceLayout {
    kinds: &'static [BlockLayout],
}

impl ResourceLayout {
    pub const fn new(kinds: &'static [BlockLayout]) -> Self {
        Self { kinds }
    }

    /// Total number of resources described.
    pub fn total(&self) -> usize {
        self.kinds.iter().map(BlockLayout::total).sum()
    }

    /// Bit index of `desc`, or `None` if the device has no such block.
    pub fn index_of(&self, desc: ResourceDescriptor) -> Option<usize> {
        let mut base = 0;
        for entry in self.kinds {
            if entry.kind != desc.kind {
                base += entry.total();
                continue;
            }
            let block = desc.block as usize;
            let channels = *entry.channels.get(block)?;
            if desc.channel >= channels {
                return None;
            }
            let before: usize = entry.channels[..block].iter().map(|&c| c as usize).sum();
            return Some(base + before + desc.channel as usize);
        }
        None
    }

    fn blocks_of(&self, kind: ResourceKind) -> Option<&'static [u16]> {
        self.kinds
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.channels)
    }
}

/// Set of currently reserved hardware blocks.
///
/// Created once at board bring-up and shared by reference with every driver
/// that claims hardware. All methods take `&self`.
pub struct ResourceRegistry<const WORDS: usize = DEFAULT_WORDS> {
    layout: &'static ResourceLayout,
    bits: [AtomicU32; WORDS],
}

impl<const WORDS: usize> ResourceRegistry<WORDS> {
    /// Create an empty registry for `layout`.
    pub const fn new(layout: &'static ResourceLayout) -> Self {
        Self {
            layout,
            bits: [const { AtomicU32::new(0) }; WORDS],
        }
    }

    /// Number of resources the bitmap can hold.
    pub const fn capacity(&self) -> usize {
        WORDS * WORD_BITS
    }

    pub fn layout(&self) -> &'static ResourceLayout {
        self.layout
    }

    /// Check that the layout fits the bitmap.
    ///
    /// Reservations made before `init` still work for descriptors that fit;
    /// `init` only guarantees every descriptor of the layout does.
    pub fn init(&self) -> Result<(), HwmgrError> {
        let required = self.layout.total();
        if required > self.capacity() {
            return Err(HwmgrError::LayoutTooLarge {
                required,
                capacity: self.capacity(),
            });
        }
        debug!("hwmgr: tracking {} resources", required);
        Ok(())
    }

    fn locate(&self, desc: ResourceDescriptor) -> Option<(&AtomicU32, u32)> {
        let index = self.layout.index_of(desc)?;
        let word = self.bits.get(index / WORD_BITS)?;
        Some((word, 1 << (index % WORD_BITS)))
    }

    /// Claim `desc`.
    ///
    /// Fails with [`HwmgrError::Conflict`] if it is already reserved; the
    /// failed call leaves the registry unchanged.
    pub fn reserve(&self, desc: ResourceDescriptor) -> Result<(), HwmgrError> {
        let (word, mask) = self.locate(desc).ok_or(HwmgrError::OutOfRange(desc))?;
        let prev = word.fetch_or(mask, Ordering::AcqRel);
        if prev & mask != 0 {
            return Err(HwmgrError::Conflict(desc));
        }
        debug!("hwmgr: reserved {}", desc);
        Ok(())
    }

    /// Give up a previous claim on `desc`.
    pub fn release(&self, desc: ResourceDescriptor) -> Result<(), HwmgrError> {
        let (word, mask) = self.locate(desc).ok_or(HwmgrError::OutOfRange(desc))?;
        let prev = word.fetch_and(!mask, Ordering::AcqRel);
        if prev & mask == 0 {
            return Err(HwmgrError::NotReserved(desc));
        }
        debug!("hwmgr: released {}", desc);
        Ok(())
    }

    /// Whether `desc` is currently reserved. Descriptors the device does not
    /// have are never reserved.
    pub fn is_reserved(&self, desc: ResourceDescriptor) -> bool {
        self.locate(desc)
            .is_some_and(|(word, mask)| word.load(Ordering::Acquire) & mask != 0)
    }

    /// Reserve the first free block of `kind`, scanning blocks then channels.
    pub fn allocate(&self, kind: ResourceKind) -> Result<ResourceDescriptor, HwmgrError> {
        let blocks = self
            .layout
            .blocks_of(kind)
            .ok_or(HwmgrError::NoFreeResource(kind))?;
        for (block, &channels) in blocks.iter().enumerate() {
            // Descriptors cannot name blocks past `u8::MAX`.
            let Ok(block) = u8::try_from(block) else {
                break;
            };
            for channel in 0..channels {
                let desc = ResourceDescriptor::new(kind, block, channel);
                match self.reserve(desc) {
                    Ok(()) => return Ok(desc),
                    Err(HwmgrError::Conflict(_)) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        Err(HwmgrError::NoFreeResource(kind))
    }

    /// Number of resources currently reserved.
    pub fn reserved_count(&self) -> usize {
        self.bits
            .iter()
            .map(|word| word.load(Ordering::Acquire).count_ones() as usize)
            .sum()
    }

    /// Drop every reservation.
    ///
    /// Teardown for tests; on target the registry lives until reset.
    pub fn reset(&self) {
        for word in &self.bits {
            word.store(0, Ordering::Release);
        }
    }
}

// region: Error Types

/// Errors returned by the [`ResourceRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "hardware manager errors must be handled"]
pub enum HwmgrError {
    /// The resource is already reserved by someone else.
    Conflict(ResourceDescriptor),
    /// Release of a resource nobody reserved; a lifecycle bug in the caller.
    NotReserved(ResourceDescriptor),
    /// The device has no such block or channel.
    OutOfRange(ResourceDescriptor),
    /// Every block of this kind is reserved (or the device has none).
    NoFreeResource(ResourceKind),
    /// The layout describes more resources than the bitmap holds.
    LayoutTooLarge { required: usize, capacity: usize },
}

impl fmt::Display for HwmgrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HwmgrError::Conflict(d) => write!(f, "{} is already reserved", d),
            HwmgrError::NotReserved(d) => write!(f, "{} is not reserved", d),
            HwmgrError::OutOfRange(d) => write!(f, "{} does not exist on this device", d),
            HwmgrError::NoFreeResource(k) => write!(f, "no free {} resource", k.name()),
            HwmgrError::LayoutTooLarge { required, capacity } => write!(
                f,
                "layout needs {} resources, registry holds {}",
                required, capacity
            ),
        }
    }
}

impl core::error::Error for HwmgrError {}

// endregion
