//! Hardware Manager Layer
//!
//! This crate tracks ownership of physical hardware blocks and the power
//! transition hooks of the system, and defines the interfaces through which
//! the board package reaches the register-level drivers.
//!
//! # Module Organization
//!
//! - [`resource`]: Resource descriptors (the keys of the registry)
//! - [`hwmgr`]: Resource registry arbitrating exclusive ownership
//! - [`syspm`]: Power-transition callback chain and power-manager state
//! - [`clock`], [`gpio`], [`supply`]: Static configuration table types
//! - [`config`]: Errors surfaced by configuration applicators
//! - [`platform`]: The external collaborators of board bring-up
//!
//! # Concurrency
//!
//! Registry mutations are single atomic read-modify-write operations and may
//! run from any context, interrupt handlers included. The callback chain sits
//! behind an [`common::sync::IrqSpinLock`]; registration while a transition is
//! being dispatched is rejected rather than deadlocking.
//!
//! # Usage Example
//!
//! ```
//! use hal::hwmgr::{BlockLayout, ResourceLayout, ResourceRegistry};
//! use hal::resource::{ResourceDescriptor, ResourceKind};
//!
//! static LAYOUT: ResourceLayout =
//!     ResourceLayout::new(&[BlockLayout::new(ResourceKind::Dma, &[4, 4])]);
//!
//! let registry: ResourceRegistry = ResourceRegistry::new(&LAYOUT);
//! registry.init().unwrap();
//! let ch = ResourceDescriptor::new(ResourceKind::Dma, 1, 2);
//! registry.reserve(ch).unwrap();
//! assert!(registry.reserve(ch).is_err());
//! ```

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod gpio;
pub mod hwmgr;
pub mod platform;
pub mod resource;
pub mod supply;
pub mod syspm;

// Re-export commonly used types
pub use config::ConfigError;
pub use hwmgr::{HwmgrError, ResourceRegistry};
pub use platform::Platform;
pub use resource::{ResourceDescriptor, ResourceKind};
pub use syspm::{CallbackEntry, PmError, PowerCallback, SysPm, Transition, TransitionMask};
