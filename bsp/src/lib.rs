//! Board Support Package
//!
//! Takes the board from reset to a known-good hardware state: clocks
//! configured, pins driven to their designed levels, the clock system hooked
//! into deep-sleep transitions and the board's own hardware blocks claimed.
//!
//! # Module Organization
//!
//! - [`init`]: The five-stage init sequencer and the [`init::Board`] it builds
//! - [`boards`]: Compiled-in tables of the board selected by cargo feature
//! - [`logging`]: `log` backend writing to an integrator-supplied sink
//!
//! # Usage Example
//!
//! ```ignore
//! use bsp::boards::current::RESOURCE_LAYOUT;
//! use bsp::init::{Board, board_init};
//!
//! bsp::logging::init(debug_uart_write, log::LevelFilter::Info).ok();
//!
//! let mut board: Board = Board::new(&RESOURCE_LAYOUT);
//! if let Err(e) = board_init(&mut board, &mut platform) {
//!     // First failing stage and its cause.
//!     panic!("{}", e);
//! }
//!
//! let dma = board.registry().allocate(hal::ResourceKind::Dma)?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod boards;
pub mod init;
pub mod logging;

// Re-export commonly used types
pub use init::{
    Board, BoardConfig, BoardInitError, BoardInitResult, BoardState, Cause, ConflictPolicy,
    SYSCLK_PM_CALLBACK_ORDER, Stage, board_init,
};
