#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod grid;
mod hunt;
mod hunter;
mod ledger;
pub mod prelude;
pub mod logging;
mod ship;
pub mod stats;
mod target;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use hunt::*;
pub use hunter::*;
pub use ledger::*;
pub use ship::*;
pub use target::*;
