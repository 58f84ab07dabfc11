//! Commonly used types for ease of import.

pub use crate::{
    Coordinate, GameEngine, GameStatus, Hunter, HunterConfig, HunterError, HuntingKind, ShipKind,
    TargetingKind,
};

#[cfg(feature = "std")]
pub use crate::{logging::init_logging, ui::TerminalUi};
