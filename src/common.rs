//! Common types for the hunter: coordinates, shot results and errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;
use crate::ship::ShipKind;

/// A board position, `x` is the column and `y` the row.
///
/// Components are signed so that stepping off the board yields a value that
/// [`Coordinate::in_bounds`] rejects instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// True iff both components are in `[0, BOARD_SIZE)`.
    pub fn in_bounds(self) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Sign of `n`: -1, 0 or 1.
pub fn sign(n: i32) -> i32 {
    n.signum()
}

/// Result of resolving a shot against the truth board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Miss,
    /// The shot struck the given ship.
    Hit(ShipKind),
}

/// Errors raised by the hunter when its caller breaks a precondition or its
/// search runs dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunterError {
    /// Outcome reported for a coordinate off the board.
    OutOfBounds(Coordinate),
    /// Outcome reported for a cell that was already resolved.
    AlreadyResolved(Coordinate),
    /// Hit reported on a ship the hunter has already sunk.
    ShipAlreadySunk(ShipKind),
    /// Hunting found no candidate cell.
    ExhaustedSearchSpace,
    /// No targeting strategy produced a candidate for any ship with hits.
    UnresolvableTarget(ShipKind),
}

impl fmt::Display for HunterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HunterError::OutOfBounds(pos) => write!(f, "Coordinate {} is off the board", pos),
            HunterError::AlreadyResolved(pos) => {
                write!(f, "Coordinate {} has already been shot", pos)
            }
            HunterError::ShipAlreadySunk(ship) => write!(f, "{} is already sunk", ship),
            HunterError::ExhaustedSearchSpace => write!(f, "No empty cell left to hunt"),
            HunterError::UnresolvableTarget(ship) => {
                write!(f, "No target candidate left for the {}", ship)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HunterError {}

/// Errors returned by truth board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced(ShipKind),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship extends past the board edge.
    ShipOutOfBounds,
    /// Shot was already taken at this position.
    AlreadyGuessed(Coordinate),
    /// Random placement gave up.
    UnableToPlaceShip(ShipKind),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ShipAlreadyPlaced(ship) => write!(f, "{} is already placed", ship),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::AlreadyGuessed(pos) => write!(f, "Shot already taken at {}", pos),
            BoardError::UnableToPlaceShip(ship) => write!(f, "Unable to place the {}", ship),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
