//! Ship catalogue and placed-ship geometry.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coordinate};
use crate::config::BOARD_SIZE;

/// Occupancy bitboard for the standard board.
pub type OceanBits = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step along this orientation's axis.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// The five ship kinds of the classic game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Destroyer,
    Submarine,
    Cruiser,
    Battleship,
    Carrier,
}

impl ShipKind {
    /// Every kind, in catalogue order.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Destroyer,
        ShipKind::Submarine,
        ShipKind::Cruiser,
        ShipKind::Battleship,
        ShipKind::Carrier,
    ];

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 3,
            ShipKind::Cruiser => 3,
            ShipKind::Battleship => 4,
            ShipKind::Carrier => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Battleship => "Battleship",
            ShipKind::Carrier => "Carrier",
        }
    }

    /// Two-character board symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            ShipKind::Destroyer => "D ",
            ShipKind::Submarine => "S ",
            ShipKind::Cruiser => "C ",
            ShipKind::Battleship => "B ",
            ShipKind::Carrier => "R ",
        }
    }

    /// Position of the kind in [`ShipKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship placed on the truth board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PlacedShip {
    kind: ShipKind,
    origin: Coordinate,
    orientation: Orientation,
    mask: OceanBits,
    sunk: bool,
}

impl PlacedShip {
    /// Place `kind` with its first cell at `origin`, extending along
    /// `orientation`.
    pub fn new(
        kind: ShipKind,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if !origin.in_bounds() {
            return Err(BoardError::ShipOutOfBounds);
        }
        let (dx, dy) = orientation.step();
        let last = origin.offset(dx * (kind.length() as i32 - 1), dy * (kind.length() as i32 - 1));
        if !last.in_bounds() {
            return Err(BoardError::ShipOutOfBounds);
        }
        let cells = (0..kind.length() as i32).map(|i| origin.offset(dx * i, dy * i));
        let mask = OceanBits::from_coords(cells)?;
        Ok(PlacedShip {
            kind,
            origin,
            orientation,
            mask,
            sunk: false,
        })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> OceanBits {
        self.mask
    }

    pub fn contains(&self, pos: Coordinate) -> bool {
        self.mask.get(pos).unwrap_or(false)
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub(crate) fn set_sunk(&mut self) {
        self.sunk = true;
    }
}

impl fmt::Debug for PlacedShip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlacedShip {{ kind: {}, origin: {}, orientation: {:?}, sunk: {} }}",
            self.kind, self.origin, self.orientation, self.sunk,
        )
    }
}
