//! The hidden truth board: ship placements and the shots fired at them.

use core::fmt;
use rand::Rng;

use crate::common::{BoardError, Coordinate, ShotResult};
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::ship::{OceanBits, Orientation, PlacedShip, ShipKind};

/// Give up on random placement of one ship after this many tries.
const PLACEMENT_ATTEMPTS: usize = 100;

pub struct OceanBoard {
    ships: [Option<PlacedShip>; NUM_SHIPS],
    ship_map: OceanBits,
    shots: OceanBits,
}

impl OceanBoard {
    /// An empty ocean, no ships placed.
    pub fn new() -> Self {
        OceanBoard {
            ships: [None; NUM_SHIPS],
            ship_map: OceanBits::new(),
            shots: OceanBits::new(),
        }
    }

    /// Place `kind` with its first cell at `origin`.
    pub fn place(
        &mut self,
        kind: ShipKind,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if self.ships[kind.index()].is_some() {
            return Err(BoardError::ShipAlreadyPlaced(kind));
        }
        let ship = PlacedShip::new(kind, origin, orientation)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships[kind.index()] = Some(ship);
        Ok(())
    }

    /// A random origin and orientation for `kind` that fits the board and
    /// overlaps nothing already placed.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<(Coordinate, Orientation), BoardError> {
        let reach = BOARD_SIZE as i32 - kind.length() as i32;
        let last = BOARD_SIZE as i32 - 1;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (reach, last),
                Orientation::Vertical => (last, reach),
            };
            let origin = Coordinate::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            let ship = PlacedShip::new(kind, origin, orientation)?;
            if (self.ship_map & ship.mask()).is_empty() {
                return Ok((origin, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip(kind))
    }

    /// Place every ship of the fleet at random.
    pub fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for kind in SHIPS {
            let (origin, orientation) = self.random_placement(rng, kind)?;
            self.place(kind, origin, orientation)?;
        }
        Ok(())
    }

    /// Resolve a shot at `pos`.
    pub fn fire(&mut self, pos: Coordinate) -> Result<ShotResult, BoardError> {
        if self.shots.get(pos)? {
            return Err(BoardError::AlreadyGuessed(pos));
        }
        self.shots.set(pos)?;
        Ok(match self.ship_at(pos) {
            Some(kind) => ShotResult::Hit(kind),
            None => ShotResult::Miss,
        })
    }

    /// The ship occupying `pos`, if any.
    pub fn ship_at(&self, pos: Coordinate) -> Option<ShipKind> {
        if !self.ship_map.get(pos).unwrap_or(false) {
            return None;
        }
        self.placed().find(|ship| ship.contains(pos)).map(PlacedShip::kind)
    }

    /// Mark a placed ship as sunk.
    pub fn sink_ship(&mut self, kind: ShipKind) {
        if let Some(ship) = self.ships[kind.index()].as_mut() {
            ship.set_sunk();
        }
    }

    pub fn ship(&self, kind: ShipKind) -> Option<&PlacedShip> {
        self.ships[kind.index()].as_ref()
    }

    /// Placed ships in catalogue order.
    pub fn placed(&self) -> impl Iterator<Item = &PlacedShip> + '_ {
        self.ships.iter().flatten()
    }

    /// Number of placed ships not yet sunk.
    pub fn ships_left(&self) -> usize {
        self.placed().filter(|ship| !ship.is_sunk()).count()
    }

    pub fn all_sunk(&self) -> bool {
        self.ships_left() == 0
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> OceanBits {
        self.ship_map
    }

    /// Every cell shot so far.
    pub fn shots(&self) -> OceanBits {
        self.shots
    }
}

impl Default for OceanBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OceanBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = BOARD_SIZE as i32;
        for y in 0..n {
            for x in 0..n {
                let symbol = match self.ship_at(Coordinate::new(x, y)) {
                    Some(kind) => kind.symbol(),
                    None => "~ ",
                };
                f.write_str(symbol)?;
            }
            if y + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for OceanBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "OceanBoard {{\n  ship_map: {:?},\n  shots: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.shots, self.ships
        )
    }
}
