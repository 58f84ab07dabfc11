//! Per-ship bookkeeping owned by the hunter.

use alloc::vec::Vec;

use crate::common::Coordinate;
use crate::config::NUM_SHIPS;
use crate::ship::ShipKind;

/// Hits on ships that are located but not yet sunk, in discovery order.
///
/// An entry appears with a ship's first hit and is dropped when it sinks, so
/// the ledger never holds more hits for a ship than its length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitLedger {
    entries: Vec<(ShipKind, Vec<Coordinate>)>,
}

impl HitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, ship: ShipKind) -> bool {
        self.entries.iter().any(|(kind, _)| *kind == ship)
    }

    /// Hits recorded on `ship`, oldest first.
    pub fn hits(&self, ship: ShipKind) -> Option<&[Coordinate]> {
        self.entries
            .iter()
            .find(|(kind, _)| *kind == ship)
            .map(|(_, hits)| hits.as_slice())
    }

    /// Cells of `ship` not yet hit.
    pub fn remaining(&self, ship: ShipKind) -> usize {
        let hit = self.hits(ship).map_or(0, <[Coordinate]>::len);
        ship.length().saturating_sub(hit)
    }

    /// Append a hit, creating the ship's entry if needed. Returns the ship's hit count.
    pub(crate) fn record(&mut self, ship: ShipKind, pos: Coordinate) -> usize {
        match self.entries.iter_mut().find(|(kind, _)| *kind == ship) {
            Some((_, hits)) => {
                hits.push(pos);
                hits.len()
            }
            None => {
                self.entries.push((ship, alloc::vec![pos]));
                1
            }
        }
    }

    pub(crate) fn remove(&mut self, ship: ShipKind) -> Option<Vec<Coordinate>> {
        let idx = self.entries.iter().position(|(kind, _)| *kind == ship)?;
        Some(self.entries.remove(idx).1)
    }

    /// Ships with their hits, in the order they were first hit.
    pub fn iter(&self) -> impl Iterator<Item = (ShipKind, &[Coordinate])> + '_ {
        self.entries.iter().map(|(kind, hits)| (*kind, hits.as_slice()))
    }

    /// The ship that has been in the ledger longest.
    pub fn first(&self) -> Option<ShipKind> {
        self.entries.first().map(|(kind, _)| *kind)
    }
}

/// Ships not yet sunk, with the number of their cells still unhit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipProgress {
    remaining: [Option<usize>; NUM_SHIPS],
}

impl ShipProgress {
    /// Every ship afloat and untouched.
    pub fn new() -> Self {
        Self {
            remaining: ShipKind::ALL.map(|kind| Some(kind.length())),
        }
    }

    pub fn contains(&self, ship: ShipKind) -> bool {
        self.remaining[ship.index()].is_some()
    }

    /// Cells left to hit, or `None` once the ship is sunk.
    pub fn remaining(&self, ship: ShipKind) -> Option<usize> {
        self.remaining[ship.index()]
    }

    pub(crate) fn record_hit(&mut self, ship: ShipKind) {
        if let Some(left) = self.remaining[ship.index()].as_mut() {
            *left = left.saturating_sub(1);
        }
    }

    pub(crate) fn remove(&mut self, ship: ShipKind) {
        self.remaining[ship.index()] = None;
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.iter().all(Option::is_none)
    }

    /// Ships still afloat, in catalogue order.
    pub fn afloat(&self) -> impl Iterator<Item = ShipKind> + '_ {
        ShipKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }

    /// Length of the largest ship still afloat.
    pub fn largest(&self) -> Option<usize> {
        self.afloat().map(ShipKind::length).max()
    }
}

impl Default for ShipProgress {
    fn default() -> Self {
        Self::new()
    }
}
