//! Targeting: finishing off ships that have been hit but not sunk.
//!
//! All strategies walk the ledger in discovery order, each ship's hits in the
//! order they landed, and neighbours left, right, up, down. The first
//! acceptable cell wins, so targeting is deterministic.

use crate::common::{sign, Coordinate};
use crate::config::TargetingKind;
use crate::grid::BeliefBoard;
use crate::ledger::HitLedger;
use crate::ship::Orientation;

/// Orthogonal neighbour offsets with the orientation a ship through both
/// cells would have.
pub const NEIGHBOURS: [(i32, i32, Orientation); 4] = [
    (-1, 0, Orientation::Horizontal),
    (1, 0, Orientation::Horizontal),
    (0, -1, Orientation::Vertical),
    (0, 1, Orientation::Vertical),
];

/// A way of choosing the next shot at a located ship.
pub trait TargetingStrategy {
    fn name(&self) -> &'static str;

    /// Next in-bounds, empty cell to shoot, or `None` if this strategy has
    /// nothing to offer for any ship in the ledger.
    fn select_target(&self, ledger: &HitLedger, board: &BeliefBoard) -> Option<Coordinate>;
}

/// First empty neighbour of any hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adjacency;

impl TargetingStrategy for Adjacency {
    fn name(&self) -> &'static str {
        "adjacency"
    }

    fn select_target(&self, ledger: &HitLedger, board: &BeliefBoard) -> Option<Coordinate> {
        ledger.iter().find_map(|(_, hits)| {
            hits.iter().find_map(|hit| {
                NEIGHBOURS
                    .iter()
                    .map(|&(dx, dy, _)| hit.offset(dx, dy))
                    .find(|&pos| board.is_empty(pos))
            })
        })
    }
}

/// Like [`Adjacency`], but a neighbour only counts if the empty run through
/// it, along the implied orientation, can hold the ship's unhit cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitAware;

impl TargetingStrategy for FitAware {
    fn name(&self) -> &'static str {
        "fit-aware"
    }

    fn select_target(&self, ledger: &HitLedger, board: &BeliefBoard) -> Option<Coordinate> {
        ledger.iter().find_map(|(ship, hits)| {
            let needed = ledger.remaining(ship);
            hits.iter().find_map(|hit| {
                NEIGHBOURS.iter().find_map(|&(dx, dy, orientation)| {
                    let pos = hit.offset(dx, dy);
                    (board.is_empty(pos) && board.available_run(pos, orientation) >= needed)
                        .then_some(pos)
                })
            })
        })
    }
}

/// Once a ship has two hits, its line is known: extend past the leading hit,
/// or before the trailing one if that is blocked. Ships with a single hit are
/// left to the next strategy in the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directional;

impl Directional {
    fn extend(hits: &[Coordinate], board: &BeliefBoard) -> Option<Coordinate> {
        let (first, second) = match hits {
            [first, second, ..] => (*first, *second),
            _ => return None,
        };
        let dx = sign(second.x - first.x);
        let dy = sign(second.y - first.y);
        let along = |pos: &&Coordinate| pos.x * dx + pos.y * dy;
        let lead = hits.iter().max_by_key(along)?;
        let trail = hits.iter().min_by_key(along)?;

        let forward = lead.offset(dx, dy);
        if board.is_empty(forward) {
            return Some(forward);
        }
        let backward = trail.offset(-dx, -dy);
        board.is_empty(backward).then_some(backward)
    }
}

impl TargetingStrategy for Directional {
    fn name(&self) -> &'static str {
        "directional"
    }

    fn select_target(&self, ledger: &HitLedger, board: &BeliefBoard) -> Option<Coordinate> {
        ledger
            .iter()
            .find_map(|(_, hits)| Self::extend(hits, board))
    }
}

const ADJACENCY_CHAIN: &[&dyn TargetingStrategy] = &[&Adjacency];
const FIT_AWARE_CHAIN: &[&dyn TargetingStrategy] = &[&FitAware, &Adjacency];
const DIRECTIONAL_CHAIN: &[&dyn TargetingStrategy] = &[&Directional, &FitAware, &Adjacency];

impl TargetingKind {
    /// The strategy this kind names.
    pub fn strategy(self) -> &'static dyn TargetingStrategy {
        self.chain()[0]
    }

    /// The named strategy followed by each less refined one to fall back on.
    pub fn chain(self) -> &'static [&'static dyn TargetingStrategy] {
        match self {
            TargetingKind::Adjacency => ADJACENCY_CHAIN,
            TargetingKind::FitAware => FIT_AWARE_CHAIN,
            TargetingKind::Directional => DIRECTIONAL_CHAIN,
        }
    }
}
