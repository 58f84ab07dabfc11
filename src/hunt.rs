//! Hunting: where to shoot while no located ship is waiting to be sunk.
//!
//! Every ship spans at least two adjacent cells, so it always covers one cell
//! of the checkerboard lattice `x % 2 == y % 2`. Probing only that lattice
//! halves the search without missing a ship.

use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{Coordinate, HunterError};
use crate::config::{HuntingKind, BOARD_SIZE};
use crate::grid::BeliefBoard;
use crate::ledger::ShipProgress;

/// Empty lattice cells: row `y` scans columns `y % 2, y % 2 + 2, ...`.
pub fn checkerboard_candidates(board: &BeliefBoard) -> Vec<Coordinate> {
    let n = BOARD_SIZE as i32;
    let mut empty = Vec::new();
    for y in 0..n {
        for x in (y % 2..n).step_by(2) {
            let pos = Coordinate::new(x, y);
            if board.is_empty(pos) {
                empty.push(pos);
            }
        }
    }
    empty
}

/// Empty cells that could hold the largest ship still afloat.
pub fn cluster_candidates(board: &BeliefBoard, progress: &ShipProgress) -> Vec<Coordinate> {
    let Some(size) = progress.largest() else {
        return Vec::new();
    };
    board
        .cells()
        .filter(|(pos, cell)| cell.is_empty() && board.can_fit_ship(*pos, size))
        .map(|(pos, _)| pos)
        .collect()
}

impl HuntingKind {
    /// Every cell this strategy would consider.
    pub fn candidates(self, board: &BeliefBoard, progress: &ShipProgress) -> Vec<Coordinate> {
        match self {
            HuntingKind::Checkerboard => checkerboard_candidates(board),
            HuntingKind::Clusters => cluster_candidates(board, progress),
        }
    }

    /// Pick one candidate uniformly at random.
    pub fn select<R: Rng + ?Sized>(
        self,
        board: &BeliefBoard,
        progress: &ShipProgress,
        rng: &mut R,
    ) -> Result<Coordinate, HunterError> {
        self.candidates(board, progress)
            .choose(rng)
            .copied()
            .ok_or(HunterError::ExhaustedSearchSpace)
    }
}
