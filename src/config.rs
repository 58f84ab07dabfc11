use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipKind; NUM_SHIPS] = ShipKind::ALL;

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// Upper bound on shots in one game; every cell shot once.
pub const MAX_SHOTS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// How the hunter searches while no ship has unresolved hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
pub enum HuntingKind {
    /// Random pick among empty checkerboard-parity cells.
    #[default]
    Checkerboard,
    /// Random pick among empty cells that can hold the largest remaining ship.
    Clusters,
}

/// Which targeting strategy leads the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
pub enum TargetingKind {
    /// First empty orthogonal neighbour of any hit.
    Adjacency,
    /// Adjacency, skipping neighbours where the rest of the ship cannot fit.
    FitAware,
    /// Extend along the line of a ship's first two hits.
    #[default]
    Directional,
}

/// Strategy selection for a [`Hunter`](crate::Hunter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HunterConfig {
    pub hunting: HuntingKind,
    pub targeting: TargetingKind,
}

impl HunterConfig {
    pub const fn new(hunting: HuntingKind, targeting: TargetingKind) -> Self {
        Self { hunting, targeting }
    }
}
