//! The hunter's belief board and the geometry helpers its strategies share.

use core::fmt;

use crate::common::{Coordinate, HunterError};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, ShipKind};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// What the hunter knows about a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Not shot yet.
    #[default]
    Empty,
    Miss,
    /// Shot and found to hold this ship.
    Ship(ShipKind),
}

impl CellState {
    /// Two-character board symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            CellState::Empty => "~ ",
            CellState::Miss => "X ",
            CellState::Ship(kind) => kind.symbol(),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }
}

/// 10×10 grid of [`CellState`], indexed `[y][x]`.
///
/// Cells only ever move from `Empty` to `Miss` or `Ship`; [`BeliefBoard::resolve`]
/// refuses to touch a resolved cell.
#[derive(Clone, PartialEq, Eq)]
pub struct BeliefBoard {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl BeliefBoard {
    pub fn new() -> Self {
        Self {
            cells: [[CellState::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// State at `pos`, or `None` off the board.
    pub fn get(&self, pos: Coordinate) -> Option<CellState> {
        if pos.in_bounds() {
            Some(self.cells[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    pub fn in_bounds(&self, pos: Coordinate) -> bool {
        pos.in_bounds()
    }

    /// True iff `pos` has not been shot. Off-board positions are never empty.
    pub fn is_empty(&self, pos: Coordinate) -> bool {
        self.get(pos).is_some_and(CellState::is_empty)
    }

    /// Record the outcome of a shot at `pos`.
    pub(crate) fn resolve(&mut self, pos: Coordinate, state: CellState) -> Result<(), HunterError> {
        if !pos.in_bounds() {
            return Err(HunterError::OutOfBounds(pos));
        }
        let cell = &mut self.cells[pos.y as usize][pos.x as usize];
        if !cell.is_empty() {
            return Err(HunterError::AlreadyResolved(pos));
        }
        *cell = state;
        Ok(())
    }

    /// Length of the run of empty cells through `pos` along `orientation`,
    /// counting `pos` itself and both directions. Zero if `pos` is not empty.
    pub fn available_run(&self, pos: Coordinate, orientation: Orientation) -> usize {
        if !self.is_empty(pos) {
            return 0;
        }
        let (dx, dy) = orientation.step();
        1 + self.count_empty(pos, dx, dy) + self.count_empty(pos, -dx, -dy)
    }

    fn count_empty(&self, from: Coordinate, dx: i32, dy: i32) -> usize {
        let mut count = 0;
        let mut cursor = from.offset(dx, dy);
        while self.is_empty(cursor) {
            count += 1;
            cursor = cursor.offset(dx, dy);
        }
        count
    }

    /// True if some horizontal or vertical placement of a `size`-long ship
    /// covering `pos` lies entirely on empty cells.
    pub fn can_fit_ship(&self, pos: Coordinate, size: usize) -> bool {
        if size > BOARD_SIZE as usize || !self.in_bounds(pos) {
            return false;
        }
        let size = size as i32;
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .any(|orientation| {
                let (dx, dy) = orientation.step();
                (0..size).any(|back| {
                    let start = pos.offset(-dx * back, -dy * back);
                    (0..size).all(|i| self.is_empty(start.offset(dx * i, dy * i)))
                })
            })
    }

    /// Every cell with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Coordinate::new(x as i32, y as i32), cell))
        })
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[CellState; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Number of cells still empty.
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_empty()).count()
    }
}

impl Default for BeliefBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BeliefBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            for cell in row {
                f.write_str(cell.symbol())?;
            }
            if y + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for BeliefBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BeliefBoard:")?;
        fmt::Display::fmt(self, f)
    }
}
