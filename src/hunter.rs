//! The hunter: picks shots against a hidden board and tracks what it learns.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use log::Level;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::{Coordinate, HunterError};
use crate::config::HunterConfig;
use crate::grid::{BeliefBoard, CellState};
use crate::ledger::{HitLedger, ShipProgress};
use crate::logging::{Logger, NoopLogger};
use crate::ship::ShipKind;

/// Told by the hunter when one of its hits sinks a ship.
pub trait SinkListener {
    fn sink_ship(&mut self, ship: ShipKind);
}

/// Records sunk ships in the order they went down.
impl SinkListener for Vec<ShipKind> {
    fn sink_ship(&mut self, ship: ShipKind) {
        self.push(ship);
    }
}

/// Search phase, derived from whether any located ship is still afloat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hunting,
    Targeting,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Hunting => f.write_str("HUNTING"),
            Mode::Targeting => f.write_str("TARGETING"),
        }
    }
}

/// Shot counters for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HunterStats {
    pub shots_hit: usize,
    pub total_shots: usize,
    /// Times the configured targeting strategy came up empty and a less
    /// refined one was asked instead.
    pub targeting_fallbacks: usize,
}

impl HunterStats {
    /// Hits as a percentage of shots; zero before the first shot.
    pub fn accuracy(&self) -> f64 {
        if self.total_shots == 0 {
            0.0
        } else {
            self.shots_hit as f64 / self.total_shots as f64 * 100.0
        }
    }
}

/// Hunt/target search AI over a private belief board.
pub struct Hunter {
    config: HunterConfig,
    board: BeliefBoard,
    ships: ShipProgress,
    hits: HitLedger,
    stats: HunterStats,
    /// Shot chosen by the last `take_turn` and not yet resolved.
    pending: Option<Coordinate>,
    rng: SmallRng,
    logger: Box<dyn Logger>,
}

impl Hunter {
    pub fn new(config: HunterConfig, rng: SmallRng) -> Self {
        Self {
            config,
            board: BeliefBoard::new(),
            ships: ShipProgress::new(),
            hits: HitLedger::new(),
            stats: HunterStats::default(),
            pending: None,
            rng,
            logger: Box::new(NoopLogger),
        }
    }

    /// Hunter with a reproducible random stream.
    pub fn seeded(config: HunterConfig, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }

    pub fn with_logger<L: Logger + 'static>(mut self, logger: L) -> Self {
        self.logger = Box::new(logger);
        self
    }

    pub fn config(&self) -> HunterConfig {
        self.config
    }

    pub fn board(&self) -> &BeliefBoard {
        &self.board
    }

    pub fn ledger(&self) -> &HitLedger {
        &self.hits
    }

    /// Ships not yet confirmed sunk.
    pub fn ships(&self) -> &ShipProgress {
        &self.ships
    }

    pub fn stats(&self) -> HunterStats {
        self.stats
    }

    pub fn mode(&self) -> Mode {
        if self.hits.is_empty() {
            Mode::Hunting
        } else {
            Mode::Targeting
        }
    }

    /// Choose the next shot.
    ///
    /// Until an outcome is reported with [`Hunter::on_hit`] or
    /// [`Hunter::on_miss`], repeated calls return the same coordinate.
    pub fn take_turn(&mut self) -> Result<Coordinate, HunterError> {
        if let Some(pos) = self.pending {
            return Ok(pos);
        }
        let mode = self.mode();
        self.logger.log(Level::Debug, format_args!("Mode {}", mode));
        let pos = match mode {
            Mode::Hunting => {
                self.config
                    .hunting
                    .select(&self.board, &self.ships, &mut self.rng)?
            }
            Mode::Targeting => self.target()?,
        };
        self.logger
            .log(Level::Debug, format_args!("Shooting at {}", pos));
        self.pending = Some(pos);
        Ok(pos)
    }

    /// Walk the targeting chain until a strategy yields a cell.
    fn target(&mut self) -> Result<Coordinate, HunterError> {
        for (fallbacks, strategy) in self.config.targeting.chain().iter().enumerate() {
            if let Some(pos) = strategy.select_target(&self.hits, &self.board) {
                self.stats.targeting_fallbacks += fallbacks;
                return Ok(pos);
            }
            self.logger.log(
                Level::Debug,
                format_args!("{} targeting found no candidate", strategy.name()),
            );
        }
        let ship = self.hits.first().ok_or(HunterError::ExhaustedSearchSpace)?;
        self.logger.log(
            Level::Error,
            format_args!("No target candidate left for the {}", ship),
        );
        Err(HunterError::UnresolvableTarget(ship))
    }

    /// Record a miss at `pos`.
    pub fn on_miss(&mut self, pos: Coordinate) -> Result<(), HunterError> {
        self.board.resolve(pos, CellState::Miss)?;
        self.stats.total_shots += 1;
        self.pending = None;
        self.logger.log(Level::Debug, format_args!("Miss at {}", pos));
        Ok(())
    }

    /// Record a hit on `ship` at `pos`. If the hit sinks the ship, `listener`
    /// is told and `true` is returned.
    pub fn on_hit<L: SinkListener + ?Sized>(
        &mut self,
        ship: ShipKind,
        pos: Coordinate,
        listener: &mut L,
    ) -> Result<bool, HunterError> {
        if !self.ships.contains(ship) {
            return Err(HunterError::ShipAlreadySunk(ship));
        }
        self.board.resolve(pos, CellState::Ship(ship))?;
        let count = self.hits.record(ship, pos);
        self.ships.record_hit(ship);
        self.stats.shots_hit += 1;
        self.stats.total_shots += 1;
        self.pending = None;
        self.logger.log(
            Level::Debug,
            format_args!("Hit {} at {} ({}/{})", ship, pos, count, ship.length()),
        );

        if self.check_sink(ship) {
            self.on_sink(ship, listener);
            return Ok(true);
        }
        Ok(false)
    }

    /// True once `ship` has as many hits as cells, including after it has
    /// been removed from the ledger.
    pub fn check_sink(&self, ship: ShipKind) -> bool {
        if !self.ships.contains(ship) {
            return true;
        }
        self.hits
            .hits(ship)
            .is_some_and(|hits| hits.len() >= ship.length())
    }

    fn on_sink<L: SinkListener + ?Sized>(&mut self, ship: ShipKind, listener: &mut L) {
        self.hits.remove(ship);
        self.ships.remove(ship);
        listener.sink_ship(ship);
        self.logger.log(Level::Info, format_args!("Sunk the {}", ship));
    }
}

impl fmt::Debug for Hunter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hunter")
            .field("config", &self.config)
            .field("mode", &self.mode())
            .field("ledger", &self.hits)
            .field("ships", &self.ships)
            .field("stats", &self.stats)
            .field("pending", &self.pending)
            .finish()
    }
}
