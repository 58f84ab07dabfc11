//! Game loop: runs a hunter against a hidden ocean until every ship is sunk.

use alloc::boxed::Box;
use core::fmt;
use core::ops::ControlFlow;

use log::Level;
use rand::Rng;

use crate::board::OceanBoard;
use crate::common::{BoardError, Coordinate, HunterError, ShotResult};
use crate::config::MAX_SHOTS;
use crate::hunter::{Hunter, HunterStats, SinkListener};
use crate::logging::{Logger, NoopLogger};
use crate::ship::ShipKind;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Errors that end a game early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Hunter(HunterError),
    Board(BoardError),
    /// The game ran past its shot cap without sinking the fleet.
    TurnLimit(usize),
}

impl From<HunterError> for GameError {
    fn from(err: HunterError) -> Self {
        GameError::Hunter(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Hunter(e) => write!(f, "Hunter error: {}", e),
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::TurnLimit(limit) => write!(f, "Game exceeded {} shots", limit),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// 1-based turn count.
    pub number: usize,
    pub target: Coordinate,
    pub result: ShotResult,
    /// Ship sunk by this shot, if any.
    pub sunk: Option<ShipKind>,
}

/// Final tally of one game.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub status: GameStatus,
    pub stats: HunterStats,
}

/// Called between turns; may read the game but not change it.
pub trait TurnObserver {
    /// Return `Break` to stop the game after this turn.
    fn after_turn(&mut self, game: &GameEngine, turn: &Turn) -> ControlFlow<()>;
}

impl<F> TurnObserver for F
where
    F: FnMut(&GameEngine, &Turn) -> ControlFlow<()>,
{
    fn after_turn(&mut self, game: &GameEngine, turn: &Turn) -> ControlFlow<()> {
        self(game, turn)
    }
}

impl SinkListener for OceanBoard {
    fn sink_ship(&mut self, ship: ShipKind) {
        OceanBoard::sink_ship(self, ship);
    }
}

/// Owns the truth board and the hunter and sequences their turns.
pub struct GameEngine {
    ocean: OceanBoard,
    hunter: Hunter,
    turns: usize,
    max_turns: usize,
    logger: Box<dyn Logger>,
}

impl GameEngine {
    pub fn new(ocean: OceanBoard, hunter: Hunter) -> Self {
        Self {
            ocean,
            hunter,
            turns: 0,
            max_turns: MAX_SHOTS,
            logger: Box::new(NoopLogger),
        }
    }

    /// A game against a freshly and randomly placed fleet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, hunter: Hunter) -> Result<Self, GameError> {
        let mut ocean = OceanBoard::new();
        ocean.place_fleet(rng)?;
        Ok(Self::new(ocean, hunter))
    }

    pub fn with_logger<L: Logger + 'static>(mut self, logger: L) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Cap the game at `max_turns` shots instead of [`MAX_SHOTS`].
    pub fn with_turn_limit(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn ocean(&self) -> &OceanBoard {
        &self.ocean
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn status(&self) -> GameStatus {
        if self.ocean.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.status(),
            stats: self.hunter.stats(),
        }
    }

    /// Ask the hunter for a shot, resolve it and report the outcome back.
    pub fn step(&mut self) -> Result<Turn, GameError> {
        if self.turns >= self.max_turns {
            return Err(GameError::TurnLimit(self.max_turns));
        }
        let target = self.hunter.take_turn()?;
        let result = self.ocean.fire(target)?;
        let sunk = match result {
            ShotResult::Miss => {
                self.hunter.on_miss(target)?;
                None
            }
            ShotResult::Hit(kind) => self
                .hunter
                .on_hit(kind, target, &mut self.ocean)?
                .then_some(kind),
        };
        self.turns += 1;
        self.logger.log(
            Level::Debug,
            format_args!(
                "Turn {}: {} -> {:?}, ships left {}",
                self.turns,
                target,
                result,
                self.ocean.ships_left()
            ),
        );
        Ok(Turn {
            number: self.turns,
            target,
            result,
            sunk,
        })
    }

    /// Play to the end without interruption.
    pub fn run(&mut self) -> Result<GameSummary, GameError> {
        let mut ignore = |_: &GameEngine, _: &Turn| ControlFlow::<()>::Continue(());
        self.run_with(&mut ignore)
    }

    /// Play until every ship is sunk or `observer` breaks.
    pub fn run_with<O: TurnObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<GameSummary, GameError> {
        while self.status() == GameStatus::InProgress {
            let turn = self.step()?;
            if observer.after_turn(self, &turn).is_break() {
                self.logger
                    .log(Level::Info, format_args!("Game stopped after turn {}", turn.number));
                break;
            }
        }
        let summary = self.summary();
        if summary.status == GameStatus::Won {
            self.logger.log(
                Level::Info,
                format_args!(
                    "Game over: {} / {} ({:.2}%)",
                    summary.stats.shots_hit,
                    summary.stats.total_shots,
                    summary.stats.accuracy()
                ),
            );
        }
        Ok(summary)
    }
}
