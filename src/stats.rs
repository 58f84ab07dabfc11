//! Score aggregation over many games.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::HunterConfig;
use crate::game::{GameEngine, GameError, GameSummary, GameStatus};
use crate::hunter::Hunter;

/// Running totals across finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregate {
    games: usize,
    shots_hit: usize,
    total_shots: usize,
    accuracy_sum: f64,
    targeting_fallbacks: usize,
}

/// Per-game averages.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub games: usize,
    pub avg_shots_hit: f64,
    pub avg_total_shots: f64,
    /// Mean of per-game accuracy percentages.
    pub avg_accuracy: f64,
    pub avg_targeting_fallbacks: f64,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished game. Games stopped early are ignored.
    pub fn record(&mut self, summary: &GameSummary) {
        if summary.status != GameStatus::Won {
            return;
        }
        self.games += 1;
        self.shots_hit += summary.stats.shots_hit;
        self.total_shots += summary.stats.total_shots;
        self.accuracy_sum += summary.stats.accuracy();
        self.targeting_fallbacks += summary.stats.targeting_fallbacks;
    }

    pub fn games(&self) -> usize {
        self.games
    }

    pub fn report(&self) -> Report {
        let per_game = |total: f64| {
            if self.games == 0 {
                0.0
            } else {
                total / self.games as f64
            }
        };
        Report {
            games: self.games,
            avg_shots_hit: per_game(self.shots_hit as f64),
            avg_total_shots: per_game(self.total_shots as f64),
            avg_accuracy: per_game(self.accuracy_sum),
            avg_targeting_fallbacks: per_game(self.targeting_fallbacks as f64),
        }
    }
}

/// Play `games` complete games with `config`. Game `i` places its fleet with
/// seed `seed + 2i` and seeds its hunter with `seed + 2i + 1`.
pub fn run_games(config: HunterConfig, games: usize, seed: u64) -> Result<Aggregate, GameError> {
    let mut aggregate = Aggregate::new();
    for i in 0..games as u64 {
        let base = seed.wrapping_add(i.wrapping_mul(2));
        let mut placement = SmallRng::seed_from_u64(base);
        let hunter = Hunter::seeded(config, base.wrapping_add(1));
        let summary = GameEngine::random(&mut placement, hunter)?.run()?;
        aggregate.record(&summary);
    }
    Ok(aggregate)
}
