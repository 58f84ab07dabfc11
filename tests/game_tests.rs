use std::ops::ControlFlow;

use battleship_hunter::stats::{run_games, Aggregate};
use battleship_hunter::{
    Coordinate, GameEngine, GameError, GameStatus, Hunter, HunterConfig, HuntingKind, OceanBoard,
    Orientation, ShipKind, ShotResult, TargetingKind, Turn, MAX_SHOTS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fixed_ocean() -> OceanBoard {
    let mut ocean = OceanBoard::new();
    let layout = [
        (ShipKind::Destroyer, 0, 0, Orientation::Horizontal),
        (ShipKind::Submarine, 9, 0, Orientation::Vertical),
        (ShipKind::Cruiser, 3, 4, Orientation::Horizontal),
        (ShipKind::Battleship, 0, 6, Orientation::Vertical),
        (ShipKind::Carrier, 5, 9, Orientation::Horizontal),
    ];
    for (kind, x, y, orientation) in layout {
        ocean.place(kind, Coordinate::new(x, y), orientation).unwrap();
    }
    ocean
}

#[test]
fn test_ai_game_runs_to_completion() {
    for targeting in [
        TargetingKind::Adjacency,
        TargetingKind::FitAware,
        TargetingKind::Directional,
    ] {
        let hunter = Hunter::seeded(HunterConfig::new(HuntingKind::Checkerboard, targeting), 123);
        let mut game = GameEngine::new(fixed_ocean(), hunter);
        let summary = game.run().unwrap();

        assert_eq!(summary.status, GameStatus::Won);
        assert_eq!(summary.stats.shots_hit, TOTAL_SHIP_CELLS);
        assert!(summary.stats.total_shots <= MAX_SHOTS);
        assert_eq!(game.turns(), summary.stats.total_shots);
        assert!(game.hunter().ledger().is_empty());
        assert!(game.hunter().ships().is_empty());
        assert!(ShipKind::ALL
            .iter()
            .all(|kind| game.ocean().ship(*kind).unwrap().is_sunk()));
    }
}

#[test]
fn test_sinks_reported_to_ocean() {
    let mut rng = SmallRng::seed_from_u64(9);
    let hunter = Hunter::seeded(HunterConfig::default(), 10);
    let mut game = GameEngine::random(&mut rng, hunter).unwrap();

    let mut sunk = Vec::new();
    while game.status() == GameStatus::InProgress {
        let turn = game.step().unwrap();
        if let Some(kind) = turn.sunk {
            assert_eq!(turn.result, ShotResult::Hit(kind));
            assert!(game.ocean().ship(kind).unwrap().is_sunk());
            sunk.push(kind);
        }
        assert_eq!(game.ocean().ships_left(), 5 - sunk.len());
    }
    sunk.sort();
    assert_eq!(sunk, ShipKind::ALL.to_vec());
}

#[test]
fn test_observer_can_stop_the_game() {
    let hunter = Hunter::seeded(HunterConfig::default(), 1);
    let mut game = GameEngine::new(fixed_ocean(), hunter);
    let mut seen = 0;
    let mut stop_after_three = |_: &GameEngine, turn: &Turn| {
        seen += 1;
        if turn.number == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    };
    let summary = game.run_with(&mut stop_after_three).unwrap();
    assert_eq!(summary.status, GameStatus::InProgress);
    assert_eq!(seen, 3);
    assert_eq!(game.turns(), 3);
}

#[test]
fn test_run_games_is_reproducible() {
    let config = HunterConfig::new(HuntingKind::Clusters, TargetingKind::Directional);
    let first = run_games(config, 10, 77).unwrap().report();
    let second = run_games(config, 10, 77).unwrap().report();
    assert_eq!(first, second);
    assert_eq!(first.games, 10);
    assert!((first.avg_shots_hit - TOTAL_SHIP_CELLS as f64).abs() < 1e-9);
    assert!(first.avg_total_shots >= TOTAL_SHIP_CELLS as f64);
    assert!(first.avg_accuracy > 0.0 && first.avg_accuracy <= 100.0);
}

#[test]
fn test_aggregate_ignores_unfinished_games() {
    let hunter = Hunter::seeded(HunterConfig::default(), 4);
    let mut game = GameEngine::new(fixed_ocean(), hunter);
    game.step().unwrap();

    let mut aggregate = Aggregate::new();
    aggregate.record(&game.summary());
    assert_eq!(aggregate.games(), 0);
    assert_eq!(aggregate.report().avg_total_shots, 0.0);
}

#[test]
fn test_turn_limit_stops_the_game() {
    let hunter = Hunter::seeded(HunterConfig::default(), 5);
    let mut game = GameEngine::new(fixed_ocean(), hunter).with_turn_limit(3);
    assert_eq!(game.run().unwrap_err(), GameError::TurnLimit(3));
    assert_eq!(game.turns(), 3);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.step().unwrap_err().to_string(), "Game exceeded 3 shots");
}
