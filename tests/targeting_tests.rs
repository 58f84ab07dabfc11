use battleship_hunter::{
    checkerboard_candidates, cluster_candidates, Adjacency, Coordinate, Directional, FitAware,
    Hunter, HunterConfig, HuntingKind, Orientation, ShipKind, TargetingKind, TargetingStrategy,
};

fn at(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

fn fresh() -> Hunter {
    Hunter::seeded(HunterConfig::default(), 11)
}

fn hit(hunter: &mut Hunter, ship: ShipKind, x: i32, y: i32) {
    hunter.on_hit(ship, at(x, y), &mut Vec::new()).unwrap();
}

#[test]
fn test_directional_extends_forward_then_backward() {
    let mut hunter = fresh();
    hit(&mut hunter, ShipKind::Cruiser, 2, 2);
    hit(&mut hunter, ShipKind::Cruiser, 3, 2);
    assert_eq!(
        Directional.select_target(hunter.ledger(), hunter.board()),
        Some(at(4, 2))
    );

    hunter.on_miss(at(4, 2)).unwrap();
    assert_eq!(
        Directional.select_target(hunter.ledger(), hunter.board()),
        Some(at(1, 2))
    );
}

#[test]
fn test_directional_backs_off_board_edge() {
    let mut hunter = fresh();
    hit(&mut hunter, ShipKind::Carrier, 8, 0);
    hit(&mut hunter, ShipKind::Carrier, 9, 0);
    assert_eq!(
        Directional.select_target(hunter.ledger(), hunter.board()),
        Some(at(7, 0))
    );
}

#[test]
fn test_directional_follows_vertical_line() {
    let mut hunter = fresh();
    hit(&mut hunter, ShipKind::Battleship, 6, 5);
    hit(&mut hunter, ShipKind::Battleship, 6, 4);
    hit(&mut hunter, ShipKind::Battleship, 6, 3);
    // second hit is above the first, so forward is up
    assert_eq!(
        Directional.select_target(hunter.ledger(), hunter.board()),
        Some(at(6, 2))
    );
}

#[test]
fn test_directional_skips_single_hits() {
    let mut hunter = fresh();
    hit(&mut hunter, ShipKind::Submarine, 4, 4);
    assert_eq!(
        Directional.select_target(hunter.ledger(), hunter.board()),
        None
    );
    // the hunter still has an answer through the chain
    assert_eq!(hunter.take_turn().unwrap(), at(3, 4));
}

#[test]
fn test_fit_aware_rejects_short_runs() {
    let mut hunter = fresh();
    hit(&mut hunter, ShipKind::Carrier, 5, 5);
    hunter.on_miss(at(3, 5)).unwrap();
    hunter.on_miss(at(7, 5)).unwrap();

    let board = hunter.board();
    assert_eq!(board.available_run(at(4, 5), Orientation::Horizontal), 1);
    assert_eq!(board.available_run(at(6, 5), Orientation::Horizontal), 1);
    assert_eq!(board.available_run(at(5, 4), Orientation::Vertical), 5);

    assert_eq!(
        FitAware.select_target(hunter.ledger(), hunter.board()),
        Some(at(5, 4))
    );
    assert_eq!(
        Adjacency.select_target(hunter.ledger(), hunter.board()),
        Some(at(4, 5))
    );
}

#[test]
fn test_adjacency_prefers_oldest_ship() {
    let mut hunter = fresh();
    hit(&mut hunter, ShipKind::Cruiser, 0, 0);
    hit(&mut hunter, ShipKind::Submarine, 5, 5);
    assert_eq!(
        Adjacency.select_target(hunter.ledger(), hunter.board()),
        Some(at(1, 0))
    );
}

#[test]
fn test_adjacency_neighbour_order() {
    let mut hunter = fresh();
    hit(&mut hunter, ShipKind::Submarine, 5, 5);
    let expected = [at(4, 5), at(6, 5), at(5, 4), at(5, 6)];
    for pos in expected {
        assert_eq!(
            Adjacency.select_target(hunter.ledger(), hunter.board()),
            Some(pos)
        );
        hunter.on_miss(pos).unwrap();
    }
    assert_eq!(
        Adjacency.select_target(hunter.ledger(), hunter.board()),
        None
    );
}

#[test]
fn test_chains_end_in_adjacency() {
    let names = |kind: TargetingKind| -> Vec<&'static str> {
        kind.chain().iter().map(|s| s.name()).collect()
    };
    assert_eq!(names(TargetingKind::Adjacency), vec!["adjacency"]);
    assert_eq!(names(TargetingKind::FitAware), vec!["fit-aware", "adjacency"]);
    assert_eq!(
        names(TargetingKind::Directional),
        vec!["directional", "fit-aware", "adjacency"]
    );
    assert_eq!(TargetingKind::FitAware.strategy().name(), "fit-aware");
}

#[test]
fn test_available_run_and_fit_on_fresh_board() {
    let hunter = fresh();
    let board = hunter.board();
    assert_eq!(board.available_run(at(0, 0), Orientation::Horizontal), 10);
    assert_eq!(board.available_run(at(4, 7), Orientation::Vertical), 10);
    assert_eq!(board.available_run(at(-1, 0), Orientation::Vertical), 0);
    assert!(board.can_fit_ship(at(9, 9), 5));
    assert!(board.can_fit_ship(at(9, 9), 10));
}

#[test]
fn test_can_fit_ship_rejects_oversized_or_off_board() {
    let hunter = fresh();
    let board = hunter.board();
    assert!(!board.can_fit_ship(at(0, 0), 11));
    assert!(!board.can_fit_ship(at(0, 0), usize::MAX));
    assert!(!board.can_fit_ship(at(i32::MAX, 0), 2));
    assert!(!board.can_fit_ship(at(-1, 4), 2));
}

#[test]
fn test_can_fit_ship_in_pocket() {
    let mut hunter = fresh();
    hunter.on_miss(at(1, 0)).unwrap();
    hunter.on_miss(at(0, 2)).unwrap();
    let board = hunter.board();
    assert!(board.can_fit_ship(at(0, 0), 2));
    assert!(!board.can_fit_ship(at(0, 0), 3));
    assert!(!board.can_fit_ship(at(1, 0), 2));
}

#[test]
fn test_checkerboard_candidates_follow_parity() {
    let mut hunter = fresh();
    let all = checkerboard_candidates(hunter.board());
    assert_eq!(all.len(), 50);
    assert!(all.iter().all(|p| p.x % 2 == p.y % 2));

    hunter.on_miss(at(0, 0)).unwrap();
    hunter.on_miss(at(1, 0)).unwrap();
    let remaining = checkerboard_candidates(hunter.board());
    assert_eq!(remaining.len(), 49);
    assert!(!remaining.contains(&at(0, 0)));
}

#[test]
fn test_cluster_candidates_skip_pockets() {
    let mut hunter = Hunter::seeded(
        HunterConfig::new(HuntingKind::Clusters, TargetingKind::Directional),
        5,
    );
    assert_eq!(cluster_candidates(hunter.board(), hunter.ships()).len(), 100);

    hunter.on_miss(at(1, 0)).unwrap();
    hunter.on_miss(at(0, 1)).unwrap();
    let candidates = cluster_candidates(hunter.board(), hunter.ships());
    assert!(!candidates.contains(&at(0, 0)));
    assert_eq!(candidates.len(), 97);
}
