use battleship_hunter::{
    BoardError, Coordinate, OceanBoard, Orientation, ShipKind, ShotResult, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_manual_place_and_fire() {
    let mut board = OceanBoard::new();
    board
        .place(ShipKind::Cruiser, Coordinate::new(2, 3), Orientation::Vertical)
        .unwrap();

    assert_eq!(
        board.fire(Coordinate::new(2, 4)).unwrap(),
        ShotResult::Hit(ShipKind::Cruiser)
    );
    assert_eq!(board.fire(Coordinate::new(3, 4)).unwrap(), ShotResult::Miss);
    // repeated shot triggers error
    assert_eq!(
        board.fire(Coordinate::new(2, 4)).unwrap_err(),
        BoardError::AlreadyGuessed(Coordinate::new(2, 4))
    );
    assert_eq!(board.shots().count_ones(), 2);
}

#[test]
fn test_place_rejects_overlap_and_overflow() {
    let mut board = OceanBoard::new();
    board
        .place(ShipKind::Carrier, Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board
            .place(ShipKind::Destroyer, Coordinate::new(4, 0), Orientation::Vertical)
            .unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        board
            .place(ShipKind::Battleship, Coordinate::new(7, 5), Orientation::Horizontal)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board
            .place(ShipKind::Carrier, Coordinate::new(0, 5), Orientation::Horizontal)
            .unwrap_err(),
        BoardError::ShipAlreadyPlaced(ShipKind::Carrier)
    );
    assert_eq!(board.ship(ShipKind::Carrier).unwrap().orientation(), Orientation::Horizontal);
}

#[test]
fn test_place_rejects_far_off_board_origin() {
    let mut board = OceanBoard::new();
    for origin in [
        Coordinate::new(i32::MAX, 0),
        Coordinate::new(0, i32::MAX),
        Coordinate::new(i32::MIN, 3),
    ] {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            assert_eq!(
                board.place(ShipKind::Carrier, origin, orientation).unwrap_err(),
                BoardError::ShipOutOfBounds
            );
        }
    }
    assert!(board.ship(ShipKind::Carrier).is_none());
}

#[test]
fn test_place_fleet_no_overlap() {
    let mut board = OceanBoard::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_fleet(&mut rng).unwrap();

    assert_eq!(
        board.ship_map().count_ones(),
        TOTAL_SHIP_CELLS,
        "all ships should be placed without overlap"
    );
    assert_eq!(board.ships_left(), 5);
    for kind in ShipKind::ALL {
        let ship = board.ship(kind).unwrap();
        assert_eq!(ship.mask().count_ones(), kind.length());
        assert_eq!(board.ship_at(ship.origin()), Some(kind));
    }
}

#[test]
fn test_sink_ship_tracks_ships_left() {
    let mut board = OceanBoard::new();
    board
        .place(ShipKind::Destroyer, Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    board
        .place(ShipKind::Submarine, Coordinate::new(0, 1), Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.ships_left(), 2);
    board.sink_ship(ShipKind::Destroyer);
    assert!(board.ship(ShipKind::Destroyer).unwrap().is_sunk());
    assert_eq!(board.ships_left(), 1);
    assert!(!board.all_sunk());
    board.sink_ship(ShipKind::Submarine);
    assert!(board.all_sunk());
}

#[test]
fn test_display_shows_ship_symbols() {
    let mut board = OceanBoard::new();
    board
        .place(ShipKind::Carrier, Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    let text = board.to_string();
    let first = text.lines().next().unwrap();
    assert_eq!(first, format!("{}{}", "R ".repeat(5), "~ ".repeat(5)));
    assert_eq!(text.lines().count(), 10);
}
