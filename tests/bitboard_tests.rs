use battleship_hunter::{BitBoard, BitBoardError, Coordinate};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128, 10>::try_new().is_ok());

    let err = BitBoard::<u64, 10>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(Coordinate::new(3, 1)).unwrap();
    assert!(bb.get(Coordinate::new(3, 1)).unwrap());
    assert!(!bb.get(Coordinate::new(1, 3)).unwrap());
    assert_eq!(
        bb.set(Coordinate::new(4, 0)).unwrap_err(),
        BitBoardError::IndexOutOfBounds { x: 4, y: 0 }
    );
    assert!(bb.get(Coordinate::new(-1, 0)).is_err());
}

#[test]
fn test_from_coords_and_iter() {
    let bb =
        BitBoard::<u16, 4>::from_coords([Coordinate::new(1, 0), Coordinate::new(3, 3)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![Coordinate::new(1, 0), Coordinate::new(3, 3)]);
    assert_eq!(bb.count_ones(), 2);
}

#[test]
fn test_combine() {
    let a = BitBoard::<u128, 10>::from_coords([Coordinate::new(0, 0), Coordinate::new(5, 5)]).unwrap();
    let b = BitBoard::<u128, 10>::from_coords([Coordinate::new(5, 5), Coordinate::new(9, 9)]).unwrap();
    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 3);
}
