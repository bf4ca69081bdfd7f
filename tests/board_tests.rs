use seabattle::{Board, Coord, GridError, Orientation, PlacementError, Ship, ShipKind};

fn ship(kind: ShipKind, orientation: Orientation, row: usize, col: usize) -> Ship {
    Ship::new(kind, orientation, Coord::new(row, col))
}

fn occupied(board: &Board) -> Vec<Coord> {
    board
        .cells()
        .filter(|(_, cell)| cell.occupied)
        .map(|(coord, _)| coord)
        .collect()
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(8, 6);
    assert_eq!(board.width(), 8);
    assert_eq!(board.height(), 6);
    assert!(board.cells().all(|(_, c)| !c.occupied && !c.hit));
    assert!(board.fleet().is_empty());
    assert!(!board.is_locked());
}

#[test]
fn test_destroyer_sinks_after_two_hits() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Destroyer, Orientation::Horizontal, 0, 0))
        .unwrap();
    assert_eq!(occupied(&board), vec![Coord::new(0, 0), Coord::new(0, 1)]);

    let first = board.attack(Coord::new(0, 0)).unwrap();
    assert!(first.hit);
    assert!(!first.already_tried);
    assert_eq!(first.sunk, None);
    assert!(!board.is_fleet_eliminated());

    let second = board.attack(Coord::new(0, 1)).unwrap();
    assert!(second.hit);
    assert_eq!(second.sunk, Some(ShipKind::Destroyer));
    assert!(board.is_fleet_eliminated());
    assert!(board.ship(ShipKind::Destroyer).unwrap().is_sunk());
}

#[test]
fn test_repeat_attack_is_a_noop() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Cruiser, Orientation::Vertical, 4, 4))
        .unwrap();

    let miss = board.attack(Coord::new(0, 0)).unwrap();
    assert!(!miss.hit && !miss.already_tried);
    let snapshot = board.clone();
    let again = board.attack(Coord::new(0, 0)).unwrap();
    assert!(again.already_tried);
    assert!(!again.hit);
    assert_eq!(board, snapshot);

    board.attack(Coord::new(4, 4)).unwrap();
    let snapshot = board.clone();
    let again = board.attack(Coord::new(4, 4)).unwrap();
    assert!(again.already_tried);
    assert!(again.hit);
    assert_eq!(again.sunk, None);
    assert_eq!(board, snapshot);
    assert_eq!(board.ship(ShipKind::Cruiser).unwrap().hit_count(), 1);
}

#[test]
fn test_attack_off_board() {
    let mut board = Board::standard();
    assert_eq!(
        board.attack(Coord::new(10, 0)).unwrap_err(),
        GridError::OutOfBounds { row: 10, col: 0 }
    );
}

#[test]
fn test_place_ship_rejections_leave_board_untouched() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Carrier, Orientation::Horizontal, 0, 0))
        .unwrap();
    let snapshot = board.clone();

    assert_eq!(
        board.place_ship(ship(ShipKind::Battleship, Orientation::Horizontal, 5, 7)),
        Err(PlacementError::OutOfBounds)
    );
    assert_eq!(
        board.place_ship(ship(ShipKind::Battleship, Orientation::Vertical, 0, 2)),
        Err(PlacementError::CellOccupied)
    );
    assert_eq!(
        board.place_ship(ship(ShipKind::Carrier, Orientation::Horizontal, 5, 0)),
        Err(PlacementError::ShipAlreadyPlaced(ShipKind::Carrier))
    );
    assert_eq!(board, snapshot);
}

#[test]
fn test_touching_ships_are_allowed_on_the_board_itself() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Destroyer, Orientation::Horizontal, 0, 0))
        .unwrap();
    board
        .place_ship(ship(ShipKind::Submarine, Orientation::Horizontal, 1, 0))
        .unwrap();
    assert_eq!(occupied(&board).len(), 5);
}

#[test]
fn test_remove_ship_clears_cells() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Cruiser, Orientation::Vertical, 2, 2))
        .unwrap();
    let removed = board.remove_ship(ShipKind::Cruiser).unwrap();
    assert_eq!(removed.kind(), ShipKind::Cruiser);
    assert!(occupied(&board).is_empty());
    assert_eq!(
        board.remove_ship(ShipKind::Cruiser),
        Err(PlacementError::ShipNotPlaced(ShipKind::Cruiser))
    );
}

#[test]
fn test_rotate_keeps_occupancy_in_sync() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Carrier, Orientation::Horizontal, 0, 5))
        .unwrap();
    let rotated = board.rotate_ship(ShipKind::Carrier).unwrap();
    assert_eq!(rotated.orientation(), Orientation::Vertical);
    assert_eq!(rotated.anchor(), Coord::new(0, 5));
    assert_eq!(occupied(&board), rotated.cells().collect::<Vec<_>>());
}

#[test]
fn test_rotate_near_edge_pulls_ship_back_inside() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Carrier, Orientation::Horizontal, 8, 0))
        .unwrap();
    let rotated = board.rotate_ship(ShipKind::Carrier).unwrap();
    assert_eq!(rotated.anchor(), Coord::new(5, 0));
    assert!(rotated.fits(board.width(), board.height()));

    let expected: Vec<_> = (5..10).map(|r| Coord::new(r, 0)).collect();
    assert_eq!(occupied(&board), expected);
}

#[test]
fn test_rotate_into_another_ship_rolls_back() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Carrier, Orientation::Horizontal, 0, 0))
        .unwrap();
    board
        .place_ship(ship(ShipKind::Destroyer, Orientation::Horizontal, 2, 0))
        .unwrap();
    let snapshot = board.clone();

    assert_eq!(
        board.rotate_ship(ShipKind::Carrier),
        Err(PlacementError::CellOccupied)
    );
    assert_eq!(board, snapshot);
}

#[test]
fn test_move_ship_snaps_to_grid() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Battleship, Orientation::Horizontal, 0, 0))
        .unwrap();
    let moved = board.move_ship(ShipKind::Battleship, Coord::new(3, 9)).unwrap();
    assert_eq!(moved.anchor(), Coord::new(3, 6));
    assert_eq!(occupied(&board), moved.cells().collect::<Vec<_>>());
}

#[test]
fn test_finalize_locks_layout_but_not_attacks() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Destroyer, Orientation::Vertical, 0, 0))
        .unwrap();
    board.finalize_placement();
    assert!(board.is_locked());

    assert_eq!(
        board.place_ship(ship(ShipKind::Cruiser, Orientation::Vertical, 0, 5)),
        Err(PlacementError::PlacementLocked)
    );
    assert_eq!(
        board.remove_ship(ShipKind::Destroyer),
        Err(PlacementError::PlacementLocked)
    );
    assert_eq!(
        board.rotate_ship(ShipKind::Destroyer),
        Err(PlacementError::PlacementLocked)
    );
    assert_eq!(
        board.move_ship(ShipKind::Destroyer, Coord::new(5, 5)),
        Err(PlacementError::PlacementLocked)
    );
    assert_eq!(board.clear_ships(), Err(PlacementError::PlacementLocked));

    assert!(board.attack(Coord::new(1, 0)).unwrap().hit);
}

#[test]
fn test_untried_cells_and_ships_remaining() {
    let mut board = Board::new(3, 3);
    board
        .place_ship(ship(ShipKind::Destroyer, Orientation::Horizontal, 0, 0))
        .unwrap();
    assert_eq!(board.untried_cells().count(), 9);
    assert_eq!(board.ships_remaining(), 1);

    board.attack(Coord::new(0, 0)).unwrap();
    board.attack(Coord::new(2, 2)).unwrap();
    assert_eq!(board.untried_cells().count(), 7);
    assert!(!board.untried_cells().any(|c| c == Coord::new(2, 2)));

    board.attack(Coord::new(0, 1)).unwrap();
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_ships_overlapping() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Submarine, Orientation::Vertical, 2, 7))
        .unwrap();
    let hits: Vec<_> = board.fleet().ships_overlapping(Coord::new(3, 7)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind(), ShipKind::Submarine);
    assert_eq!(board.fleet().ships_overlapping(Coord::new(5, 7)).count(), 0);
}

#[test]
fn test_moving_onto_attacked_cells_keeps_hits() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Destroyer, Orientation::Horizontal, 0, 0))
        .unwrap();
    board.attack(Coord::new(5, 5)).unwrap();
    board.attack(Coord::new(5, 6)).unwrap();

    let moved = board.move_ship(ShipKind::Destroyer, Coord::new(5, 5)).unwrap();
    assert_eq!(moved.hit_count(), 2);
    assert!(moved.is_sunk());
    assert!(board.ship(ShipKind::Destroyer).unwrap().is_sunk());
    assert!(board.is_fleet_eliminated());
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_rotating_onto_one_attacked_cell() {
    let mut board = Board::standard();
    board
        .place_ship(ship(ShipKind::Cruiser, Orientation::Horizontal, 3, 3))
        .unwrap();
    board.attack(Coord::new(5, 3)).unwrap();

    let rotated = board.rotate_ship(ShipKind::Cruiser).unwrap();
    assert_eq!(rotated.hit_segments().collect::<Vec<_>>(), vec![2]);
    assert!(!board.is_fleet_eliminated());
    assert_eq!(board.fleet().all_sunk(), board.is_fleet_eliminated());
}
