use seabattle::{occupied_cells, standard_fleet, Coord, Orientation, Ship, ShipKind};

#[test]
fn test_lengths_and_fleet_order() {
    let fleet = standard_fleet();
    assert_eq!(
        fleet,
        [
            ShipKind::Carrier,
            ShipKind::Battleship,
            ShipKind::Cruiser,
            ShipKind::Submarine,
            ShipKind::Destroyer,
        ]
    );
    let lengths: Vec<_> = fleet.iter().map(|k| k.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);
}

#[test]
fn test_occupied_cells_follow_orientation() {
    let h: Vec<_> = occupied_cells(Coord::new(2, 1), 3, Orientation::Horizontal).collect();
    assert_eq!(h, vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]);

    let v: Vec<_> = occupied_cells(Coord::new(0, 0), 4, Orientation::Vertical).collect();
    assert_eq!(
        v,
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)]
    );
}

#[test]
fn test_contains_and_offsets() {
    let ship = Ship::new(ShipKind::Battleship, Orientation::Vertical, Coord::new(3, 4));
    assert_eq!(ship.offset_of(Coord::new(3, 4)), Some(0));
    assert_eq!(ship.offset_of(Coord::new(6, 4)), Some(3));
    assert!(!ship.contains(Coord::new(7, 4)));
    assert!(!ship.contains(Coord::new(3, 5)));
}

#[test]
fn test_fits() {
    let ship = Ship::new(ShipKind::Carrier, Orientation::Horizontal, Coord::new(9, 5));
    assert!(ship.fits(10, 10));
    let ship = Ship::new(ShipKind::Carrier, Orientation::Horizontal, Coord::new(9, 6));
    assert!(!ship.fits(10, 10));
    let ship = Ship::new(ShipKind::Carrier, Orientation::Vertical, Coord::new(6, 0));
    assert!(!ship.fits(10, 10));
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(ShipKind::Destroyer, Orientation::Horizontal, Coord::new(1, 1));
    assert!(!ship.is_sunk());
    assert!(!ship.register_hit(Coord::new(0, 0)));
    assert!(ship.register_hit(Coord::new(1, 2)));
    assert_eq!(ship.hit_segments().collect::<Vec<_>>(), vec![1]);
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(Coord::new(1, 1)));
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_count(), 2);
}

#[test]
fn test_orientation_toggle() {
    assert_eq!(Orientation::Horizontal.toggled(), Orientation::Vertical);
    assert_eq!(Orientation::Vertical.toggled(), Orientation::Horizontal);
}
