use battleships::{ship_bounds, Cell, Fleet, Orientation, Ship, ShipType};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Two rectangles clash exactly when they share a cell, in either order.
    #[test]
    fn clash_matches_shared_cells(
        (c1, r1, o1) in (0usize..10, 0usize..10, orientation()),
        (c2, r2, o2) in (0usize..10, 0usize..10, orientation()),
    ) {
        let a = ship_bounds(Cell::new(c1, r1), 4, o1);
        let b = ship_bounds(Cell::new(c2, r2), 5, o2);
        let shared = a.cells().any(|cell| b.contains(cell));

        let fleet_a = Fleet::from_ships([Ship::new(ShipType::Destroyer, Cell::new(c1, r1), o1)]);
        let fleet_b = Fleet::from_ships([Ship::new(ShipType::Battleship, Cell::new(c2, r2), o2)]);
        prop_assert_eq!(fleet_a.does_ship_bounds_clash(&b), shared);
        prop_assert_eq!(fleet_b.does_ship_bounds_clash(&a), shared);
    }

    /// Attacks on cells no ship covers never change any condition.
    #[test]
    fn miss_leaves_fleet_untouched(column in 0usize..10, row in 0usize..10) {
        let mut fleet = Fleet::from_ships([
            Ship::new(ShipType::Battleship, Cell::new(2, 2), Orientation::Horizontal),
            Ship::new(ShipType::Destroyer, Cell::new(0, 5), Orientation::Vertical),
        ]);
        let cell = Cell::new(column, row);
        let covered = fleet.ships().iter().any(|s| s.bounds().contains(cell));
        let before: Vec<u8> = fleet.ships().iter().map(|s| s.condition()).collect();
        let hit = fleet.check_for_and_record_any_hit(cell).is_some();
        prop_assert_eq!(hit, covered);
        if !covered {
            let after: Vec<u8> = fleet.ships().iter().map(|s| s.condition()).collect();
            prop_assert_eq!(before, after);
        }
    }
}
