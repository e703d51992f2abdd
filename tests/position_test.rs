//! Tests for position state and the place/clear discipline.

use kinarow::{Cell, Coord, PlayerId, Position};

#[test]
fn place_then_clear_restores_the_position_exactly() {
    let mut position = Position::new(4, 5, 3).unwrap();
    position.place(Coord::new(1, 1), PlayerId::First);
    position.place(Coord::new(2, 3), PlayerId::Second);

    let snapshot = position.clone();
    for coord in snapshot.empty_cells().collect::<Vec<_>>() {
        position.place(coord, PlayerId::First);
        position.clear(coord);
        assert_eq!(position, snapshot);
    }
}

#[test]
fn place_fails_on_an_occupied_cell_without_mutating() {
    let mut position = Position::new(3, 3, 3).unwrap();
    let coord = Coord::new(0, 0);
    assert!(position.place(coord, PlayerId::First));

    let snapshot = position.clone();
    assert!(!position.place(coord, PlayerId::Second));
    assert_eq!(position, snapshot);
    assert_eq!(position.get(coord), Cell::Occupied(PlayerId::First));
}

#[test]
fn empty_cells_are_enumerated_in_row_major_order() {
    let mut position = Position::new(2, 3, 2).unwrap();
    position.place(Coord::new(0, 1), PlayerId::First);

    let cells: Vec<Coord> = position.empty_cells().collect();
    assert_eq!(
        cells,
        vec![
            Coord::new(0, 0),
            Coord::new(0, 2),
            Coord::new(1, 0),
            Coord::new(1, 1),
            Coord::new(1, 2),
        ]
    );
}

#[test]
fn fullness_and_counter_agree() {
    let mut position = Position::new(2, 2, 2).unwrap();
    let mut player = PlayerId::First;
    for coord in position.coords() {
        assert!(!position.is_full());
        position.place(coord, player);
        player = player.other();
    }
    assert!(position.is_full());
    assert_eq!(position.moves(), 4);
}

#[test]
fn winning_move_checks_run_through_the_played_cell_only() {
    let mut position = Position::new(3, 3, 3).unwrap();
    position.place(Coord::new(0, 0), PlayerId::First);
    position.place(Coord::new(0, 1), PlayerId::First);
    assert!(!position.is_winning_move(Coord::new(0, 1), PlayerId::First));

    position.place(Coord::new(0, 2), PlayerId::First);
    assert!(position.is_winning_move(Coord::new(0, 2), PlayerId::First));
    assert!(position.is_winning_move(Coord::new(0, 0), PlayerId::First));
    assert!(!position.is_winning_move(Coord::new(1, 1), PlayerId::First));
}
