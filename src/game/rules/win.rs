//! Win detection from a just-played cell.

use strum::IntoEnumIterator;

use crate::game::board::Grid;
use crate::game::types::{Cell, Coord, Delta, PlayerId};

/// The four line families a winning run can lie on.
#[derive(Debug, Clone, Copy, strum::EnumIter)]
enum Direction {
    Vertical,
    Horizontal,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    fn delta(self) -> Delta {
        match self {
            Direction::Vertical => Delta::new(1, 0),
            Direction::Horizontal => Delta::new(0, 1),
            Direction::DiagonalDown => Delta::new(1, 1),
            Direction::DiagonalUp => Delta::new(1, -1),
        }
    }
}

/// Whether the mark just placed at `coord` by `player` completes a run
/// of at least `win_len`.
///
/// From `coord`, each line family is walked outward in both directions,
/// counting consecutive cells holding `player`'s mark and stopping at a
/// mismatch or the board edge. The first family reaching `win_len`
/// short-circuits the check; nothing else on the board is inspected.
pub fn is_winning_move(grid: &Grid, win_len: usize, coord: Coord, player: PlayerId) -> bool {
    Direction::iter().any(|direction| run_length(grid, coord, player, direction.delta()) >= win_len)
}

/// Length of the run through `coord` along `delta`, counting the cell
/// at `coord` itself as occupied by `player`.
fn run_length(grid: &Grid, coord: Coord, player: PlayerId, delta: Delta) -> usize {
    let mark = Cell::Occupied(player);
    let mut run = 1;
    for step in [delta, delta.reversed()] {
        let mut cursor = coord;
        while let Some(next) = grid.step(cursor, step) {
            if grid.get(next) != mark {
                break;
            }
            run += 1;
            cursor = next;
        }
    }
    run
}
