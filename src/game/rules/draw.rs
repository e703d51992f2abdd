//! Draw detection.

use crate::game::board::Grid;

/// True iff every cell on the board is occupied.
pub fn board_full(grid: &Grid) -> bool {
    grid.coords().all(|coord| !grid.is_empty(coord))
}
