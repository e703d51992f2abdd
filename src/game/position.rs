//! Game position: board, win threshold, and move accounting.

use tracing::instrument;

use super::board::{Coords, Grid};
use super::rules;
use super::types::{Cell, Coord, PlayerId};
use crate::error::GameError;

/// A complete game position.
///
/// Owns the [`Grid`] plus the immutable run length required to win, and
/// keeps a move counter that always equals the number of occupied cells.
/// One `Position` is shared by real play and by speculative search, which
/// mutates it in place and undoes every mutation before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    grid: Grid,
    win_len: usize,
    moves: usize,
}

impl Position {
    /// Creates an empty position.
    ///
    /// `win_len` must satisfy `1 <= win_len <= max(rows, cols)` and both
    /// dimensions must be non-zero; violations are configuration errors.
    #[instrument]
    pub fn new(rows: usize, cols: usize, win_len: usize) -> Result<Self, GameError> {
        if rows < 1 || cols < 1 {
            return Err(GameError::Dimensions { rows, cols });
        }
        if win_len < 1 || win_len > rows.max(cols) {
            return Err(GameError::WinLength {
                len: win_len,
                rows,
                cols,
            });
        }
        Ok(Self {
            grid: Grid::new(rows, cols),
            win_len,
            moves: 0,
        })
    }

    /// Wraps a pre-populated grid, deriving the move counter from the
    /// number of occupied cells.
    #[instrument(skip(grid))]
    pub fn from_grid(grid: Grid, win_len: usize) -> Result<Self, GameError> {
        if win_len < 1 || win_len > grid.rows().max(grid.cols()) {
            return Err(GameError::WinLength {
                len: win_len,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        let moves = grid.coords().filter(|&c| !grid.is_empty(c)).count();
        Ok(Self {
            grid,
            win_len,
            moves,
        })
    }

    /// The underlying board, e.g. for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows on the board.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns on the board.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Run length required to win.
    pub fn win_len(&self) -> usize {
        self.win_len
    }

    /// Number of occupied cells.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// The player whose turn it is, by move parity.
    pub fn to_move(&self) -> PlayerId {
        if self.moves % 2 == 0 {
            PlayerId::First
        } else {
            PlayerId::Second
        }
    }

    /// True iff the cell at `coord` is unoccupied.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.grid.is_empty(coord)
    }

    /// State of the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Cell {
        self.grid.get(coord)
    }

    /// Occupies `coord` with `player`'s mark.
    ///
    /// Fails (returns `false`, no mutation) when the cell is occupied.
    pub fn place(&mut self, coord: Coord, player: PlayerId) -> bool {
        let placed = self.grid.place(coord, player);
        if placed {
            self.moves += 1;
        }
        placed
    }

    /// Undoes a move, forcing the cell back to empty.
    pub fn clear(&mut self, coord: Coord) {
        if !self.grid.is_empty(coord) {
            self.moves -= 1;
        }
        self.grid.clear(coord);
    }

    /// Iterates every coordinate in row-major order without borrowing
    /// the position, so search can interleave place/undo with iteration.
    pub fn coords(&self) -> Coords {
        self.grid.coords()
    }

    /// Iterates the unoccupied coordinates in row-major order.
    ///
    /// Regenerated fresh on each call, never cached.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.coords().filter(|&c| self.grid.is_empty(c))
    }

    /// Whether the move just played at `coord` by `player` completes a
    /// run of at least the winning length.
    ///
    /// Only inspects the four line families through `coord`; it does not
    /// scan the whole board.
    pub fn is_winning_move(&self, coord: Coord, player: PlayerId) -> bool {
        rules::is_winning_move(&self.grid, self.win_len, coord, player)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        let full = rules::board_full(&self.grid);
        debug_assert_eq!(full, self.moves == self.rows() * self.cols());
        full
    }
}
