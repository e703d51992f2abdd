//! Loading a saved board from its text rendering.
//!
//! The format is the board renderer's own output: rows are lines
//! starting with `|`, with the cell for column `c` at byte `2*c + 1`
//! (`X`, `O`, or blank). A `<<EOF` line terminates the board early;
//! anything else (such as the `+-+-+` rule lines) is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use super::board::Grid;
use super::types::{Coord, PlayerId};
use crate::error::GameError;

/// Reads a board from any line-oriented source.
///
/// Dimensions are derived from the input: one grid row per `|` line,
/// with the column count taken from the first of them. Ragged or absent
/// row lines are reported as [`GameError::Layout`].
pub fn read_board<R: BufRead>(reader: R) -> Result<Grid, GameError> {
    let mut rows: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line == "<<EOF" {
            break;
        }
        if line.starts_with('|') {
            rows.push(line);
        }
    }

    let first = rows
        .first()
        .ok_or_else(|| GameError::layout("no board rows found"))?;
    let cols = (first.len() - 1) / 2;
    if cols == 0 {
        return Err(GameError::layout("board rows hold no cells"));
    }

    let mut grid = Grid::new(rows.len(), cols);
    for (row, line) in rows.iter().enumerate() {
        let bytes = line.as_bytes();
        if (bytes.len() - 1) / 2 != cols {
            return Err(GameError::layout(format!(
                "row {row} has a different width from the first row"
            )));
        }
        for col in 0..cols {
            let player = match bytes[2 * col + 1] {
                b'X' => PlayerId::First,
                b'O' => PlayerId::Second,
                _ => continue,
            };
            grid.place(Coord::new(row, col), player);
        }
    }
    Ok(grid)
}

/// Reads a board from a file on disk.
#[instrument]
pub fn load_board(path: &Path) -> Result<Grid, GameError> {
    let file = File::open(path)?;
    let grid = read_board(BufReader::new(file))?;
    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        "board loaded from file"
    );
    Ok(grid)
}
