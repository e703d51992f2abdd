//! Interactive player prompting over the console port.

use tracing::debug;

use super::Player;
use crate::console::Console;
use crate::error::GameError;
use crate::game::{Coord, Position};

/// A human answering coordinate prompts.
///
/// Malformed and out-of-range answers are re-prompted; an exhausted
/// input stream aborts the match.
#[derive(Debug)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a human player with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn choose(
        &mut self,
        position: &mut Position,
        console: &mut dyn Console,
    ) -> Result<Coord, GameError> {
        let rows = position.rows();
        let cols = position.cols();
        console.print("Where? (row col) ")?;
        loop {
            let Some(line) = console.read_line()? else {
                return Err(GameError::InputExhausted);
            };
            match parse_coord(&line) {
                None => {
                    debug!(input = %line, "unparseable coordinate");
                    console.print("Invalid numbers, try again: ")?;
                }
                Some(coord) if coord.row >= rows => {
                    console.print(&format!("row out of range [0,{rows}[, try again: "))?;
                }
                Some(coord) if coord.col >= cols => {
                    console.print(&format!("column out of range [0,{cols}[, try again: "))?;
                }
                Some(coord) => return Ok(coord),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses exactly two whitespace-separated non-negative numbers.
fn parse_coord(line: &str) -> Option<Coord> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord::new(row, col))
}
