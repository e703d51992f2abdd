//! Decision source backed by the plain negamax engine.

use super::{Player, announce_outcome};
use crate::console::Console;
use crate::error::GameError;
use crate::game::{Coord, PlayerId, Position};
use crate::search::Negamax;

/// Plays with exhaustive negamax at a fixed depth.
#[derive(Debug)]
pub struct NegamaxPlayer {
    name: String,
    engine: Negamax,
}

impl NegamaxPlayer {
    /// Creates the player for `id`, searching `depth` plies ahead.
    pub fn new(depth: u32, id: PlayerId) -> Self {
        Self {
            name: "(AI-negamax)".to_string(),
            engine: Negamax::new(depth, id),
        }
    }
}

impl Player for NegamaxPlayer {
    fn choose(
        &mut self,
        position: &mut Position,
        console: &mut dyn Console,
    ) -> Result<Coord, GameError> {
        let outcome = self
            .engine
            .choose(position)
            .ok_or(GameError::NoMoveAvailable)?;
        announce_outcome(console, &self.name, &outcome)?;
        Ok(*outcome.coord())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
