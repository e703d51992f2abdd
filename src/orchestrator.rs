//! Match loop: alternate turns, apply moves, detect the outcome.

use tracing::{debug, info, instrument, warn};

use crate::console::Console;
use crate::error::GameError;
use crate::game::{GameStatus, PlayerId, Position};
use crate::players::Player;

/// Runs one match between two decision sources over a shared position.
///
/// Turns alternate by move parity, so a match resumed from a loaded
/// board starts with the right player. Committed moves are never taken
/// back; a decision source proposing an occupied cell is re-asked
/// without the turn advancing.
pub struct Orchestrator<C> {
    position: Position,
    first: Box<dyn Player>,
    second: Box<dyn Player>,
    console: C,
    status: GameStatus,
}

impl<C: Console> Orchestrator<C> {
    /// Creates a match over `position` between `first` (X) and `second` (O).
    pub fn new(
        position: Position,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        console: C,
    ) -> Self {
        Self {
            position,
            first,
            second,
            console,
            status: GameStatus::InProgress,
        }
    }

    /// Current state of the match.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The shared position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The console the match reports through.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Plays the match to its end and returns the final status.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameStatus, GameError> {
        self.console.print(&self.position.grid().to_string())?;
        while !self.position.is_full() {
            let id = self.position.to_move();
            let player = match id {
                PlayerId::First => &mut self.first,
                PlayerId::Second => &mut self.second,
            };
            self.console.print(&format!(
                "Moves: {} ; Player {}, {}, ",
                self.position.moves(),
                id.ordinal(),
                player.name()
            ))?;

            let coord = player.choose(&mut self.position, &mut self.console)?;
            if !self.position.place(coord, id) {
                // Well-behaved sources never propose an occupied cell,
                // but the turn must not advance if one does.
                warn!(%coord, player = player.name(), "occupied cell proposed");
                self.console.print("Cannot play there, try again.\n")?;
                continue;
            }
            debug!(%coord, player = player.name(), "move committed");

            self.console.print(&self.position.grid().to_string())?;
            if self.position.is_winning_move(coord, id) {
                self.console.print(&format!(
                    "Player {}, {}, has won!\n",
                    id.ordinal(),
                    player.name()
                ))?;
                info!(player = player.name(), "match won");
                self.status = GameStatus::Won(id);
                return Ok(self.status);
            }
        }
        self.console.print("Draw. Nobody wins.\n")?;
        info!("match drawn");
        self.status = GameStatus::Draw;
        Ok(self.status)
    }
}
