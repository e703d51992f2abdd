//! Decision sources: the `Player` trait and its implementations.

mod alphabeta;
mod human;
mod negamax;

pub use alphabeta::AlphaBetaPlayer;
pub use human::HumanPlayer;
pub use negamax::NegamaxPlayer;

use crate::console::Console;
use crate::error::GameError;
use crate::game::{Coord, Position};
use crate::search::{FORCED_THRESHOLD, SearchOutcome};

/// A source of move decisions.
///
/// Humans and search engines share this one capability: given the
/// current position, choose a move. Implementations never own the
/// position; they receive it mutably for the duration of one call and
/// must leave it exactly as they found it.
pub trait Player {
    /// Chooses the next move for this player.
    ///
    /// The returned coordinate refers to a cell that is empty at call
    /// time. The console port serves interactive prompting and move
    /// reporting.
    fn choose(
        &mut self,
        position: &mut Position,
        console: &mut dyn Console,
    ) -> Result<Coord, GameError>;

    /// Display name used in turn banners and announcements.
    fn name(&self) -> &str;
}

/// Reports an engine's decision, with the taunt the thresholds earn.
fn announce_outcome(
    console: &mut dyn Console,
    name: &str,
    outcome: &SearchOutcome,
) -> Result<(), GameError> {
    console.print(&format!(
        "{} plays at {} ({})\n",
        name,
        outcome.coord(),
        outcome.score()
    ))?;
    if *outcome.score() > FORCED_THRESHOLD {
        console.print("You'll lose!\n")?;
    } else if *outcome.score() < -FORCED_THRESHOLD {
        console.print("You should win...\n")?;
    }
    Ok(())
}
