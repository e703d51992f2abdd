//! Generalized k-in-a-row board game with negamax AI players.
//!
//! A match pits two decision sources against each other on an m x n
//! board where aligning k marks wins. Sources are interchangeable: an
//! interactive human prompted over a text port, a plain negamax search,
//! or negamax with alpha-beta pruning. The searches share one mutable
//! [`Position`], exploring the game tree by placing and un-placing
//! marks in place.
//!
//! # Example
//!
//! ```no_run
//! use kinarow::{AlphaBetaPlayer, NegamaxPlayer, Orchestrator, PlayerId, Position, StdConsole};
//!
//! # fn main() -> Result<(), kinarow::GameError> {
//! let position = Position::new(3, 3, 3)?;
//! let mut game = Orchestrator::new(
//!     position,
//!     Box::new(NegamaxPlayer::new(3, PlayerId::First)),
//!     Box::new(AlphaBetaPlayer::new(5, PlayerId::Second)),
//!     StdConsole::new(),
//! );
//! let status = game.run()?;
//! println!("{status:?}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod error;
mod game;
mod orchestrator;
mod players;
mod search;

pub use console::{BufferConsole, Console, StdConsole};
pub use error::GameError;
pub use game::layout::{load_board, read_board};
pub use game::{Cell, Coord, Coords, Delta, GameStatus, Grid, PlayerId, Position};
pub use orchestrator::Orchestrator;
pub use players::{AlphaBetaPlayer, HumanPlayer, NegamaxPlayer, Player};
pub use search::{AlphaBeta, FORCED_THRESHOLD, Negamax, SearchOutcome, WIN_SCORE};
