//! Game-tree search over a shared, mutably-borrowed [`Position`].
//!
//! Two interchangeable strategies are provided: [`Negamax`] and its
//! alpha-beta pruning variant [`AlphaBeta`]. Both explore hypothetical
//! futures by placing a mark, recursing, and clearing the mark again, so
//! a single position serves the whole call tree with no per-node board
//! copies. Pruning never changes the value a root evaluates to, only
//! which of several equally-scored coordinates is kept.
//!
//! Scores are expressed from the perspective of the player to move at a
//! node. A node whose just-played move wins for the side that played it
//! scores `-(WIN_SCORE) + remaining_depth`, so from one ply up a fast
//! forced win outranks a slow one. A node at depth zero, or with no
//! legal continuation, scores a neutral 0.
//!
//! [`Position`]: crate::Position

mod alphabeta;
mod negamax;

pub use alphabeta::AlphaBeta;
pub use negamax::Negamax;

use derive_getters::Getters;
use derive_new::new;

use crate::game::Coord;

/// Score of an immediate win, and magnitude of the alpha-beta window.
pub const WIN_SCORE: i32 = 1000;

/// Scores beyond this magnitude mean the search saw a forced win for one
/// side within its horizon.
pub const FORCED_THRESHOLD: i32 = 950;

/// A chosen move together with its negamax evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Getters)]
pub struct SearchOutcome {
    /// The coordinate to play.
    coord: Coord,
    /// Root score of that coordinate, from the searching player's view.
    score: i32,
}
