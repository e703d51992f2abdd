//! Plain negamax search.

use derive_new::new;
use tracing::debug;

use super::{SearchOutcome, WIN_SCORE};
use crate::game::{Coord, PlayerId, Position};

/// Exhaustive negamax to a fixed depth, no pruning.
///
/// Deterministic: among equally-scored moves the first in row-major
/// order is kept (a strictly greater score is required to displace the
/// running best).
#[derive(Debug, Clone, Copy, new)]
pub struct Negamax {
    depth: u32,
    player: PlayerId,
}

impl Negamax {
    /// Picks the best move for the configured player.
    ///
    /// Returns `None` only when the board has no empty cell. The
    /// position is mutated speculatively during the call and restored
    /// bit-for-bit before returning.
    pub fn choose(&self, position: &mut Position) -> Option<SearchOutcome> {
        let mut best: Option<SearchOutcome> = None;
        for coord in position.coords() {
            if !position.is_empty(coord) {
                continue;
            }
            let placed = position.place(coord, self.player);
            debug_assert!(placed);
            let score = -negamax(position, self.depth, self.player, coord);
            position.clear(coord);
            if best.is_none_or(|b| score > *b.score()) {
                best = Some(SearchOutcome::new(coord, score));
            }
        }
        if let Some(outcome) = &best {
            debug!(
                player = %self.player,
                depth = self.depth,
                coord = %outcome.coord(),
                score = *outcome.score(),
                "negamax chose"
            );
        }
        best
    }
}

/// Evaluates the node reached by `just_played` moving at `just_moved`.
///
/// The win check is purely local to the cell just occupied and runs
/// before any child is expanded.
fn negamax(position: &mut Position, depth: u32, just_played: PlayerId, just_moved: Coord) -> i32 {
    if position.is_winning_move(just_moved, just_played) {
        return -WIN_SCORE + depth as i32;
    }
    if depth == 0 {
        return 0;
    }

    let mover = just_played.other();
    let mut max: Option<i32> = None;
    for coord in position.coords() {
        if !position.is_empty(coord) {
            continue;
        }
        let placed = position.place(coord, mover);
        debug_assert!(placed);
        let score = -negamax(position, depth - 1, mover, coord);
        position.clear(coord);
        if max.is_none_or(|m| score > m) {
            max = Some(score);
        }
    }
    // A full board with no winner is as neutral as an exhausted horizon.
    max.unwrap_or(0)
}
