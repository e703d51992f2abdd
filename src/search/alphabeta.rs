//! Negamax with alpha-beta pruning.

use derive_new::new;
use tracing::debug;

use super::{SearchOutcome, WIN_SCORE};
use crate::game::{Coord, PlayerId, Position};

/// Negamax with an `[alpha, beta]` bound window.
///
/// Evaluates every root position to the same value as [`Negamax`], but
/// skips subtrees proven irrelevant to the decision, so among several
/// equally-scored moves it may keep a different (earlier) one than the
/// plain search would: a later tying candidate can be pruned before it
/// is ever evaluated.
///
/// [`Negamax`]: super::Negamax
#[derive(Debug, Clone, Copy, new)]
pub struct AlphaBeta {
    depth: u32,
    player: PlayerId,
}

impl AlphaBeta {
    /// Picks the best move for the configured player.
    ///
    /// Same contract as [`Negamax::choose`]: `None` only on a full
    /// board, position restored bit-for-bit, first row-major maximizer
    /// kept.
    ///
    /// [`Negamax::choose`]: super::Negamax::choose
    pub fn choose(&self, position: &mut Position) -> Option<SearchOutcome> {
        let mut best: Option<SearchOutcome> = None;
        let mut alpha = -WIN_SCORE;
        let beta = WIN_SCORE;
        for coord in position.coords() {
            if !position.is_empty(coord) {
                continue;
            }
            let placed = position.place(coord, self.player);
            debug_assert!(placed);
            let score = -negamax(position, self.depth, self.player, coord, -beta, -alpha);
            position.clear(coord);
            if best.is_none_or(|b| score > *b.score()) {
                best = Some(SearchOutcome::new(coord, score));
            }
            if score > alpha {
                alpha = score;
                if alpha >= beta {
                    break;
                }
            }
        }
        if let Some(outcome) = &best {
            debug!(
                player = %self.player,
                depth = self.depth,
                coord = %outcome.coord(),
                score = *outcome.score(),
                "alpha-beta chose"
            );
        }
        best
    }
}

/// Same recursive skeleton as plain negamax, with the bound window
/// threaded through: children are searched over `(-beta, -alpha)`, a
/// score above `alpha` raises it, and `alpha >= beta` cuts the
/// remaining siblings off.
fn negamax(
    position: &mut Position,
    depth: u32,
    just_played: PlayerId,
    just_moved: Coord,
    mut alpha: i32,
    beta: i32,
) -> i32 {
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
        let score = -negamax(position, depth - 1, mover, coord, -beta, -alpha);
        position.clear(coord);
        if max.is_none_or(|m| score > m) {
            max = Some(score);
        }
        if score > alpha {
            alpha = score;
            if alpha >= beta {
                break;
            }
        }
    }
    max.unwrap_or(0)
}
