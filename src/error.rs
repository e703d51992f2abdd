//! Crate error type.

use derive_more::{Display, Error, From};

/// Errors surfaced by match setup and play.
///
/// Occupied-cell move attempts and invalid interactive coordinates are
/// handled where they occur (a `bool` result and a re-prompt loop) and
/// never become error values; out-of-bounds grid access is a programming
/// error that fails fast instead of unwinding through this type.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// The interactive input stream ended before a valid move arrived.
    #[display("input exhausted before a move was supplied")]
    InputExhausted,

    /// A decision source was asked to move on a full board.
    #[display("no empty cell is available")]
    NoMoveAvailable,

    /// Board dimensions must both be at least one.
    #[display("board must be at least 1x1, got {rows}x{cols}")]
    Dimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// The winning run length does not fit the board.
    #[display("win length {len} is out of range for a {rows}x{cols} board")]
    WinLength {
        /// Requested run length.
        len: usize,
        /// Board row count.
        rows: usize,
        /// Board column count.
        cols: usize,
    },

    /// A saved board file could not be understood.
    #[display("malformed board layout: {reason}")]
    Layout {
        /// What was wrong with the input.
        reason: String,
    },

    /// Reading or writing the console, or reading a board file, failed.
    #[display("I/O failed: {source}")]
    #[from]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl GameError {
    /// Shorthand for a [`GameError::Layout`] with the given reason.
    pub fn layout(reason: impl Into<String>) -> Self {
        GameError::Layout {
            reason: reason.into(),
        }
    }
}
