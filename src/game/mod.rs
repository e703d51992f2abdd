//! Board, position, rules, and saved-board loading.

pub mod board;
pub mod layout;
mod position;
pub mod rules;
mod types;

pub use board::{Coords, Grid};
pub use position::Position;
pub use types::{Cell, Coord, Delta, GameStatus, PlayerId};
