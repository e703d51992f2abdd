//! Command-line interface.

use clap::{Parser, ValueEnum};

/// Generalized k-in-a-row board game with negamax AI players.
#[derive(Parser, Debug)]
#[command(name = "kinarow")]
#[command(about = "Play k-in-a-row against humans or negamax searchers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Load the starting board from a saved layout file.
    #[arg(short, long)]
    pub board: Option<std::path::PathBuf>,

    /// Number of board rows (ignored when --board is given).
    #[arg(long, default_value_t = 8)]
    pub rows: usize,

    /// Number of board columns (ignored when --board is given).
    #[arg(long, default_value_t = 8)]
    pub cols: usize,

    /// Number of aligned marks required to win.
    #[arg(long, default_value_t = 4)]
    pub win_length: usize,

    /// Search depth for negamax players.
    #[arg(long, default_value_t = 3)]
    pub negamax_depth: u32,

    /// Search depth for alpha-beta players.
    #[arg(long, default_value_t = 5)]
    pub alphabeta_depth: u32,

    /// First contestant, plays X.
    #[arg(value_enum)]
    pub player1: PlayerKind,

    /// Second contestant, plays O.
    #[arg(value_enum)]
    pub player2: PlayerKind,
}

/// The kinds of decision source a contestant can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display)]
pub enum PlayerKind {
    /// Interactive player prompted on the console.
    #[value(alias = "h")]
    Human,
    /// Plain negamax search.
    #[value(alias = "n")]
    Negamax,
    /// Negamax with alpha-beta pruning.
    #[value(alias = "a")]
    NegamaxAb,
}
