//! kinarow binary: wire the CLI to a match and play it out.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, PlayerKind};
use kinarow::{
    AlphaBetaPlayer, HumanPlayer, NegamaxPlayer, Orchestrator, Player, PlayerId, Position,
    StdConsole, load_board,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let position = match &cli.board {
        Some(path) => Position::from_grid(load_board(path)?, cli.win_length)?,
        None => Position::new(cli.rows, cli.cols, cli.win_length)?,
    };
    info!(
        rows = position.rows(),
        cols = position.cols(),
        win_length = position.win_len(),
        player1 = %cli.player1,
        player2 = %cli.player2,
        "starting match"
    );

    let first = build_player(cli.player1, PlayerId::First, &cli);
    let second = build_player(cli.player2, PlayerId::Second, &cli);
    let mut game = Orchestrator::new(position, first, second, StdConsole::new());
    let status = game.run()?;
    info!(?status, "match finished");
    Ok(())
}

/// Instantiates the decision source a CLI player choice names.
fn build_player(kind: PlayerKind, id: PlayerId, cli: &Cli) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new("(Human)")),
        PlayerKind::Negamax => Box::new(NegamaxPlayer::new(cli.negamax_depth, id)),
        PlayerKind::NegamaxAb => Box::new(AlphaBetaPlayer::new(cli.alphabeta_depth, id)),
    }
}
