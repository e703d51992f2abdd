//! Match-loop tests over scripted consoles and decision sources.

use kinarow::{
    AlphaBetaPlayer, BufferConsole, Console, Coord, GameError, GameStatus, HumanPlayer,
    NegamaxPlayer, Orchestrator, Player, PlayerId, Position,
};

/// Decision source replaying a fixed list of coordinates.
struct Scripted {
    name: &'static str,
    moves: Vec<Coord>,
    next: usize,
}

impl Scripted {
    fn new(name: &'static str, moves: Vec<Coord>) -> Self {
        Self {
            name,
            moves,
            next: 0,
        }
    }
}

impl Player for Scripted {
    fn choose(
        &mut self,
        _position: &mut Position,
        _console: &mut dyn Console,
    ) -> Result<Coord, GameError> {
        let coord = self.moves.get(self.next).copied();
        self.next += 1;
        coord.ok_or(GameError::NoMoveAvailable)
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn scripted_match(
    position: Position,
    first: Vec<Coord>,
    second: Vec<Coord>,
) -> Orchestrator<BufferConsole> {
    Orchestrator::new(
        position,
        Box::new(Scripted::new("(scripted-X)", first)),
        Box::new(Scripted::new("(scripted-O)", second)),
        BufferConsole::new(),
    )
}

#[test]
fn a_completed_row_wins_the_match() {
    let mut game = scripted_match(
        Position::new(3, 3, 3).unwrap(),
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
        vec![Coord::new(1, 1), Coord::new(2, 2)],
    );
    let status = game.run().unwrap();
    assert_eq!(status, GameStatus::Won(PlayerId::First));
    assert_eq!(game.status(), status);
    assert!(
        game.console()
            .output()
            .contains("Player 1, (scripted-X), has won!")
    );
}

#[test]
fn a_full_board_without_a_run_is_a_draw() {
    let mut game = scripted_match(
        Position::new(3, 3, 3).unwrap(),
        vec![
            Coord::new(0, 0),
            Coord::new(0, 2),
            Coord::new(1, 0),
            Coord::new(2, 1),
            Coord::new(2, 2),
        ],
        vec![
            Coord::new(0, 1),
            Coord::new(1, 1),
            Coord::new(1, 2),
            Coord::new(2, 0),
        ],
    );
    let status = game.run().unwrap();
    assert_eq!(status, GameStatus::Draw);
    assert!(game.console().output().contains("Draw. Nobody wins."));
}

#[test]
fn an_occupied_proposal_is_rejected_without_advancing_the_turn() {
    // O proposes (0,0) which X already holds; the retry still belongs
    // to O, and the match plays out to X's win down column 0.
    let mut game = scripted_match(
        Position::new(3, 3, 3).unwrap(),
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
        vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(1, 2)],
    );
    let status = game.run().unwrap();
    assert_eq!(status, GameStatus::Won(PlayerId::First));
    assert_eq!(game.position().moves(), 5);
    assert!(
        game.console()
            .output()
            .contains("Cannot play there, try again.")
    );
}

#[test]
fn the_board_rendering_appears_after_every_move() {
    let mut game = scripted_match(
        Position::new(2, 2, 2).unwrap(),
        vec![Coord::new(0, 0), Coord::new(1, 0)],
        vec![Coord::new(0, 1)],
    );
    game.run().unwrap();
    let output = game.console().output();
    assert!(output.contains("|X| |"));
    assert!(output.contains("|X|O|"));
    assert!(output.contains("Moves: 0 ; Player 1, (scripted-X), "));
    assert!(output.contains("Moves: 1 ; Player 2, (scripted-O), "));
}

#[test]
fn two_engines_play_a_small_board_to_completion() {
    let position = Position::new(3, 3, 3).unwrap();
    let mut game = Orchestrator::new(
        position,
        Box::new(NegamaxPlayer::new(2, PlayerId::First)),
        Box::new(AlphaBetaPlayer::new(2, PlayerId::Second)),
        BufferConsole::new(),
    );
    let status = game.run().unwrap();
    assert!(matches!(status, GameStatus::Won(_) | GameStatus::Draw));
    if status == GameStatus::Draw {
        assert!(game.position().is_full());
    }
}

#[test]
fn humans_play_through_the_console_port() {
    // X wins down column 0; O wastes time on the middle row.
    let console = BufferConsole::with_input(["0 0", "1 1", "1 0", "1 2", "2 0"]);
    let mut game = Orchestrator::new(
        Position::new(3, 3, 3).unwrap(),
        Box::new(HumanPlayer::new("(Human)")),
        Box::new(HumanPlayer::new("(Human)")),
        console,
    );
    let status = game.run().unwrap();
    assert_eq!(status, GameStatus::Won(PlayerId::First));
    assert!(game.console().output().contains("Where? (row col)"));
}

#[test]
fn a_loaded_board_resumes_with_the_right_player() {
    let mut position = Position::new(3, 3, 3).unwrap();
    position.place(Coord::new(0, 0), PlayerId::First);
    position.place(Coord::new(1, 1), PlayerId::Second);
    position.place(Coord::new(0, 1), PlayerId::First);
    assert_eq!(position.to_move(), PlayerId::Second);

    // O moves next and must block X's open row to stay alive; a
    // depth-two search sees the threat, so the match does not end with
    // an uncontested X win on the very next ply.
    let mut game = Orchestrator::new(
        position,
        Box::new(NegamaxPlayer::new(2, PlayerId::First)),
        Box::new(AlphaBetaPlayer::new(2, PlayerId::Second)),
        BufferConsole::new(),
    );
    let status = game.run().unwrap();
    assert!(matches!(status, GameStatus::Won(_) | GameStatus::Draw));
    assert!(game.position().moves() > 4);
}

#[test]
fn exhausted_scripts_abort_the_match() {
    let mut game = scripted_match(
        Position::new(3, 3, 3).unwrap(),
        vec![Coord::new(0, 0)],
        vec![],
    );
    assert!(game.run().is_err());
    assert_eq!(game.status(), GameStatus::InProgress);
}
