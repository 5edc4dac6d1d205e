//! Tests for the game-state engine through its public API.

use ttt_engine::invariants::{EngineInvariants, InvariantSet};
use ttt_engine::{
    Board, Cell, Game, Mark, MoveError, Outcome, Position, RestartPolicy, Seat, Status, Verdict,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).expect("Valid position")
}

fn play(game: &mut Game, moves: &[(usize, usize)]) -> Vec<Verdict> {
    moves
        .iter()
        .map(|&(r, c)| game.apply_move(pos(r, c)).expect("Valid move"))
        .collect()
}

#[test]
fn test_row_win_for_first_player() {
    let mut game = Game::new();
    let verdicts = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(
        verdicts,
        vec![
            Verdict::Pending,
            Verdict::Pending,
            Verdict::Pending,
            Verdict::Pending,
            Verdict::Win
        ]
    );
    assert_eq!(game.status(), Status::Over(Outcome::Winner(Seat::First)));
    assert_eq!(game.current_player().mark(), Mark::X);
    assert_eq!(game.winner().map(|p| p.nickname()), Some("Player_1"));
}

#[test]
fn test_second_player_column_win() {
    let mut game = Game::new();
    let verdicts = play(&mut game, &[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);

    assert_eq!(verdicts.last(), Some(&Verdict::Win));
    assert_eq!(game.outcome(), Some(Outcome::Winner(Seat::Second)));
    assert_eq!(game.current_player().mark(), Mark::O);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = Game::new();
    let verdicts = play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert!(verdicts[..8].iter().all(|v| *v == Verdict::Pending));
    assert_eq!(verdicts[8], Verdict::Draw);
    assert_eq!(game.status(), Status::Over(Outcome::Draw));
    assert!(game.board().is_full());
    assert!(game.winner().is_none());
    // The player who filled the last cell stays current.
    assert_eq!(game.players().current_seat(), Seat::First);
}

#[test]
fn test_same_cell_twice_is_rejected() {
    let mut game = Game::new();
    game.apply_move(pos(1, 1)).expect("Valid move");
    let board = game.board().clone();
    let history = game.history().clone();
    let seat = game.players().current_seat();

    let result = game.apply_move(pos(1, 1));

    assert_eq!(result, Err(MoveError::CellOccupied(pos(1, 1))));
    assert_eq!(game.board(), &board);
    assert_eq!(game.history(), &history);
    assert_eq!(game.players().current_seat(), seat);
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_history_tracks_occupied_cells() {
    let mut game = Game::new();
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1)];

    for &(r, c) in &moves {
        game.apply_move(pos(r, c)).expect("Valid move");
        assert_eq!(game.history().len(), game.board().occupied_count());
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    let recorded: Vec<(Mark, Position)> = game.history().marked().collect();
    assert_eq!(recorded[0], (Mark::X, pos(1, 1)));
    assert_eq!(recorded[1], (Mark::O, pos(0, 0)));
    for (mark, p) in recorded {
        assert_eq!(game.board().get(p), Cell::Occupied(mark));
    }
}

#[test]
fn test_turns_alternate_until_game_ends() {
    let mut game = Game::new();
    for &(r, c) in &[(0, 0), (1, 1), (2, 2), (0, 2)] {
        let mover = game.players().current_seat();
        let verdict = game.apply_move(pos(r, c)).expect("Valid move");
        assert_eq!(verdict, Verdict::Pending);
        assert_ne!(game.players().current_seat(), mover);
    }
}

#[test]
fn test_rename_long_nickname() {
    let mut game = Game::new();
    game.rename_current(&"n".repeat(100));

    let player = game.current_player();
    assert_eq!(player.nickname().len(), 63);
    assert_eq!(player.mark(), Mark::X);
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_restart_mid_game() {
    let mut game = Game::new();
    game.rename_current("Ann");
    play(&mut game, &[(0, 0), (1, 1), (2, 2)]);

    let fresh = game.clone().restart(RestartPolicy::Reset);
    assert_eq!(fresh.board(), &Board::new());
    assert!(fresh.history().is_empty());
    assert_eq!(fresh.players().current_seat(), Seat::First);
    assert_eq!(fresh.players().seat(Seat::First).nickname(), "Player_1");
    assert_eq!(fresh.players().seat(Seat::Second).nickname(), "Player_2");

    let kept = game.restart(RestartPolicy::Keep);
    assert_eq!(kept.players().seat(Seat::First).nickname(), "Ann");
    assert!(kept.history().is_empty());
    assert_eq!(kept.status(), Status::InProgress);
}

#[test]
fn test_replay_from_history() {
    let mut game = Game::new();
    play(&mut game, &[(1, 1), (0, 0), (2, 0), (0, 2)]);

    let replayed = Game::replay(game.history().as_slice()).expect("Valid replay");
    assert_eq!(replayed, game);
}
