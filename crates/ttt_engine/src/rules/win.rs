//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use tracing::instrument;

const fn at(row: usize, col: usize) -> Position {
    Position::ALL[row * 3 + col]
}

/// Every line that wins: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks if `mark` holds all three cells of any line.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Cell::Occupied(mark)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_no_line_on_empty_board() {
        let board = Board::new();
        assert!(!completes_line(&board, Mark::X));
        assert!(!completes_line(&board, Mark::O));
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut board = Board::new();
            for p in line {
                board.place(p, Mark::O).unwrap();
            }
            assert!(completes_line(&board, Mark::O), "line {:?}", line);
            assert!(!completes_line(&board, Mark::X));
        }
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new();
        board.place(pos(0, 1), Mark::X).unwrap();
        board.place(pos(1, 1), Mark::X).unwrap();
        assert!(!completes_line(&board, Mark::X));
        board.place(pos(2, 1), Mark::X).unwrap();
        assert!(completes_line(&board, Mark::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = Board::new();
        board.place(pos(0, 2), Mark::O).unwrap();
        board.place(pos(1, 1), Mark::O).unwrap();
        board.place(pos(2, 0), Mark::O).unwrap();
        assert!(completes_line(&board, Mark::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(pos(0, 0), Mark::X).unwrap();
        board.place(pos(0, 1), Mark::O).unwrap();
        board.place(pos(0, 2), Mark::X).unwrap();
        assert!(!completes_line(&board, Mark::X));
    }
}
