//! Draw detection.

use crate::board::Board;
use crate::position::Position;
use strum::IntoEnumIterator;

/// Checks if every cell is occupied.
///
/// A full board with no completed line is a draw.
pub fn is_full(board: &Board) -> bool {
    Position::iter().all(|pos| !board.is_empty(pos))
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_line;
    use super::*;
    use crate::board::Mark;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winning_line(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Mark::Cross);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Mark::Cross);
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O - full with no line
        board.set(Position::TopLeft, Mark::Cross);
        board.set(Position::TopCenter, Mark::Circle);
        board.set(Position::TopRight, Mark::Cross);
        board.set(Position::MiddleLeft, Mark::Circle);
        board.set(Position::Center, Mark::Cross);
        board.set(Position::MiddleRight, Mark::Cross);
        board.set(Position::BottomLeft, Mark::Circle);
        board.set(Position::BottomCenter, Mark::Cross);
        board.set(Position::BottomRight, Mark::Circle);

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X completes the top row
        board.set(Position::TopLeft, Mark::Cross);
        board.set(Position::TopCenter, Mark::Cross);
        board.set(Position::TopRight, Mark::Cross);
        board.set(Position::MiddleLeft, Mark::Circle);
        board.set(Position::Center, Mark::Circle);

        assert!(!is_draw(&board));
    }
}
