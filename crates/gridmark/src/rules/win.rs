//! Win detection.

use crate::board::{Board, Cell, WinLine};
use crate::position::Position;
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks all winning lines for three equal non-empty cells.
///
/// Returns the completed line and its mark on match, `None` otherwise.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Marked(mark) = board.get(a) {
            if board.get(b) == Cell::Marked(mark) && board.get(c) == Cell::Marked(mark) {
                return Some(WinLine { mark, line });
            }
        }
    }

    None
}
