//! Win and draw evaluation.
//!
//! The evaluator inspects a 9-cell array and reports status: a completed
//! line beats a full board, which beats an ongoing game.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::board::{Board, Cell, Status};
use tracing::instrument;

/// Error from evaluating a raw cell slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EvaluateError {
    /// The input did not hold exactly nine cells.
    #[display("malformed board: expected 9 cells, got {len}")]
    MalformedBoard {
        /// Length of the rejected slice.
        len: usize,
    },
}

/// Evaluates a raw cell slice and reports the game status.
///
/// # Errors
///
/// Returns [`EvaluateError::MalformedBoard`] for anything other than
/// exactly nine cells.
#[instrument(skip(cells), fields(len = cells.len()))]
pub fn evaluate(cells: &[Cell]) -> Result<Status, EvaluateError> {
    let board = Board::try_from(cells)?;
    Ok(status_of(&board))
}

/// Reports the status of a well-formed board.
pub fn status_of(board: &Board) -> Status {
    if let Some(win) = winning_line(board) {
        return Status::Won(win);
    }
    if is_full(board) {
        return Status::Draw;
    }
    Status::Playing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_evaluate_rejects_malformed_length() {
        let short = [Cell::Empty; 8];
        let long = [Cell::Empty; 10];
        assert_eq!(
            evaluate(&short),
            Err(EvaluateError::MalformedBoard { len: 8 })
        );
        assert_eq!(
            evaluate(&long),
            Err(EvaluateError::MalformedBoard { len: 10 })
        );
    }

    #[test]
    fn test_evaluate_empty_board_playing() {
        let cells = [Cell::Empty; 9];
        assert_eq!(evaluate(&cells), Ok(Status::Playing));
    }

    #[test]
    fn test_evaluate_reports_win_over_full_board() {
        use Cell::Marked;
        use Mark::{Circle, Cross};
        // X X X / O O X / O X O - top row completed on a filled board
        let cells = [
            Marked(Cross),
            Marked(Cross),
            Marked(Cross),
            Marked(Circle),
            Marked(Circle),
            Marked(Cross),
            Marked(Circle),
            Marked(Cross),
            Marked(Circle),
        ];
        let status = evaluate(&cells).expect("well-formed board");
        assert_eq!(status.winner(), Some(Cross));
    }
}
