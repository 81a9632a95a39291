//! Turn and board state tracking.

use crate::board::{Board, Mark, Status};
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error from attempting an invalid move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position already holds a mark.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Position),
    /// The game has already ended.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Owned game state: board, current turn, and status.
///
/// Handlers receive this value explicitly; there is no global state.
/// A finished game stays inspectable until [`Game::reset`] starts the
/// next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Mark,
    status: Status,
}

impl Game {
    /// Creates a new game: empty board, cross to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::Cross,
            status: Status::Playing,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose mark is placed next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// True once the game has left play.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Places the current turn's mark at the position.
    ///
    /// On success the turn flips and the returned status reflects the
    /// re-evaluated board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended and
    /// [`MoveError::CellOccupied`] if the cell already holds a mark.
    /// Neither changes any state.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, pos: Position) -> Result<Status, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        self.board.set(pos, self.turn);
        self.turn = self.turn.other();
        self.status = rules::status_of(&self.board);

        debug_assert!(self.board.is_balanced(), "mark counts out of balance");
        debug!(status = ?self.status, "move applied");
        Ok(self.status)
    }

    /// Resets the game for replay: all cells empty, cross to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_new_game_cross_moves_first() {
        let game = Game::new();
        assert_eq!(game.turn(), Mark::Cross);
        assert_eq!(game.status(), Status::Playing);
        assert!(!game.is_over());
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::new();
        game.play(Position::Center).expect("empty cell");
        assert_eq!(game.turn(), Mark::Circle);
        game.play(Position::TopLeft).expect("empty cell");
        assert_eq!(game.turn(), Mark::Cross);
    }

    #[test]
    fn test_occupied_cell_leaves_state_unchanged() {
        let mut game = Game::new();
        game.play(Position::Center).expect("empty cell");
        let before = game.clone();

        let result = game.play(Position::Center);
        assert_eq!(result, Err(MoveError::CellOccupied(Position::Center)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut game = Game::new();
        // X: top row, O: middle row (incomplete)
        game.play(Position::TopLeft).expect("empty cell");
        game.play(Position::MiddleLeft).expect("empty cell");
        game.play(Position::TopCenter).expect("empty cell");
        game.play(Position::Center).expect("empty cell");
        let status = game.play(Position::TopRight).expect("empty cell");
        assert_eq!(status.winner(), Some(Mark::Cross));

        let before = game.clone();
        assert_eq!(game.play(Position::BottomLeft), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_reports_line_positions() {
        let mut game = Game::new();
        // O: left column, X scattered
        game.play(Position::TopCenter).expect("empty cell");
        game.play(Position::TopLeft).expect("empty cell");
        game.play(Position::Center).expect("empty cell");
        game.play(Position::MiddleLeft).expect("empty cell");
        game.play(Position::BottomRight).expect("empty cell");
        let status = game.play(Position::BottomLeft).expect("empty cell");

        match status {
            Status::Won(win) => {
                assert_eq!(win.mark, Mark::Circle);
                assert_eq!(
                    win.line,
                    [
                        Position::TopLeft,
                        Position::MiddleLeft,
                        Position::BottomLeft
                    ]
                );
            }
            other => panic!("expected a win, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_after_filling_board() {
        let mut game = Game::new();
        // X O X / O X X / O X O, played in an order that avoids any line
        let moves = [
            Position::TopLeft,      // X
            Position::TopCenter,    // O
            Position::TopRight,     // X
            Position::MiddleLeft,   // O
            Position::Center,       // X
            Position::BottomLeft,   // O
            Position::MiddleRight,  // X
            Position::BottomRight,  // O
            Position::BottomCenter, // X
        ];
        for pos in moves {
            game.play(pos).expect("empty cell");
        }
        assert_eq!(game.status(), Status::Draw);
        assert!(game.is_over());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = Game::new();
        game.play(Position::Center).expect("empty cell");
        game.play(Position::TopLeft).expect("empty cell");

        game.reset();
        assert_eq!(game.turn(), Mark::Cross);
        assert_eq!(game.status(), Status::Playing);
        for pos in Position::ALL {
            assert_eq!(game.board().get(pos), Cell::Empty);
        }
    }

    #[test]
    fn test_state_serializes() {
        let mut game = Game::new();
        game.play(Position::Center).expect("empty cell");

        let json = serde_json::to_value(&game).expect("serializable state");
        assert_eq!(json["turn"], "Circle");
        assert_eq!(json["status"], "Playing");
        assert_eq!(json["board"]["cells"][4], serde_json::json!({"Marked": "Cross"}));
    }
}
