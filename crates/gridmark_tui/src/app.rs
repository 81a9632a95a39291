//! Application state: the owned game plus UI concerns.

use crossterm::event::KeyCode;
use gridmark::{Game, Mark, Position, Status};
use tracing::{debug, instrument};

use crate::input;

/// Main application state.
///
/// Owns the game; the event loop relays input here and the render pass
/// reads the result back out.
pub struct App {
    game: Game,
    cursor: Position,
    status_line: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            status_line: turn_message(Mark::Cross),
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The keyboard cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The status line text.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Handles a key press that is not a global binding.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    if digit >= 1 {
                        if let Some(pos) = Position::from_index(digit as usize - 1) {
                            self.place(pos);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Places the current mark at the position.
    ///
    /// Occupied cells and finished games are a silent no-op.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) {
        match self.game.play(pos) {
            Ok(status) => {
                self.status_line = status_message(status, self.game.turn());
            }
            Err(e) => debug!(error = %e, "move ignored"),
        }
    }

    /// Resets the game for another round.
    #[instrument(skip(self))]
    pub fn replay(&mut self) {
        self.game.reset();
        self.cursor = Position::Center;
        self.status_line = turn_message(self.game.turn());
    }
}

fn status_message(status: Status, next: Mark) -> String {
    match status {
        Status::Playing => turn_message(next),
        Status::Won(win) => format!("{} wins! Press 'r' to replay or 'q' to quit.", win.mark),
        Status::Draw => "Game ended in a draw! Press 'r' to replay or 'q' to quit.".to_string(),
    }
}

fn turn_message(mark: Mark) -> String {
    format!("{mark}'s turn. Click a cell or press 1-9.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmark::Cell;

    #[test]
    fn test_digit_key_places_mark() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(
            app.game().board().get(Position::Center),
            Cell::Marked(Mark::Cross)
        );
        assert_eq!(app.game().turn(), Mark::Circle);
    }

    #[test]
    fn test_zero_key_is_ignored() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('0'));
        for pos in Position::ALL {
            assert!(app.game().board().is_empty(pos));
        }
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().board().get(Position::TopCenter),
            Cell::Marked(Mark::Cross)
        );
    }

    #[test]
    fn test_occupied_click_is_a_no_op() {
        let mut app = App::new();
        app.place(Position::Center);
        let status_line = app.status_line().to_string();

        app.place(Position::Center);
        assert_eq!(
            app.game().board().get(Position::Center),
            Cell::Marked(Mark::Cross)
        );
        assert_eq!(app.game().turn(), Mark::Circle);
        assert_eq!(app.status_line(), status_line);
    }

    #[test]
    fn test_replay_resets_game_and_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Right);
        app.place(Position::TopLeft);

        app.replay();
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.game().turn(), Mark::Cross);
        for pos in Position::ALL {
            assert!(app.game().board().is_empty(pos));
        }
    }
}
