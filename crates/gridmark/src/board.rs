//! Core domain types: marks, cells, the board, and game status.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// The cross mark. Cross moves first.
    #[strum(serialize = "X")]
    Cross,
    /// The circle mark.
    #[strum(serialize = "O")]
    Circle,
}

impl Mark {
    /// Returns the mark that moves after this one.
    pub fn other(self) -> Self {
        match self {
            Mark::Cross => Mark::Circle,
            Mark::Circle => Mark::Cross,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell claimed by a mark.
    Marked(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::CELLS],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Cell::Empty)
    }

    /// Returns all cells as an array in row-major order.
    pub fn cells(&self) -> &[Cell; Self::CELLS] {
        &self.cells
    }

    /// Writes a mark to a cell. Crate-private: `Game::play` rejects
    /// occupied cells before calling this, so marks are set exactly once.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = Cell::Marked(mark);
    }

    /// Number of cells holding the given mark.
    pub(crate) fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// Mark counts are consistent with alternating turns starting at cross.
    pub(crate) fn is_balanced(&self) -> bool {
        let crosses = self.count(Mark::Cross);
        let circles = self.count(Mark::Circle);
        crosses == circles || crosses == circles + 1
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = crate::rules::EvaluateError;

    /// Builds a board from a raw cell slice, rejecting malformed lengths.
    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let cells: [Cell; Self::CELLS] = cells
            .try_into()
            .map_err(|_| crate::rules::EvaluateError::MalformedBoard { len: cells.len() })?;
        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    /// Formats the board as a 3x3 grid; empty cells show their 1-based index.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

/// The three positions that completed a line, and whose mark did it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    /// The winning mark.
    pub mark: Mark,
    /// The completed line's positions, in board order.
    pub line: [Position; 3],
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing.
    Playing,
    /// Game ended with a completed line.
    Won(WinLine),
    /// Board filled with no line completed.
    Draw,
}

impl Status {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Won(win) => Some(win.mark),
            _ => None,
        }
    }

    /// True once the game has left play.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::Playing)
    }
}
