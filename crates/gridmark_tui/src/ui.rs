//! Widget layout and board rendering.
//!
//! The same geometry drives both the render pass and mouse hit-testing,
//! so a click always lands on the cell the user sees.

use gridmark::{Cell, Mark, Position, Status};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Rendered width of the board, in terminal columns.
const BOARD_WIDTH: u16 = 40;
/// Rendered height of the board: three 3-row cells and two separators.
const BOARD_HEIGHT: u16 = 11;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = split_frame(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks.title);

    render_board(f, chunks.board, app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks.status);

    let help = if app.game().is_over() {
        "R: Replay | Q: Quit"
    } else {
        "Click a cell | 1-9: Move | Arrows + Enter: Move | Q: Quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks.help);
}

/// Maps a terminal click to the board cell underneath it.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    let chunks = split_frame(area);
    let point = ratatui::layout::Position::new(column, row);
    cell_rects(chunks.board)
        .into_iter()
        .position(|rect| rect.contains(point))
        .and_then(Position::from_index)
}

/// Frame regions: title bar, board, status line, key hints.
struct FrameChunks {
    title: Rect,
    board: Rect,
    status: Rect,
    help: Rect,
}

fn split_frame(area: Rect) -> FrameChunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);
    FrameChunks {
        title: chunks[0],
        board: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let rows = board_rows(area);

    for sep in [rows[1], rows[3]] {
        let line = Paragraph::new("─".repeat(sep.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(line, sep);
    }
    for row in [rows[0], rows[2], rows[4]] {
        let cols = row_cols(row);
        for sep in [cols[1], cols[3]] {
            let line = Paragraph::new("│")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(line, sep);
        }
    }

    for (index, rect) in cell_rects(area).into_iter().enumerate() {
        if let Some(pos) = Position::from_index(index) {
            render_cell(f, rect, pos, app);
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, pos: Position, app: &App) {
    let (text, mut style) = match app.game().board().get(pos) {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Mark::Cross) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::Circle) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if on_win_line(app.game().status(), pos) {
        style = Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    if pos == app.cursor() && !app.game().is_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn on_win_line(status: Status, pos: Position) -> bool {
    matches!(status, Status::Won(win) if win.line.contains(&pos))
}

/// Screen rectangles of the nine cells, row-major.
fn cell_rects(area: Rect) -> [Rect; 9] {
    let rows = board_rows(area);
    let mut rects = [Rect::default(); 9];
    for (r, row) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = row_cols(row);
        for (c, col) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            rects[r * 3 + c] = col;
        }
    }
    rects
}

/// Three cell rows and two separator rows of the centered board.
fn board_rows(area: Rect) -> [Rect; 5] {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board);
    [rows[0], rows[1], rows[2], rows[3], rows[4]]
}

/// One cell row split into three cells and two separator columns.
fn row_cols(row: Rect) -> [Rect; 5] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(row);
    [cols[0], cols[1], cols[2], cols[3], cols[4]]
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
