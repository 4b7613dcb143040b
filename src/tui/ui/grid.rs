//! Board rendering: the grid and its cells.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Position, Snapshot, Square};

use super::center_rect;
use crate::tui::theme::Theme;

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;

/// Width of the grid including separators.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the grid including separators.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the board and returns the area of each cell by index.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Option<Position>,
    theme: &Theme,
) -> [Rect; 9] {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, GRID_WIDTH, GRID_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, positions) in Position::ROWS.iter().enumerate() {
        if r > 0 {
            render_separator(frame, rows[r * 2 - 1]);
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[r * 2]);

        for (c, pos) in positions.iter().enumerate() {
            if c > 0 {
                render_vertical_sep(frame, cols[c * 2 - 1]);
            }
            let cell = cols[c * 2];
            render_cell(frame, cell, *pos, snapshot.square(*pos), cursor == Some(*pos), theme);
            cells[pos.to_index()] = cell;
        }
    }
    cells
}

/// Renders one cell: its mark, or its key hint when empty.
fn render_cell(
    frame: &mut Frame,
    area: Rect,
    pos: Position,
    square: Square,
    focused: bool,
    theme: &Theme,
) {
    let (symbol, base_style) = match square {
        Square::Occupied(mark) => (mark.to_string(), theme.mark_style(mark)),
        Square::Empty if *theme.show_cell_hints() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
    };

    let style = if focused {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(symbol)])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let segment = "─".repeat(CELL_WIDTH as usize);
    let line = format!("{segment}┼{segment}┼{segment}");
    let sep = Paragraph::new(line).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
