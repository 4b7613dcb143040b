//! Stateless UI rendering.
//!
//! [`draw`] renders the whole screen from the app state and returns where
//! each clickable element ended up, so mouse input can be mapped back to a
//! cell index or history step.

mod grid;
mod history;
mod status;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};

pub use grid::{GRID_HEIGHT, GRID_WIDTH};

/// Screen areas of the clickable elements from the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Area of each board cell, by index.
    pub cells: [Rect; 9],
    /// Visible history entries and their areas.
    pub history_entries: Vec<(usize, Rect)>,
}

impl ScreenLayout {
    /// Board index of the cell under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = ScreenPosition::new(column, row);
        self.cells.iter().position(|area| area.contains(point))
    }

    /// History step of the entry under the given terminal coordinates.
    pub fn history_entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = ScreenPosition::new(column, row);
        self.history_entries
            .iter()
            .find(|(_, area)| area.contains(point))
            .map(|(step, _)| *step)
    }
}

/// Draws the main UI: title, board, status line, history and key help.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(GRID_HEIGHT + 2),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let game = app.game();
    let grid_cursor = (*app.focus() == Focus::Grid).then_some(*app.cursor());
    let cells = grid::render_grid(frame, chunks[1], game.current(), grid_cursor, app.theme());

    status::render_status(frame, chunks[2], game.status());

    let history_cursor = (*app.focus() == Focus::History).then_some(*app.history_cursor());
    let history_entries =
        history::render_history(frame, chunks[3], game.history(), game.step(), history_cursor);

    let help = Paragraph::new("←↑↓→: Move | Enter: Select | Tab: Board/History | 1-9: Play | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    ScreenLayout {
        cells,
        history_entries,
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
