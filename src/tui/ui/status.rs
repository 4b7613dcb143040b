//! Status line rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::Status;

/// Renders `winner: X` or `next player: O`.
pub fn render_status(frame: &mut Frame, area: Rect, status: Status) {
    let style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, area);
}
