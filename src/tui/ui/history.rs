//! Move history list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use rewind_tictactoe::History;

/// Renders one numbered entry per snapshot and returns the visible entries' areas.
///
/// The displayed step is shown in bold green. `cursor` is the keyboard
/// selection when the list has focus. The list scrolls so the cursor (or,
/// without focus, the displayed step) stays visible.
pub fn render_history(
    frame: &mut Frame,
    area: Rect,
    history: &History,
    current_step: usize,
    cursor: Option<usize>,
) -> Vec<(usize, Rect)> {
    let block = Block::default().borders(Borders::ALL).title("History");
    let inner = block.inner(area);
    let visible = inner.height as usize;
    let anchor = cursor.unwrap_or(current_step);
    let offset = (anchor + 1).saturating_sub(visible);

    let items: Vec<ListItem> = history
        .labels()
        .into_iter()
        .enumerate()
        .map(|(step, label)| {
            let style = if step == current_step {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", step + 1, label)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_offset(offset).with_selected(cursor);
    frame.render_stateful_widget(list, area, &mut state);

    (offset..history.len())
        .take(visible)
        .map(|step| {
            let row = inner.y + (step - offset) as u16;
            (step, Rect::new(inner.x, row, inner.width, 1))
        })
        .collect()
}
