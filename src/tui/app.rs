//! Application state and input routing.
//!
//! The app turns key and mouse input into [`GameEvent`]s; the controller is
//! the only thing that changes game state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use rewind_tictactoe::{EventOutcome, GameController, GameEvent, Position};
use tracing::{debug, instrument};

use super::input::{move_cursor, move_history_cursor};
use super::theme::Theme;
use super::ui::ScreenLayout;

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Grid,
    /// The move history list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Grid => Focus::History,
            Focus::History => Focus::Grid,
        }
    }
}

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Redraw and wait for more input.
    Stay,
    /// Send an event to the controller.
    Dispatch(GameEvent),
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameController,
    theme: Theme,
    focus: Focus,
    cursor: Position,
    history_cursor: usize,
    layout: ScreenLayout,
}

impl App {
    /// Creates a new application around a fresh game.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        Self {
            game: GameController::new(),
            theme,
            focus: Focus::Grid,
            cursor: Position::Center,
            history_cursor: 0,
            layout: ScreenLayout::default(),
        }
    }

    /// Records where the last frame put the cells and history entries.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = layout;
    }

    /// Translates a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                Action::Stay
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.focus = Focus::Grid;
                Action::Dispatch(GameEvent::CellActivated { index })
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Grid => Action::Dispatch(GameEvent::CellActivated {
                    index: self.cursor.to_index(),
                }),
                Focus::History => Action::Dispatch(GameEvent::HistorySelected {
                    step: self.history_cursor,
                }),
            },
            code => {
                match self.focus {
                    Focus::Grid => self.cursor = move_cursor(self.cursor, code),
                    Focus::History => {
                        self.history_cursor =
                            move_history_cursor(self.history_cursor, self.game.history().len(), code)
                    }
                }
                Action::Stay
            }
        }
    }

    /// Translates a mouse event; only left clicks on a cell or history entry count.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::Stay;
        }

        if let Some(index) = self.layout.cell_at(mouse.column, mouse.row) {
            if let Some(pos) = Position::from_index(index) {
                self.cursor = pos;
            }
            self.focus = Focus::Grid;
            return Action::Dispatch(GameEvent::CellActivated { index });
        }

        if let Some(step) = self.layout.history_entry_at(mouse.column, mouse.row) {
            self.history_cursor = step;
            self.focus = Focus::History;
            return Action::Dispatch(GameEvent::HistorySelected { step });
        }

        Action::Stay
    }

    /// Hands an event to the controller.
    ///
    /// Ignored events change nothing on screen.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) -> EventOutcome {
        let outcome = self.game.dispatch(event);
        if outcome.is_ignored() {
            debug!(%outcome, "Event ignored");
        } else {
            self.history_cursor = self.game.step();
            debug!(%outcome, status = %self.game.status(), "Event applied");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        if let Action::Dispatch(event) = app.handle_key(key(code)) {
            app.dispatch(event);
        }
    }

    #[test]
    fn test_digit_keys_play_cells() {
        let mut app = App::new(Theme::default());
        assert_eq!(
            app.handle_key(key(KeyCode::Char('1'))),
            Action::Dispatch(GameEvent::CellActivated { index: 0 })
        );
        assert_eq!(*app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new(Theme::default());
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().step(), 1);
        assert!(!app.game().current().board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_history_navigation_rewinds() {
        let mut app = App::new(Theme::default());
        for c in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(*app.history_cursor(), 3);

        press(&mut app, KeyCode::Tab);
        assert_eq!(*app.focus(), Focus::History);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_ignored_move_keeps_cursor() {
        let mut app = App::new(Theme::default());
        press(&mut app, KeyCode::Char('5'));
        let before = app.game().clone();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game(), &before);
        assert_eq!(*app.history_cursor(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Theme::default());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_click_outside_layout_does_nothing() {
        let mut app = App::new(Theme::default());
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(app.handle_mouse(click), Action::Stay);
    }
}
