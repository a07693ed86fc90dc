//! Keyboard and mouse input mapping
//!
//! Translates crossterm events into keypad presses. Pointer clicks are
//! resolved against the keypad grid later, once the layout is known.

use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::core::Event;

/// What a terminal event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Press a keypad button
    Press(Event),
    /// Left click at a screen position
    Click {
        /// Screen column
        column: u16,
        /// Screen row
        row: u16,
    },
    /// Redraw after a terminal resize
    Resize,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &TermEvent) -> InputAction {
        match event {
            TermEvent::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(*key),
            TermEvent::Mouse(mouse) => self.handle_mouse(*mouse),
            TermEvent::Resize(..) => InputAction::Resize,
            _ => InputAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => InputAction::Quit,
                _ => InputAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => InputAction::Quit,
            KeyCode::Char(c) => Event::from_char(c).map_or(InputAction::None, InputAction::Press),
            KeyCode::Enter => InputAction::Press(Event::Equals),
            KeyCode::Backspace | KeyCode::Delete => InputAction::Press(Event::Delete),
            KeyCode::Esc => InputAction::Press(Event::Clear),
            _ => InputAction::None,
        }
    }

    /// Maps a mouse event to an action; only left-button presses count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> InputAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => InputAction::Click {
                column: event.column,
                row: event.row,
            },
            _ => InputAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // ===== Keys =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            let d = c.to_digit(10).unwrap() as u8;
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                InputAction::Press(Event::Digit(d))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
        ];
        for (c, op) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                InputAction::Press(Event::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_unary_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            InputAction::Press(Event::Percent)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('n'))),
            InputAction::Press(Event::ToggleSign)
        );
    }

    #[test]
    fn test_handle_editing_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            InputAction::Press(Event::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            InputAction::Press(Event::Delete)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Delete)),
            InputAction::Press(Event::Delete)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            InputAction::Press(Event::Clear)
        );
    }

    #[test]
    fn test_handle_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            InputAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            InputAction::Quit
        );
    }

    #[test]
    fn test_ctrl_other_is_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            InputAction::None
        );
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('z'))), InputAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Left)), InputAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), InputAction::None);
    }

    // ===== Mouse =====

    #[test]
    fn test_left_click_reports_position() {
        let handler = InputHandler::new();
        let event = mouse_event(MouseEventKind::Down(MouseButton::Left), 12, 7);
        assert_eq!(
            handler.handle_mouse(event),
            InputAction::Click { column: 12, row: 7 }
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let handler = InputHandler::new();
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(handler.handle_mouse(mouse_event(kind, 1, 1)), InputAction::None);
        }
    }

    // ===== Terminal events =====

    #[test]
    fn test_handle_event_dispatch() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_event(&TermEvent::Key(key_event(KeyCode::Char('3')))),
            InputAction::Press(Event::Digit(3))
        );
        assert_eq!(
            handler.handle_event(&TermEvent::Mouse(mouse_event(
                MouseEventKind::Down(MouseButton::Left),
                2,
                3
            ))),
            InputAction::Click { column: 2, row: 3 }
        );
        assert_eq!(handler.handle_event(&TermEvent::Resize(80, 24)), InputAction::Resize);
        assert_eq!(handler.handle_event(&TermEvent::FocusGained), InputAction::None);
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let mut key = key_event(KeyCode::Char('3'));
        key.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_event(&TermEvent::Key(key)), InputAction::None);
    }
}
