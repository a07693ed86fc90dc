//! TUI application state
//!
//! Holds the current engine snapshot and the little view state the
//! terminal needs (which button flashes, whether to quit).

use ratatui::layout::Rect;
use tracing::debug;

use super::input::InputAction;
use super::keypad::hit_test;
use super::ui::CalculatorLayout;
use crate::core::{CalcState, Event};
use crate::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Current engine snapshot
    state: CalcState,
    /// Keypad layout
    keypad: Keypad,
    /// Index of the button shown as pressed
    pressed: Option<usize>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(CalcState::new())
    }

    /// Creates an app resuming from an existing snapshot
    #[must_use]
    pub fn with_state(state: CalcState) -> Self {
        Self {
            state,
            keypad: Keypad::new(),
            pressed: None,
            should_quit: false,
        }
    }

    /// Returns the engine snapshot
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns the display row
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the preview row
    #[must_use]
    pub fn preview(&self) -> String {
        self.state.preview()
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the index of the highlighted button
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses the button that sends `event`
    pub fn press(&mut self, event: Event) {
        self.pressed = self.keypad.position_of(event);
        self.state = self.state.apply(event);
    }

    /// Presses the button at grid index `index`
    pub fn press_button(&mut self, index: usize) -> Option<Event> {
        let event = self.keypad.get_button(index)?.action;
        self.press(event);
        Some(event)
    }

    /// Handles a left click at a screen position, given the terminal area
    pub fn click(&mut self, terminal: Rect, column: u16, row: u16) -> Option<Event> {
        let layout = CalculatorLayout::new(terminal);
        match hit_test(&self.keypad, layout.keypad, column, row) {
            Some(index) => self.press_button(index),
            None => {
                debug!(column, row, "click outside keypad");
                self.release();
                None
            }
        }
    }

    /// Clears the pressed highlight
    pub fn release(&mut self) {
        self.pressed = None;
    }

    /// Applies an input action; clicks are resolved against `terminal`
    pub fn handle(&mut self, action: InputAction, terminal: Rect) {
        match action {
            InputAction::Press(event) => self.press(event),
            InputAction::Click { column, row } => {
                let _ = self.click(terminal, column, row);
            }
            InputAction::Quit => self.quit(),
            InputAction::Resize => {}
            InputAction::None => self.release(),
        }
    }
}
