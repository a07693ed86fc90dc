//! Terminal front-end for the calculator
//!
//! ratatui draws, crossterm delivers keys and mouse clicks.

mod app;
mod input;
mod keypad;
pub mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputAction, InputHandler};
pub use keypad::{cell_rect, hit_test, KeypadWidget};
pub use ui::{fit_display, render, CalculatorLayout, CalculatorUI};
