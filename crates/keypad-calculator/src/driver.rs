//! Unified calculator driver
//!
//! Write the behavioural checks once, run them against every front-end.
//! [`EngineDriver`] talks to the bare engine; [`TuiDriver`] goes through
//! the terminal app, clicks included.

use crate::core::{CalcResult, CalcState, Event};
use crate::keypad::parse_key_sequence;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calculator::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_keys("2 + 3 × 4 =").unwrap();
/// assert_eq!(driver.display(), "20");
/// ```
pub trait CalculatorDriver {
    /// Presses a single button
    fn press(&mut self, event: Event);

    /// Current display row
    fn display(&self) -> String;

    /// Current preview row
    fn preview(&self) -> String;

    /// Presses a whitespace-separated sequence of button labels
    fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        for event in parse_key_sequence([keys])? {
            self.press(event);
        }
        Ok(())
    }

    /// Presses AC
    fn clear(&mut self) {
        self.press(Event::Clear);
    }
}

/// Driver over the bare engine
#[derive(Debug, Clone, Default)]
pub struct EngineDriver {
    state: CalcState,
}

impl EngineDriver {
    /// Creates a driver in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, event: Event) {
        self.state = self.state.apply(event);
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn preview(&self) -> String {
        self.state.preview()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::layout::Rect;

    use super::{CalculatorDriver, Event};
    use crate::tui::{cell_rect, CalculatorApp, CalculatorLayout};

    /// Drives the terminal app by clicking keypad cells
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
        terminal: Rect,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Default virtual terminal size
        pub const TERMINAL: Rect = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 24,
        };

        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(CalculatorApp::new())
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                terminal: Self::TERMINAL,
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: Event) {
            let layout = CalculatorLayout::new(self.terminal);
            let cell = self
                .app
                .keypad()
                .position_of(event)
                .and_then(|index| cell_rect(self.app.keypad(), layout.keypad, index));

            // Buttons not on the grid (or a grid too small to click) go
            // straight to the app
            match cell {
                Some(cell) => {
                    let _ = self.app.click(
                        self.terminal,
                        cell.x + cell.width / 2,
                        cell.y + cell.height / 2,
                    );
                }
                None => self.app.press(event),
            }
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn preview(&self) -> String {
            self.app.preview()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared Behaviour Checks =====
// These checks work with ANY CalculatorDriver implementation

fn press<D: CalculatorDriver>(driver: &mut D, keys: &str) {
    if let Err(e) = driver.press_keys(keys) {
        panic!("bad key sequence {keys:?}: {e}");
    }
}

/// Verifies digit and decimal entry
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press(Event::Digit(5));
    assert_eq!(driver.display(), "5");
    driver.press(Event::Digit(3));
    assert_eq!(driver.display(), "53");

    driver.press(Event::Decimal);
    driver.press(Event::Decimal);
    assert_eq!(driver.display(), "53.");
    driver.clear();
}

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("2 + 3 =", "5"),
        ("1 0 - 4 =", "6"),
        ("6 × 7 =", "42"),
        ("2 0 ÷ 4 =", "5"),
    ];
    for (keys, expected) in cases {
        driver.clear();
        press(driver, keys);
        assert_eq!(driver.display(), expected, "keys: {keys}");
    }
    driver.clear();
}

/// Verifies strict left-to-right chaining
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press(driver, "2 + 3 ×");
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.preview(), "5 ×");
    press(driver, "4 =");
    assert_eq!(driver.display(), "20");
    assert_eq!(driver.preview(), "");
    driver.clear();
}

/// Verifies that division by zero shows 0
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press(driver, "5 ÷ 0 =");
    assert_eq!(driver.display(), "0");
    driver.clear();
}

/// Verifies delete and clear
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press(driver, "1 2 3 ⌫");
    assert_eq!(driver.display(), "12");

    press(driver, "+ 1 = ⌫");
    assert_eq!(driver.display(), "0");

    press(driver, "9 + 9 AC");
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.preview(), "");
}

/// Verifies percent and sign toggle
pub fn verify_unary<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press(driver, "8 × 5 %");
    assert_eq!(driver.display(), "0.05");
    assert_eq!(driver.preview(), "8 ×");
    press(driver, "± =");
    assert_eq!(driver.display(), "-0.4");
    driver.clear();
}

/// Complete verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_entry(driver);
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_editing(driver);
    verify_unary(driver);
}
