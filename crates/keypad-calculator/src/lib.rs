//! Keypad Calculator
//!
//! A four-function calculator modelled as a pure state machine: every
//! button press maps an immutable [`CalcState`] to the next one.
//!
//! - [`core`]: the engine, operators and display number conversion
//! - [`keypad`]: the 5x4 button grid, labels and element ids
//! - [`driver`]: one behavioural suite for every front-end
//! - `tui`: ratatui front-end with mouse support (feature `tui`)
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let state = CalcState::new().apply_all([
//!     Event::Digit(1),
//!     Event::Digit(2),
//!     Event::Operator(Operator::Multiply),
//! ]);
//! assert_eq!(state.preview(), "12 ×");
//!
//! let state = state.apply(Event::Digit(3)).apply(Event::Equals);
//! assert_eq!(state.display(), "36");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

pub use crate::core::{CalcError, CalcResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AppConfig, Verbosity};
    pub use crate::core::{
        calculate, format_number, parse_display, transition, CalcError, CalcResult, CalcState,
        Event, Operator,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::keypad::{parse_key_sequence, ButtonVariant, Keypad, KeypadButtonDef};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
