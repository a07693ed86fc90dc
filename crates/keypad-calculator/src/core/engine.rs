//! Calculator engine: a pure `(state, event) -> state` transition
//!
//! The whole calculator is four fields. Views hold a [`CalcState`], feed it
//! [`Event`]s and re-render whatever comes back.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::number::{format_number, parse_display};
use super::operations::{calculate, Operator};

/// A single keypad press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Choose a binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything (AC)
    Clear,
    /// Drop the last character (backspace)
    Delete,
    /// Divide the display by 100
    Percent,
    /// Negate the display (±)
    ToggleSign,
}

/// Immutable calculator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcState {
    display: String,
    pending_operand: Option<String>,
    pending_operator: Option<Operator>,
    overwrite_next: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    /// Display shown on a fresh calculator
    pub const INITIAL_DISPLAY: &'static str = "0";

    /// Creates the initial state: display `"0"`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: Self::INITIAL_DISPLAY.to_string(),
            pending_operand: None,
            pending_operator: None,
            overwrite_next: false,
        }
    }

    /// Current display string
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Operand captured when an operator was pressed
    #[must_use]
    pub fn pending_operand(&self) -> Option<&str> {
        self.pending_operand.as_deref()
    }

    /// Operator awaiting its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit starts a fresh number
    #[must_use]
    pub fn overwrite_next(&self) -> bool {
        self.overwrite_next
    }

    /// True while an operator is waiting for its second operand
    #[must_use]
    pub fn is_operator_pending(&self) -> bool {
        self.pending_operator.is_some()
    }

    /// Preview row: pending operand and operator, e.g. `"12 ×"`
    #[must_use]
    pub fn preview(&self) -> String {
        match (&self.pending_operand, self.pending_operator) {
            (Some(operand), Some(op)) => format!("{operand} {op}"),
            (Some(operand), None) => operand.clone(),
            (None, Some(op)) => op.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Applies one event and returns the next state
    #[must_use]
    pub fn apply(&self, event: Event) -> Self {
        let next = match event {
            Event::Digit(d) => self.digit(d),
            Event::Decimal => self.decimal(),
            Event::Operator(op) => self.operator(op),
            Event::Equals => self.equals(),
            Event::Clear => Self::new(),
            Event::Delete => self.delete(),
            Event::Percent => self.map_display(|value| value / 100.0),
            Event::ToggleSign => self.map_display(|value| -value),
        };
        debug!(
            ?event,
            display = %next.display,
            preview = %next.preview(),
            "applied keypad event"
        );
        next
    }

    /// Applies events in order
    #[must_use]
    pub fn apply_all<I>(&self, events: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        events
            .into_iter()
            .fold(self.clone(), |state, event| state.apply(event))
    }

    fn digit(&self, d: u8) -> Self {
        let Some(ch) = char::from_digit(u32::from(d), 10) else {
            warn!(digit = d, "ignoring out-of-range digit");
            return self.clone();
        };

        let mut next = self.clone();
        if self.overwrite_next || self.display == Self::INITIAL_DISPLAY {
            next.display = ch.to_string();
            next.overwrite_next = false;
        } else {
            next.display.push(ch);
        }
        next
    }

    fn decimal(&self) -> Self {
        let mut next = self.clone();
        if self.overwrite_next {
            next.display = "0.".to_string();
            next.overwrite_next = false;
        } else if !self.display.contains('.') {
            next.display.push('.');
        }
        next
    }

    fn operator(&self, op: Operator) -> Self {
        let mut next = self.clone();
        match (&self.pending_operand, self.pending_operator) {
            (None, _) => next.pending_operand = Some(self.display.clone()),
            (Some(operand), Some(pending)) => {
                // Left-to-right chaining: fold the pending operation first
                let result = self.evaluate(operand, pending);
                next.pending_operand = Some(result.clone());
                next.display = result;
            }
            (Some(_), None) => {}
        }
        next.pending_operator = Some(op);
        next.overwrite_next = true;
        next
    }

    fn equals(&self) -> Self {
        match (&self.pending_operand, self.pending_operator) {
            (Some(operand), Some(pending)) => Self {
                display: self.evaluate(operand, pending),
                pending_operand: None,
                pending_operator: None,
                overwrite_next: true,
            },
            _ => self.clone(),
        }
    }

    fn delete(&self) -> Self {
        let mut next = self.clone();
        if self.overwrite_next {
            next.display = Self::INITIAL_DISPLAY.to_string();
            next.overwrite_next = false;
            return next;
        }
        next.display.pop();
        if next.display.is_empty() {
            next.display = Self::INITIAL_DISPLAY.to_string();
        }
        next
    }

    fn evaluate(&self, operand: &str, op: Operator) -> String {
        format_number(calculate(
            parse_display(operand),
            parse_display(&self.display),
            op,
        ))
    }

    fn map_display(&self, f: impl FnOnce(f64) -> f64) -> Self {
        Self {
            display: format_number(f(parse_display(&self.display))),
            ..self.clone()
        }
    }
}

/// Free-function form of [`CalcState::apply`]
#[must_use]
pub fn transition(state: &CalcState, event: Event) -> CalcState {
    state.apply(event)
}
