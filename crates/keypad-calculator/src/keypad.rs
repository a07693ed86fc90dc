//! Keypad layout shared by every front-end
//!
//! Each button maps to exactly one engine [`Event`]. Views only decide how
//! to draw the grid and how a click or key reaches a button.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Event, Operator};

/// Visual style group of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonVariant {
    /// Digits, decimal point, delete
    Default,
    /// Binary operators
    Operator,
    /// AC, ±, %
    Action,
    /// The equals key
    Equals,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const DIGIT_IDS: [&str; 10] = [
    "btn-0", "btn-1", "btn-2", "btn-3", "btn-4", "btn-5", "btn-6", "btn-7", "btn-8", "btn-9",
];

impl Event {
    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Event::Digit(d) => DIGIT_LABELS.get(usize::from(*d)).copied().unwrap_or("?"),
            Event::Decimal => ".",
            Event::Operator(op) => op.symbol(),
            Event::Equals => "=",
            Event::Clear => "AC",
            Event::Delete => "⌫",
            Event::Percent => "%",
            Event::ToggleSign => "±",
        }
    }

    /// Stable element id for the button
    #[must_use]
    pub fn element_id(&self) -> &'static str {
        match self {
            Event::Digit(d) => DIGIT_IDS.get(usize::from(*d)).copied().unwrap_or("btn-digit"),
            Event::Decimal => "btn-decimal",
            Event::Operator(Operator::Add) => "btn-plus",
            Event::Operator(Operator::Subtract) => "btn-minus",
            Event::Operator(Operator::Multiply) => "btn-times",
            Event::Operator(Operator::Divide) => "btn-divide",
            Event::Equals => "btn-equals",
            Event::Clear => "btn-clear",
            Event::Delete => "btn-delete",
            Event::Percent => "btn-percent",
            Event::ToggleSign => "btn-toggle-sign",
        }
    }

    /// Style group of the button
    #[must_use]
    pub fn variant(&self) -> ButtonVariant {
        match self {
            Event::Digit(_) | Event::Decimal | Event::Delete => ButtonVariant::Default,
            Event::Operator(_) => ButtonVariant::Operator,
            Event::Clear | Event::Percent | Event::ToggleSign => ButtonVariant::Action,
            Event::Equals => ButtonVariant::Equals,
        }
    }

    /// Parses a button label.
    ///
    /// Accepts the keypad labels plus ASCII spellings: `*`, `x`, `/`, `C`,
    /// `del`, `+/-`.
    pub fn from_label(label: &str) -> CalcResult<Self> {
        if let Some(op) = Operator::from_symbol(label) {
            return Ok(Event::Operator(op));
        }
        if let Some(d) = DIGIT_LABELS.iter().position(|l| *l == label) {
            return Ok(Event::Digit(d as u8));
        }
        match label.to_ascii_lowercase().as_str() {
            "." | "," => Ok(Event::Decimal),
            "=" => Ok(Event::Equals),
            "ac" | "c" | "clear" => Ok(Event::Clear),
            "⌫" | "del" | "delete" | "backspace" => Ok(Event::Delete),
            "%" => Ok(Event::Percent),
            "±" | "+/-" | "neg" => Ok(Event::ToggleSign),
            _ => Err(CalcError::unknown_key(label)),
        }
    }

    /// Maps a typed character to a button, if any
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| Event::Digit(d as u8)),
            '.' | ',' => Some(Event::Decimal),
            '+' => Some(Event::Operator(Operator::Add)),
            '-' => Some(Event::Operator(Operator::Subtract)),
            '*' | 'x' | '×' => Some(Event::Operator(Operator::Multiply)),
            '/' | '÷' => Some(Event::Operator(Operator::Divide)),
            '%' => Some(Event::Percent),
            '=' => Some(Event::Equals),
            'c' | 'C' => Some(Event::Clear),
            'n' | '±' => Some(Event::ToggleSign),
            _ => None,
        }
    }
}

/// Parses a whitespace-separated sequence of button labels
pub fn parse_key_sequence<'a, I>(labels: I) -> CalcResult<Vec<Event>>
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(Event::from_label)
        .collect()
}

/// A single keypad button definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The event this button sends
    pub action: Event,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: Event, row: usize, col: usize) -> Self {
        Self { action, row, col }
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.action.label()
    }

    /// Stable element id
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.action.element_id()
    }

    /// Style group
    #[must_use]
    pub fn variant(&self) -> ButtonVariant {
        self.action.variant()
    }
}

/// The fixed 4×5 keypad
/// ```text
/// [ AC ] [ ± ] [ % ] [ ÷ ]
/// [ 7  ] [ 8 ] [ 9 ] [ × ]
/// [ 4  ] [ 5 ] [ 6 ] [ - ]
/// [ 1  ] [ 2 ] [ 3 ] [ + ]
/// [ .  ] [ 0 ] [ ⌫ ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButtonDef>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of grid rows
    pub const ROWS: usize = 5;
    /// Number of grid columns
    pub const COLS: usize = 4;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let layout: [[Event; Self::COLS]; Self::ROWS] = [
            [
                Event::Clear,
                Event::ToggleSign,
                Event::Percent,
                Event::Operator(Operator::Divide),
            ],
            [
                Event::Digit(7),
                Event::Digit(8),
                Event::Digit(9),
                Event::Operator(Operator::Multiply),
            ],
            [
                Event::Digit(4),
                Event::Digit(5),
                Event::Digit(6),
                Event::Operator(Operator::Subtract),
            ],
            [
                Event::Digit(1),
                Event::Digit(2),
                Event::Digit(3),
                Event::Operator(Operator::Add),
            ],
            [Event::Decimal, Event::Digit(0), Event::Delete, Event::Equals],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButtonDef::new(*action, row, col))
            })
            .collect();

        Self {
            buttons,
            cols: Self::COLS,
            rows: Self::ROWS,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButtonDef> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    /// Finds the index of the button that sends `action`
    #[must_use]
    pub fn position_of(&self, action: Event) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Resolves a click on an element id to its event
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Event> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Labels and ids =====

    #[test]
    fn test_digit_labels() {
        for d in 0..=9u8 {
            assert_eq!(Event::Digit(d).label(), d.to_string());
            assert_eq!(Event::Digit(d).element_id(), format!("btn-{d}"));
        }
    }

    #[test]
    fn test_out_of_range_digit_label() {
        assert_eq!(Event::Digit(42).label(), "?");
        assert_eq!(Event::Digit(42).element_id(), "btn-digit");
    }

    #[test]
    fn test_special_labels() {
        assert_eq!(Event::Decimal.label(), ".");
        assert_eq!(Event::Equals.label(), "=");
        assert_eq!(Event::Clear.label(), "AC");
        assert_eq!(Event::Delete.label(), "⌫");
        assert_eq!(Event::Percent.label(), "%");
        assert_eq!(Event::ToggleSign.label(), "±");
        assert_eq!(Event::Operator(Operator::Divide).label(), "÷");
    }

    #[test]
    fn test_operator_ids() {
        assert_eq!(Event::Operator(Operator::Add).element_id(), "btn-plus");
        assert_eq!(Event::Operator(Operator::Subtract).element_id(), "btn-minus");
        assert_eq!(Event::Operator(Operator::Multiply).element_id(), "btn-times");
        assert_eq!(Event::Operator(Operator::Divide).element_id(), "btn-divide");
    }

    #[test]
    fn test_variants() {
        assert_eq!(Event::Digit(3).variant(), ButtonVariant::Default);
        assert_eq!(Event::Delete.variant(), ButtonVariant::Default);
        assert_eq!(Event::Operator(Operator::Add).variant(), ButtonVariant::Operator);
        assert_eq!(Event::ToggleSign.variant(), ButtonVariant::Action);
        assert_eq!(Event::Equals.variant(), ButtonVariant::Equals);
    }

    // ===== Label parsing =====

    #[test]
    fn test_from_label_roundtrips_every_button() {
        let keypad = Keypad::new();
        for btn in keypad.buttons() {
            assert_eq!(Event::from_label(btn.label()).unwrap(), btn.action);
        }
    }

    #[test]
    fn test_from_label_aliases() {
        assert_eq!(Event::from_label("*").unwrap(), Event::Operator(Operator::Multiply));
        assert_eq!(Event::from_label("/").unwrap(), Event::Operator(Operator::Divide));
        assert_eq!(Event::from_label("C").unwrap(), Event::Clear);
        assert_eq!(Event::from_label("DEL").unwrap(), Event::Delete);
        assert_eq!(Event::from_label("+/-").unwrap(), Event::ToggleSign);
        assert_eq!(Event::from_label(",").unwrap(), Event::Decimal);
    }

    #[test]
    fn test_from_label_unknown() {
        let err = Event::from_label("sqrt").unwrap_err();
        assert!(matches!(err, CalcError::UnknownKey { ref label } if label == "sqrt"));
        assert!(Event::from_label("12").is_err());
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Event::from_char('7'), Some(Event::Digit(7)));
        assert_eq!(Event::from_char('x'), Some(Event::Operator(Operator::Multiply)));
        assert_eq!(Event::from_char('÷'), Some(Event::Operator(Operator::Divide)));
        assert_eq!(Event::from_char('n'), Some(Event::ToggleSign));
        assert_eq!(Event::from_char('q'), None);
    }

    #[test]
    fn test_parse_key_sequence() {
        let events = parse_key_sequence(["2 + 3", "× 4 ="]).unwrap();
        assert_eq!(
            events,
            vec![
                Event::Digit(2),
                Event::Operator(Operator::Add),
                Event::Digit(3),
                Event::Operator(Operator::Multiply),
                Event::Digit(4),
                Event::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_key_sequence_stops_on_unknown() {
        assert!(parse_key_sequence(["1", "^", "2"]).is_err());
    }

    // ===== Keypad grid =====

    #[test]
    fn test_keypad_new() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_default() {
        assert_eq!(Keypad::default().button_count(), 20);
    }

    #[test]
    fn test_keypad_corners() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().action, Event::Clear);
        assert_eq!(
            keypad.get_button_at(0, 3).unwrap().action,
            Event::Operator(Operator::Divide)
        );
        assert_eq!(keypad.get_button_at(4, 0).unwrap().action, Event::Decimal);
        assert_eq!(keypad.get_button_at(4, 3).unwrap().action, Event::Equals);
    }

    #[test]
    fn test_keypad_positions_match_grid() {
        let keypad = Keypad::new();
        for (i, btn) in keypad.buttons().iter().enumerate() {
            assert_eq!(i, btn.row * 4 + btn.col);
        }
    }

    #[test]
    fn test_get_button_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button(20).is_none());
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_find_and_click_by_id() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-7"), Some(Event::Digit(7)));
        assert_eq!(keypad.handle_click("btn-toggle-sign"), Some(Event::ToggleSign));
        assert_eq!(keypad.handle_click("btn-sqrt"), None);
    }

    #[test]
    fn test_position_of() {
        let keypad = Keypad::new();
        assert_eq!(keypad.position_of(Event::Clear), Some(0));
        assert_eq!(keypad.position_of(Event::Equals), Some(19));
        assert_eq!(keypad.position_of(Event::Digit(11)), None);
    }
}
