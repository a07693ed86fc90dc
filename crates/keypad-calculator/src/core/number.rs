//! Conversion between display strings and operand values
//!
//! Parsing is lenient: the longest numeric prefix wins and anything after
//! it is ignored. Formatting uses the shortest round-trip representation,
//! switching to exponent notation outside `[1e-6, 1e21)`.

use tracing::trace;

/// Magnitude at or above which results are shown in exponent notation
pub const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which non-zero results are shown in exponent notation
pub const EXPONENT_LOWER: f64 = 1e-6;

/// Parses a display string into an operand value.
///
/// Reads the longest prefix of the form `[+-]digits[.digits][e[+-]digits]`
/// (or a signed `Infinity`) after skipping leading whitespace. Returns NaN
/// when no digits can be read.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        trace!(text, "display has no numeric prefix");
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats an operand value for the display.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Also catches -0.0
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}
