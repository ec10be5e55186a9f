//! Credit amount - a float parsed the lenient way the host forum parses numeric text
//!
//! Host-compatible conversion rules:
//! - leading whitespace is skipped
//! - the longest prefix shaped like `[+-]digits[.digits][e[+-]digits]` is used
//! - underscores between digits are ignored (`1_000` is 1000)
//! - anything without a leading number is 0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount of credits supplied by an operator for a sweep
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from an already numeric value
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Parse an amount from text, degrading to zero instead of failing
    pub fn from_text(text: &str) -> Self {
        Self(parse_lenient_f64(text))
    }

    /// Get the numeric value
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Convert text to a float, returning 0.0 when no numeric prefix exists
pub fn parse_lenient_f64(input: &str) -> f64 {
    let bytes = input.trim_start().as_bytes();
    let mut number = String::with_capacity(bytes.len());
    let mut pos = 0;

    if let Some(&sign @ (b'+' | b'-')) = bytes.first() {
        number.push(char::from(sign));
        pos = 1;
    }

    let int_digits = take_digits(bytes, &mut pos, &mut number);

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) {
        number.push('.');
        pos += 1;
        frac_digits = take_digits(bytes, &mut pos, &mut number);
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        let mut exponent = String::from("e");
        if let Some(&sign @ (b'+' | b'-')) = bytes.get(exp_pos) {
            exponent.push(char::from(sign));
            exp_pos += 1;
        }
        if take_digits(bytes, &mut exp_pos, &mut exponent) > 0 {
            number.push_str(&exponent);
        }
    }

    number.parse().unwrap_or(0.0)
}

/// Copy consecutive digits into `out`, skipping single underscores between digits
fn take_digits(bytes: &[u8], pos: &mut usize, out: &mut String) -> usize {
    let mut count = 0;
    while let Some(&c) = bytes.get(*pos) {
        if c.is_ascii_digit() {
            out.push(char::from(c));
            count += 1;
            *pos += 1;
        } else if c == b'_' && count > 0 && bytes.get(*pos + 1).is_some_and(u8::is_ascii_digit) {
            *pos += 1;
        } else {
            break;
        }
    }
    count
}
