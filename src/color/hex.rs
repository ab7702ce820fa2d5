//! Hex color strings as typed into the control surface.

use core::fmt;

use super::{DEFAULT_COLOR, Rgb};

/// Error returned by [`parse_hex_color`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input is not exactly six digits after the optional `#`
    InvalidLength(usize),
    /// Input contains a character that is not a hex digit
    InvalidDigit(char),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected 6 hex digits, got {len} characters")
            }
            Self::InvalidDigit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl core::error::Error for ColorParseError {}

/// Parse a `#rrggbb` or `rrggbb` string (case-insensitive)
pub fn parse_hex_color(input: &str) -> Result<Rgb, ColorParseError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    let mut value: u32 = 0;
    let mut len = 0;
    for c in digits.chars() {
        len += 1;
        let digit = c.to_digit(16).ok_or(ColorParseError::InvalidDigit(c))?;
        value = (value << 4) | digit;
        if len > 6 {
            return Err(ColorParseError::InvalidLength(digits.chars().count()));
        }
    }
    if len != 6 {
        return Err(ColorParseError::InvalidLength(len));
    }

    Ok(super::rgb_from_u32(value))
}

/// Parse a color string, falling back to [`DEFAULT_COLOR`] on any error
pub fn color_or_default(input: &str) -> Rgb {
    parse_hex_color(input).unwrap_or(DEFAULT_COLOR)
}
