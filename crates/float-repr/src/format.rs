// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::bits::ieee754_bits;
use crate::words::{invariant_string, to_words};
use std::fmt;
use strum::EnumString;

/// Format selected by a short specifier, e.g. `"B".parse::<FloatFormat>()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
pub enum FloatFormat {
    /// Locale independent decimal form.
    #[default]
    #[strum(serialize = "G", serialize = "")]
    Plain,
    /// IEEE-754 bit string.
    #[strum(serialize = "B")]
    Binary,
    /// Spelled-out digits.
    #[strum(serialize = "W")]
    Words,
}

pub fn format_f64(x: f64, format: FloatFormat) -> String {
    match format {
        FloatFormat::Plain => invariant_string(x),
        FloatFormat::Binary => ieee754_bits(x),
        FloatFormat::Words => to_words(x),
    }
}

/// Displays a value in the given [`FloatFormat`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Formatted {
    pub value: f64,
    pub format: FloatFormat,
}

impl Formatted {
    pub fn new(value: f64, format: FloatFormat) -> Self {
        Self { value, format }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_f64(self.value, self.format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_specifier() {
        assert_eq!(FloatFormat::from_str("B").unwrap(), FloatFormat::Binary);
        assert_eq!(FloatFormat::from_str("W").unwrap(), FloatFormat::Words);
        assert_eq!(FloatFormat::from_str("G").unwrap(), FloatFormat::Plain);
        assert_eq!(FloatFormat::from_str("").unwrap(), FloatFormat::Plain);
        assert!(FloatFormat::from_str("C").is_err());
    }

    #[test]
    fn test_format_f64() {
        assert_eq!(format_f64(255.255, FloatFormat::Plain), "255.255");
        assert_eq!(
            format_f64(255.255, FloatFormat::Binary),
            "0100000001101111111010000010100011110101110000101000111101011100"
        );
        assert_eq!(
            format_f64(255.255, FloatFormat::Words),
            "two five five point two five five"
        );
    }

    #[test]
    fn test_formatted_display() {
        let formatted = Formatted::new(-0.0, FloatFormat::Binary);
        assert_eq!(
            format!("value: {formatted}"),
            "value: 1000000000000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(Formatted::new(0.375, FloatFormat::default()).to_string(), "0.375");
    }
}
