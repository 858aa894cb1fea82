// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Spelling out the printed form of an `f64`.

use crate::errors::FloatReprError;
use phf::phf_map;

pub const NAN_TOKEN: &str = "NaN";
pub const NEG_INFINITY_TOKEN: &str = "-Infinity";
pub const INFINITY_TOKEN: &str = "Infinity";

/// Decimal exponents in `(SCIENTIFIC_BELOW, SCIENTIFIC_FROM)` print
/// positionally, everything else in `dE±XX` form.
const SCIENTIFIC_BELOW: i32 = -5;
const SCIENTIFIC_FROM: i32 = 15;

static WORDS: phf::Map<char, &'static str> = phf_map! {
    '0' => "zero",
    '1' => "one",
    '2' => "two",
    '3' => "three",
    '4' => "four",
    '5' => "five",
    '6' => "six",
    '7' => "seven",
    '8' => "eight",
    '9' => "nine",
    '.' => "point",
    'E' => "exponenta",
    '-' => "minus",
    '+' => "plus",
};

/// Renders `x` with the shortest digits that round-trip, independent of
/// locale.
///
/// Numbers whose decimal exponent is at most -5 or at least 15 use
/// scientific form with a signed, zero-padded two digit exponent
/// (`2E-15`, `1E-05`, `2E+18`). NaN and the infinities render as
/// [`NAN_TOKEN`], [`NEG_INFINITY_TOKEN`] and [`INFINITY_TOKEN`].
pub fn invariant_string(x: f64) -> String {
    if x.is_nan() {
        return NAN_TOKEN.to_string();
    }
    if x.is_infinite() {
        return if x < 0.0 {
            NEG_INFINITY_TOKEN
        } else {
            INFINITY_TOKEN
        }
        .to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-2.3809e1".
    let scientific = format!("{x:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if exponent <= SCIENTIFIC_BELOW || exponent >= SCIENTIFIC_FROM {
        let (lead, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{sign}{lead}{fraction}E{exponent_sign}{:02}",
            exponent.unsigned_abs()
        )
    } else if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            format!("{sign}{digits}{}", "0".repeat(int_len - digits.len()))
        } else {
            let (int_part, fraction) = digits.split_at(int_len);
            format!("{sign}{int_part}.{fraction}")
        }
    } else {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        format!("{sign}0.{zeros}{digits}")
    }
}

/// Spells out the printed form of `x`, one word per character, separated
/// by single spaces.
///
/// NaN and the infinities are returned as their literal tokens.
pub fn to_words(x: f64) -> String {
    if x.is_nan() || x.is_infinite() {
        return invariant_string(x);
    }

    invariant_string(x)
        .chars()
        .filter_map(|c| WORDS.get(&c).copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Applies [`to_words`] to every value.
///
/// # Errors
///
/// Returns `FloatReprError::InvalidArgument` if `values` is empty.
pub fn to_words_all(values: &[f64]) -> Result<Vec<String>, FloatReprError> {
    if values.is_empty() {
        return Err(FloatReprError::InvalidArgument {
            message: "values cannot be empty".to_string(),
        });
    }
    Ok(values.iter().map(|x| to_words(*x)).collect())
}

/// Like [`to_words_all`], also rejecting absent input.
pub fn to_words_all_nullable(values: Option<&[f64]>) -> Result<Vec<String>, FloatReprError> {
    let values = values.ok_or_else(|| FloatReprError::InvalidArgument {
        message: "values cannot be null".to_string(),
    })?;
    to_words_all(values)
}
