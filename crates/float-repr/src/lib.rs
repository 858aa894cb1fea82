// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Textual representations of `f64` values.
//!
//! - [`ieee754_bits`]: the 64-bit IEEE-754 pattern as a string of `0`/`1`,
//!   most significant bit first.
//! - [`to_words`]: the printed decimal form spelled out one word per
//!   character (`-23.809` → `minus two three point eight zero nine`).
//! - [`format_f64`]: picks one of the above from a [`FloatFormat`].

mod bits;
mod errors;
mod format;
mod words;

pub use bits::*;
pub use errors::FloatReprError;
pub use format::*;
pub use words::*;
