// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! IEEE-754 binary64 layout.

/// Number of bits in a binary64 value.
pub const F64_BITS: usize = 64;

const EXPONENT_BITS: u32 = 11;
const MANTISSA_BITS: u32 = 52;

/// Returns the IEEE-754 bit pattern of `x` as 64 characters, most
/// significant bit (the sign) first.
///
/// NaN payloads are reported as stored; no canonicalization happens.
pub fn ieee754_bits(x: f64) -> String {
    format!("{:0width$b}", x.to_bits(), width = F64_BITS)
}

/// The three fields of a binary64 value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ieee754Parts {
    pub negative: bool,
    /// Biased exponent, 11 bits.
    pub exponent: u16,
    /// Fraction without the implicit leading bit, 52 bits.
    pub mantissa: u64,
}

impl Ieee754Parts {
    pub fn from_f64(x: f64) -> Self {
        let bits = x.to_bits();
        Self {
            negative: bits >> (F64_BITS as u32 - 1) == 1,
            exponent: ((bits >> MANTISSA_BITS) & ((1 << EXPONENT_BITS) - 1)) as u16,
            mantissa: bits & ((1 << MANTISSA_BITS) - 1),
        }
    }

    pub fn to_f64(self) -> f64 {
        let sign = (self.negative as u64) << (F64_BITS as u32 - 1);
        let exponent = (u64::from(self.exponent) & ((1 << EXPONENT_BITS) - 1)) << MANTISSA_BITS;
        let mantissa = self.mantissa & ((1 << MANTISSA_BITS) - 1);
        f64::from_bits(sign | exponent | mantissa)
    }
}
