// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions over raw coefficient slices.
//!
//! All slices are in descending order of degree (index 0 is the leading term).

use crate::config::Accuracy;

/// Removes leading coefficients whose magnitude is below `accuracy`.
///
/// At least one coefficient is always kept, even when it is itself
/// negligible.
///
/// # Returns
///
/// The number of coefficients removed.
pub fn trim_leading_negligible(coefficients: &mut Vec<f64>, accuracy: Accuracy) -> usize {
    let removable = coefficients
        .iter()
        .take(coefficients.len().saturating_sub(1))
        .take_while(|c| accuracy.is_negligible(**c))
        .count();
    coefficients.drain(..removable);
    removable
}

/// Combines two coefficient slices position by position.
///
/// The result has the length of the longer slice. Entries are paired by raw
/// index from the start of each slice, not by degree; a missing entry
/// contributes `0.0`.
///
/// # Arguments
///
/// * `lhs` - Left coefficients.
/// * `rhs` - Right coefficients.
/// * `op` - Applied to each `(lhs[i], rhs[i])` pair.
pub fn zip_by_index(lhs: &[f64], rhs: &[f64], op: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    let len = std::cmp::max(lhs.len(), rhs.len());
    (0..len)
        .map(|i| {
            let a = lhs.get(i).copied().unwrap_or(0.0);
            let b = rhs.get(i).copied().unwrap_or(0.0);
            op(a, b)
        })
        .collect()
}

/// Discrete convolution of two coefficient slices.
///
/// `result[i + j] += lhs[i] * rhs[j]` for every pair; the result has
/// `lhs.len() + rhs.len() - 1` entries. Either slice being empty yields an
/// empty result.
pub fn convolve(lhs: &[f64], rhs: &[f64]) -> Vec<f64> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }

    let mut product = vec![0.0; lhs.len() + rhs.len() - 1];
    for (i, a) in lhs.iter().enumerate() {
        for (j, b) in rhs.iter().enumerate() {
            product[i + j] += a * b;
        }
    }
    product
}

/// Checks that two slices have the same length and agree entry by entry
/// within `accuracy`.
pub fn coefficients_approx_eq(lhs: &[f64], rhs: &[f64], accuracy: Accuracy) -> bool {
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .zip(rhs.iter())
            .all(|(a, b)| accuracy.approx_eq(*a, *b))
}

/// Bit pattern used for hashing a coefficient.
///
/// `-0.0` is folded into `0.0` and every NaN maps to the same pattern, so
/// values that compare structurally identical hash identically.
pub fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0.0f64.to_bits()
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}
