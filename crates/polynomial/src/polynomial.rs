// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

pub use crate::errors::PolynomialError;

use crate::config::{Accuracy, PolynomialConfig};
use crate::utils::{
    canonical_bits, coefficients_approx_eq, convolve, trim_leading_negligible, zip_by_index,
};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial with real coefficients, stored in descending order of degree.
///
/// The polynomial is represented as:
/// `a_n * x^n + a_{n-1} * x^{n-1} + ... + a_1 * x + a_0`
///
/// There is always at least one coefficient. Leading coefficients below the
/// accuracy threshold are dropped on construction, but the last remaining
/// coefficient is kept even if it is itself negligible.
///
/// Equality is tolerance based: two polynomials are equal when they have the
/// same degree and every pair of coefficients differs by strictly less than
/// the accuracy. This relation is not transitive.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawPolynomial", into = "RawPolynomial")
)]
pub struct Polynomial {
    /// Coefficients in descending order (highest degree first).
    coefficients: Vec<f64>,
    accuracy: Accuracy,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawPolynomial {
    coefficients: Vec<f64>,
    #[serde(default)]
    accuracy: Accuracy,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPolynomial> for Polynomial {
    type Error = PolynomialError;

    fn try_from(raw: RawPolynomial) -> Result<Self, Self::Error> {
        Polynomial::from_vec(raw.coefficients, raw.accuracy)
    }
}

#[cfg(feature = "serde")]
impl From<Polynomial> for RawPolynomial {
    fn from(poly: Polynomial) -> Self {
        RawPolynomial {
            coefficients: poly.coefficients,
            accuracy: poly.accuracy,
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, coeff) in self.coefficients.iter().enumerate() {
            let degree = self.coefficients.len() - 1 - i;

            if *coeff == 0.0 {
                continue;
            }

            if first {
                if *coeff < 0.0 {
                    write!(f, "-")?;
                }
            } else if *coeff < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            write!(f, "{}", coeff.abs())?;

            match degree {
                0 => {}
                1 => write!(f, "*x")?,
                _ => write!(f, "*x^{degree}")?,
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || coefficients_approx_eq(
                &self.coefficients,
                &other.coefficients,
                self.accuracy.stricter(other.accuracy),
            )
    }
}

/// Hashes the exact coefficients.
///
/// Polynomials with identical coefficients hash identically. Polynomials that
/// are only equal within the tolerance may hash differently.
impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coefficients.len().hash(state);
        for coeff in &self.coefficients {
            canonical_bits(*coeff).hash(state);
        }
    }
}

impl Polynomial {
    /// Creates a new polynomial from coefficients in descending order of
    /// degree, using the default accuracy.
    ///
    /// The slice is copied; later changes to it do not affect the polynomial.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidArgument` if `coefficients` is empty.
    pub fn new(coefficients: &[f64]) -> Result<Self, PolynomialError> {
        Self::with_accuracy(coefficients, Accuracy::default())
    }

    /// Creates a new polynomial with an explicit accuracy threshold.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Coefficients in descending order of degree.
    /// * `accuracy` - Threshold used for trimming and equality.
    pub fn with_accuracy(
        coefficients: &[f64],
        accuracy: Accuracy,
    ) -> Result<Self, PolynomialError> {
        Self::from_vec(coefficients.to_vec(), accuracy)
    }

    /// Creates a new polynomial using the accuracy from `config`.
    pub fn with_config(
        coefficients: &[f64],
        config: &PolynomialConfig,
    ) -> Result<Self, PolynomialError> {
        Self::with_accuracy(coefficients, config.accuracy())
    }

    /// Creates a polynomial from coefficients that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidArgument` if `coefficients` is `None`
    /// or empty.
    pub fn from_nullable(coefficients: Option<&[f64]>) -> Result<Self, PolynomialError> {
        let coefficients = coefficients
            .ok_or_else(|| PolynomialError::invalid_argument("coefficients cannot be null"))?;
        Self::new(coefficients)
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: f64) -> Self {
        Self {
            coefficients: vec![constant],
            accuracy: Accuracy::default(),
        }
    }

    /// Creates a polynomial from coefficients in ascending order of degree
    /// (constant term first).
    pub fn from_ascending_coefficients(
        ascending_coefficients: &[f64],
    ) -> Result<Self, PolynomialError> {
        let mut coefficients = ascending_coefficients.to_vec();
        coefficients.reverse();
        Self::from_vec(coefficients, Accuracy::default())
    }

    fn from_vec(coefficients: Vec<f64>, accuracy: Accuracy) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            return Err(PolynomialError::invalid_argument(
                "coefficients cannot be empty",
            ));
        }
        Ok(Self::normalized(coefficients, accuracy))
    }

    /// Builds a polynomial from a non-empty buffer, trimming leading
    /// negligible coefficients.
    fn normalized(mut coefficients: Vec<f64>, accuracy: Accuracy) -> Self {
        debug_assert!(!coefficients.is_empty());
        let removed = trim_leading_negligible(&mut coefficients, accuracy);
        if removed > 0 {
            trace!(
                removed,
                degree = coefficients.len() - 1,
                "Trimmed leading negligible coefficients"
            );
        }
        Self {
            coefficients,
            accuracy,
        }
    }

    /// Returns the coefficients of the polynomial, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Converts the polynomial to ascending order coefficient format.
    pub fn to_ascending_coefficients(&self) -> Vec<f64> {
        let mut coefficients = self.coefficients.clone();
        coefficients.reverse();
        coefficients
    }

    /// Returns the accuracy threshold carried by this polynomial.
    pub fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    /// Returns the number of coefficients. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns the degree of the polynomial, the number of coefficients
    /// minus one.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the coefficient at `index`, where index 0 is the leading term.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::IndexOutOfRange` if `index` is negative or
    /// not less than [`len`](Self::len).
    pub fn get(&self, index: isize) -> Result<f64, PolynomialError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.coefficients.get(i))
            .copied()
            .ok_or(PolynomialError::IndexOutOfRange {
                index,
                len: self.coefficients.len(),
            })
    }

    /// Checks if every coefficient is below the accuracy threshold.
    pub fn is_zero(&self) -> bool {
        self.coefficients
            .iter()
            .all(|c| self.accuracy.is_negligible(*c))
    }

    /// Returns the leading coefficient of the polynomial.
    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[0]
    }

    /// Adds two polynomials together.
    ///
    /// Coefficients are paired by their position in each coefficient list,
    /// not by degree: `[a, b, c] + [d]` is `[a + d, b, c]`. The result has as
    /// many coefficients as the longer operand before trimming.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    pub fn add(&self, other: &Self) -> Self {
        let sum = zip_by_index(&self.coefficients, &other.coefficients, |a, b| a + b);
        Self::normalized(sum, self.accuracy.stricter(other.accuracy))
    }

    /// Subtracts `other` from `self`, pairing coefficients by position the
    /// same way as [`add`](Self::add).
    pub fn subtract(&self, other: &Self) -> Self {
        let difference = zip_by_index(&self.coefficients, &other.coefficients, |a, b| a - b);
        Self::normalized(difference, self.accuracy.stricter(other.accuracy))
    }

    /// Multiplies two polynomials by discrete convolution of their
    /// coefficients.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial with `self.len() + other.len() - 1` coefficients
    /// before trimming.
    pub fn multiply(&self, other: &Self) -> Self {
        let product = convolve(&self.coefficients, &other.coefficients);
        Self::normalized(product, self.accuracy.stricter(other.accuracy))
    }

    /// Adds `value` to every coefficient, not only the constant term.
    pub fn add_scalar(&self, value: f64) -> Self {
        self.map_coefficients(|c| c + value)
    }

    /// Subtracts `value` from every coefficient, not only the constant term.
    pub fn subtract_scalar(&self, value: f64) -> Self {
        self.map_coefficients(|c| c - value)
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    pub fn scalar_mul(&self, scalar: f64) -> Self {
        self.map_coefficients(|c| c * scalar)
    }

    /// Negates all coefficients of the polynomial.
    pub fn neg(&self) -> Self {
        self.map_coefficients(|c| -c)
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, coeff| acc * x + coeff)
    }

    fn map_coefficients(&self, op: impl Fn(f64) -> f64) -> Self {
        Self::normalized(
            self.coefficients.iter().map(|c| op(*c)).collect(),
            self.accuracy,
        )
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = PolynomialError;

    fn try_from(coefficients: Vec<f64>) -> Result<Self, Self::Error> {
        Polynomial::from_vec(coefficients, Accuracy::default())
    }
}

impl TryFrom<&[f64]> for Polynomial {
    type Error = PolynomialError;

    fn try_from(coefficients: &[f64]) -> Result<Self, Self::Error> {
        Polynomial::new(coefficients)
    }
}

/// Panics if `index` is out of range, like slice indexing. Use
/// [`Polynomial::get`] for a checked lookup.
impl std::ops::Index<usize> for Polynomial {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coefficients[index]
    }
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $op_fn:ident, $method:ident, $scalar_method:ident) => {
        impl std::ops::$op_trait<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $op_fn(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$method(self, rhs)
            }
        }

        impl std::ops::$op_trait for Polynomial {
            type Output = Polynomial;

            fn $op_fn(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$method(&self, &rhs)
            }
        }

        impl std::ops::$op_trait<f64> for &Polynomial {
            type Output = Polynomial;

            fn $op_fn(self, rhs: f64) -> Polynomial {
                Polynomial::$scalar_method(self, rhs)
            }
        }

        impl std::ops::$op_trait<f64> for Polynomial {
            type Output = Polynomial;

            fn $op_fn(self, rhs: f64) -> Polynomial {
                Polynomial::$scalar_method(&self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add, add_scalar);
impl_binary_op!(Sub, sub, subtract, subtract_scalar);
impl_binary_op!(Mul, mul, multiply, scalar_mul);

// Scalar on the left commutes for addition and multiplication.
macro_rules! impl_scalar_lhs_op {
    ($op_trait:ident, $op_fn:ident, $scalar_method:ident) => {
        impl std::ops::$op_trait<&Polynomial> for f64 {
            type Output = Polynomial;

            fn $op_fn(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$scalar_method(rhs, self)
            }
        }

        impl std::ops::$op_trait<Polynomial> for f64 {
            type Output = Polynomial;

            fn $op_fn(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$scalar_method(&rhs, self)
            }
        }
    };
}

impl_scalar_lhs_op!(Add, add, add_scalar);
impl_scalar_lhs_op!(Mul, mul, scalar_mul);

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}
