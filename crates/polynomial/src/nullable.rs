// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Operations over operands that may be absent.
//!
//! These mirror the methods on [`Polynomial`] for callers that hold
//! `Option<&Polynomial>` values. An absent operand is reported as
//! [`PolynomialError::InvalidArgument`]; equality treats two absent values
//! as equal.

use crate::errors::PolynomialError;
use crate::polynomial::Polynomial;

fn require<'a>(
    operand: Option<&'a Polynomial>,
    name: &str,
) -> Result<&'a Polynomial, PolynomialError> {
    operand.ok_or_else(|| PolynomialError::invalid_argument(format!("{name} cannot be null")))
}

/// Tolerance equality where absent values take part.
///
/// Two absent values are equal; an absent and a present value are not. The
/// same instance is always equal to itself.
pub fn equals(lhs: Option<&Polynomial>, rhs: Option<&Polynomial>) -> bool {
    match (lhs, rhs) {
        (None, None) => true,
        (Some(lhs), Some(rhs)) => std::ptr::eq(lhs, rhs) || lhs == rhs,
        _ => false,
    }
}

pub fn not_equals(lhs: Option<&Polynomial>, rhs: Option<&Polynomial>) -> bool {
    !equals(lhs, rhs)
}

/// See [`Polynomial::add`].
pub fn add(
    lhs: Option<&Polynomial>,
    rhs: Option<&Polynomial>,
) -> Result<Polynomial, PolynomialError> {
    Ok(require(lhs, "lhs")?.add(require(rhs, "rhs")?))
}

/// See [`Polynomial::subtract`].
pub fn subtract(
    lhs: Option<&Polynomial>,
    rhs: Option<&Polynomial>,
) -> Result<Polynomial, PolynomialError> {
    Ok(require(lhs, "lhs")?.subtract(require(rhs, "rhs")?))
}

/// See [`Polynomial::multiply`].
pub fn multiply(
    lhs: Option<&Polynomial>,
    rhs: Option<&Polynomial>,
) -> Result<Polynomial, PolynomialError> {
    Ok(require(lhs, "lhs")?.multiply(require(rhs, "rhs")?))
}

pub fn add_scalar(poly: Option<&Polynomial>, value: f64) -> Result<Polynomial, PolynomialError> {
    Ok(require(poly, "polynomial")?.add_scalar(value))
}

pub fn subtract_scalar(
    poly: Option<&Polynomial>,
    value: f64,
) -> Result<Polynomial, PolynomialError> {
    Ok(require(poly, "polynomial")?.subtract_scalar(value))
}

pub fn scalar_mul(poly: Option<&Polynomial>, scalar: f64) -> Result<Polynomial, PolynomialError> {
    Ok(require(poly, "polynomial")?.scalar_mul(scalar))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coefficients: &[f64]) -> Polynomial {
        Polynomial::new(coefficients).unwrap()
    }

    #[test]
    fn test_equals_with_absent_values() {
        let p = poly(&[0.1, 5.0]);
        assert!(equals(None, None));
        assert!(!equals(Some(&p), None));
        assert!(!equals(None, Some(&p)));
        assert!(equals(Some(&p), Some(&p)));
        assert!(equals(Some(&p), Some(&poly(&[0.1, 5.0]))));
    }

    #[test]
    fn test_not_equals() {
        assert!(not_equals(
            Some(&poly(&[0.121, 21.0, 21.22])),
            Some(&poly(&[-5.0]))
        ));
        assert!(not_equals(
            Some(&poly(&[-0.54, 54.545])),
            Some(&poly(&[0.54, 54.545]))
        ));
        assert!(!not_equals(
            Some(&poly(&[66.21, 1.0, 23.0])),
            Some(&poly(&[66.21, 1.0, 23.0]))
        ));
        assert!(not_equals(Some(&poly(&[1.0])), None));
        assert!(!not_equals(None, None));
    }

    #[test]
    fn test_arithmetic_rejects_absent_operand() {
        let p = poly(&[2.0, 5.5]);

        assert!(matches!(
            add(None, Some(&p)),
            Err(PolynomialError::InvalidArgument { .. })
        ));
        assert!(matches!(
            subtract(Some(&p), None),
            Err(PolynomialError::InvalidArgument { .. })
        ));
        assert!(matches!(
            multiply(Some(&p), None),
            Err(PolynomialError::InvalidArgument { .. })
        ));
        assert!(matches!(
            add_scalar(None, 1.0),
            Err(PolynomialError::InvalidArgument { .. })
        ));
        assert!(matches!(
            subtract_scalar(None, 1.0),
            Err(PolynomialError::InvalidArgument { .. })
        ));
        assert!(matches!(
            scalar_mul(None, 1.0),
            Err(PolynomialError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_error_names_the_missing_operand() {
        let p = poly(&[1.0]);
        let err = add(Some(&p), None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: rhs cannot be null");
    }

    #[test]
    fn test_arithmetic_with_present_operands() {
        let lhs = poly(&[3.0, 2.0, -1.0]);
        let rhs = poly(&[-5.0, 0.0, 0.0, -3.0]);

        let product = multiply(Some(&lhs), Some(&rhs)).unwrap();
        assert_eq!(product.coefficients(), &[-15.0, -10.0, 5.0, -9.0, -6.0, 3.0]);

        let sum = add(Some(&poly(&[-5.0, 10.0, 15.5, 303.0])), Some(&poly(&[-5.0]))).unwrap();
        assert_eq!(sum.coefficients(), &[-10.0, 10.0, 15.5, 303.0]);

        let diff = subtract(Some(&lhs), Some(&lhs)).unwrap();
        assert_eq!(diff.to_string(), "0");

        assert_eq!(
            add_scalar(Some(&lhs), 1.0).unwrap().coefficients(),
            &[4.0, 3.0, 0.0]
        );
        assert_eq!(
            subtract_scalar(Some(&lhs), 1.0).unwrap().coefficients(),
            &[2.0, 1.0, -2.0]
        );
        assert_eq!(
            scalar_mul(Some(&lhs), 2.0).unwrap().coefficients(),
            &[6.0, 4.0, -2.0]
        );
    }
}
