// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
///
/// Every variant is a contract violation detected at the call site; nothing
/// here is transient or worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolynomialError {
    /// Absent or empty coefficients, or an absent operand.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Coefficient index outside `[0, len)`.
    #[error("Index {index} is out of range for a polynomial with {len} coefficients")]
    IndexOutOfRange { index: isize, len: usize },
}

impl PolynomialError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        PolynomialError::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PolynomialError::invalid_argument("coefficients cannot be empty");
        assert_eq!(
            err.to_string(),
            "Invalid argument: coefficients cannot be empty"
        );

        let err = PolynomialError::IndexOutOfRange { index: -4, len: 3 };
        assert_eq!(
            err.to_string(),
            "Index -4 is out of range for a polynomial with 3 coefficients"
        );
    }
}
