// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! A single-variable polynomial with real (`f64`) coefficients.
//!
//! ## Features
//!
//! - Coefficients are stored highest degree first and are never empty.
//! - Arithmetic: addition and subtraction paired by coefficient position,
//!   multiplication by convolution, and scalar shift/scale of every coefficient.
//! - Tolerance-based equality against an explicit accuracy threshold, with
//!   hashing that agrees for identical coefficients.
//! - Rendering as `c_n*x^n + ... + c_1*x + c_0`.
//! - Configuration: the accuracy is loaded from defaults, YAML and `RPOLY_*`
//!   environment variables and handed to each polynomial.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Example
//!
//! ```
//! use rpoly_polynomial::Polynomial;
//!
//! let p = Polynomial::new(&[3.0, 2.0, -1.0])?;
//! let q = Polynomial::new(&[-5.0, 0.0, 0.0, -3.0])?;
//! assert_eq!((&p * &q).to_string(), "-15*x^5 - 10*x^4 + 5*x^3 - 9*x^2 - 6*x + 3");
//! # Ok::<(), rpoly_polynomial::PolynomialError>(())
//! ```

pub mod config;
pub mod errors;
pub mod nullable;
pub mod polynomial;
pub mod utils;

pub use config::{Accuracy, ConfigError, PolynomialConfig, DEFAULT_ACCURACY};
pub use polynomial::{Polynomial, PolynomialError};
