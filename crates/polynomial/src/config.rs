// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Accuracy threshold and its configuration sources.
//!
//! The threshold is an explicit value handed to every polynomial at
//! construction. Loading it follows the usual layering: built-in default,
//! then an optional YAML file, then `RPOLY_*` environment variables.

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Accuracy used when nothing else is configured.
pub const DEFAULT_ACCURACY: f64 = 0.0001;

/// Prefix of the environment variables read by [`PolynomialConfig::load`].
pub const ENV_PREFIX: &str = "RPOLY_";

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The threshold is zero, negative, NaN or infinite.
    #[error("accuracy must be finite and strictly positive, got {value}")]
    InvalidAccuracy { value: f64 },

    /// A provider could not be read or a value had the wrong type.
    #[error("could not extract configuration: {0}")]
    Extract(#[from] figment::Error),
}

/// Tolerance below which two coefficients are considered equal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Accuracy(f64);

impl Accuracy {
    /// Creates a threshold, rejecting values that are not finite and positive.
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidAccuracy { value })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns `true` when `|x| < accuracy`.
    pub fn is_negligible(&self, x: f64) -> bool {
        x.abs() < self.0
    }

    /// Returns `true` when `|a - b| < accuracy`. The comparison is strict.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.0
    }

    /// The smaller of the two thresholds.
    pub fn stricter(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }
}

impl Default for Accuracy {
    fn default() -> Self {
        Self(DEFAULT_ACCURACY)
    }
}

impl TryFrom<f64> for Accuracy {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Accuracy::new(value)
    }
}

impl From<Accuracy> for f64 {
    fn from(value: Accuracy) -> Self {
        value.0
    }
}

/// Process-level configuration for polynomial construction and comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolynomialConfig {
    accuracy: Accuracy,
}

impl PolynomialConfig {
    pub fn new(accuracy: Accuracy) -> Self {
        Self { accuracy }
    }

    pub fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    /// Builds the layered provider: defaults, then the YAML file at `path`
    /// if one is given, then `RPOLY_*` environment variables.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Self::defaults();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extracts and validates a configuration from any figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let value: f64 = figment.extract_inner("accuracy")?;
        let accuracy = Accuracy::new(value)?;
        debug!(accuracy = value, "Loaded polynomial configuration");
        Ok(Self { accuracy })
    }

    /// Loads the configuration from the YAML file at `path` (if any) and the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(path))
    }

    /// Parses a YAML document on top of the defaults. The environment is not
    /// consulted.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::defaults().merge(Yaml::string(yaml)))
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::default("accuracy", DEFAULT_ACCURACY))
    }
}
