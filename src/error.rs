//! Errors raised while building the body table.
//!
//! Everything here is a load-time failure: a table that passes
//! [`crate::body::BodyTable::new`] never produces a division by zero later.

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// An orbit radius was given without an orbital period.
    #[error("body '{key}' has an orbit radius but no orbital period")]
    MissingOrbitPeriod { key: String },

    /// Orbital period is zero, negative or not finite.
    #[error("body '{key}' has invalid orbital period {value} days")]
    InvalidOrbitPeriod { key: String, value: f64 },

    /// Rotation period is zero or not finite. Negative is allowed (retrograde).
    #[error("body '{key}' has invalid rotation period {value} days")]
    InvalidRotationPeriod { key: String, value: f64 },

    #[error("body '{key}' has invalid visual radius {value}")]
    InvalidVisualRadius { key: String, value: f64 },

    #[error("body '{key}' has invalid orbit radius {value}")]
    InvalidOrbitRadius { key: String, value: f64 },

    #[error("body key '{key}' appears more than once")]
    DuplicateKey { key: String },
}
