//! Error types for the simulation core.
//!
//! Lookups that miss are reported to the caller and result in "no change".
//! Invariant violations only come out of catalog construction and are fatal.

use std::fmt;

use crate::catalog::BodyId;

/// Errors raised by the catalog, registry, motion and framing code.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Identifier is not present in the catalog.
    UnknownBody(String),
    /// Identifier is in the catalog but has no render handle.
    NotRegistered(BodyId),
    /// A registered scene node no longer exists.
    NodeMissing(BodyId),
    /// A handle was already registered for this identifier.
    AlreadyRegistered(BodyId),
    /// Catalog data breaks one of its load-time invariants.
    InvariantViolation(String),
    /// Non-finite or zero-length geometry from pathological input.
    NumericDegeneracy(String),
    /// Speed multiplier is negative or not finite.
    InvalidSpeed(f64),
}

impl CoreError {
    /// True for the recoverable "identifier did not resolve" family.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            CoreError::UnknownBody(_)
                | CoreError::NotRegistered(_)
                | CoreError::NodeMissing(_)
                | CoreError::AlreadyRegistered(_)
        )
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UnknownBody(id) => write!(f, "Unknown celestial body '{}'", id),
            CoreError::NotRegistered(id) => {
                write!(f, "Celestial body '{}' has no registered scene node", id)
            }
            CoreError::NodeMissing(id) => {
                write!(f, "Scene node of celestial body '{}' no longer exists", id)
            }
            CoreError::AlreadyRegistered(id) => {
                write!(f, "Celestial body '{}' is already registered", id)
            }
            CoreError::InvariantViolation(msg) => write!(f, "Catalog invariant violated: {}", msg),
            CoreError::NumericDegeneracy(msg) => write!(f, "Degenerate numeric input: {}", msg),
            CoreError::InvalidSpeed(speed) => {
                write!(f, "Invalid speed multiplier {} (must be finite and >= 0)", speed)
            }
        }
    }
}

impl std::error::Error for CoreError {}
