//! Loguniform-specific errors
//!
//! The only thing that can go wrong is a bad distribution parameter, see
//! [`crate::distribution::LogUniform::new`].
use thiserror::Error;

/// One of the two bounds of a log-uniform distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Minimum,
    Maximum,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Bound::Minimum => write!(f, "minimum value"),
            Bound::Maximum => write!(f, "maximum value"),
        }
    }
}

/// An error that Loguniform could end up producing.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoguniformError {
    /// `bound` is the rejected bound, `found` is its textual representation.
    #[error("{bound} parameter in log-uniform distribution {reason}, found {found}")]
    InvalidParameter {
        bound: Bound,
        reason: &'static str,
        found: String,
    },
}
