//! Error types raised while configuring the heuristic scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when factor weights are unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightsError {
    /// A weight was NaN or infinite.
    #[error("weight for {factor} must be finite")]
    NonFinite {
        /// Wire name of the offending factor.
        factor: &'static str,
    },
    /// A weight was below zero.
    #[error("weight for {factor} must not be negative")]
    Negative {
        /// Wire name of the offending factor.
        factor: &'static str,
    },
    /// Every weight was zero, so no score could ever be produced.
    #[error("weights must sum to a positive value")]
    ZeroTotal,
}
