//! Error types for hydraulic calculations.

use pf_core::error::PfError;
use thiserror::Error;

/// Errors that can occur during hydraulic calculations.
///
/// Every input is a physical quantity, so the policy is uniform across all
/// formulas: inputs must be finite and non-negative, divisors must be
/// non-zero. The same bad input always produces the same variant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydroError {
    #[error("Invalid input: {what} is negative ({value})")]
    NegativeInput { what: &'static str, value: f64 },

    #[error("Invalid input: {what} is zero, cannot divide")]
    ZeroDivisor { what: &'static str },

    #[error("Invalid input: {what} is not finite ({value})")]
    NonFinite { what: &'static str, value: f64 },
}

pub type HydroResult<T> = Result<T, HydroError>;

impl From<PfError> for HydroError {
    fn from(e: PfError) -> Self {
        match e {
            PfError::NonFinite { what, value } => HydroError::NonFinite { what, value },
            PfError::Negative { what, value } => HydroError::NegativeInput { what, value },
            PfError::DivisorZero { what } => HydroError::ZeroDivisor { what },
        }
    }
}
