//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all validation failures that can occur while building a payroll.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Every error is an immediately-fatal validation failure; nothing here is
/// retryable. Validation errors surface synchronously at calculator
/// construction or at an explicit [`validate`](crate::models::Employee::validate)
/// call, never deferred.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidName;
/// assert_eq!(error.to_string(), "Employee name must be a non-empty string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// The employee name was empty.
    #[error("Employee name must be a non-empty string")]
    InvalidName,

    /// The hours worked were negative.
    #[error("Hours worked cannot be negative: {hours}")]
    NegativeHours {
        /// The offending hours value.
        hours: Decimal,
    },

    /// The hourly rate was zero or negative.
    #[error("Hourly rate must be positive: {rate}")]
    NonPositiveRate {
        /// The offending rate value.
        rate: Decimal,
    },

    /// The calculator was constructed with zero employees.
    #[error("Employee list cannot be empty")]
    EmptyRoster,
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
