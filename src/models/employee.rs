//! Employee model and validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Represents an employee in the payroll run.
///
/// An employee can be constructed with any field values; invalid records are
/// rejected by [`validate`](Employee::validate), which every calculator runs
/// over its roster at construction time. Records are immutable by convention
/// once handed to a calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name. Must be non-empty.
    pub name: String,
    /// Hours worked in the pay period. Must be non-negative.
    pub hours_worked: Decimal,
    /// Base hourly rate. Must be strictly positive.
    pub hourly_rate: Decimal,
}

impl Employee {
    /// Creates a new employee record.
    ///
    /// No validation happens here; call [`validate`](Employee::validate)
    /// before using the record in a calculation.
    pub fn new(name: impl Into<String>, hours_worked: Decimal, hourly_rate: Decimal) -> Self {
        Self {
            name: name.into(),
            hours_worked,
            hourly_rate,
        }
    }

    /// Validates the employee record.
    ///
    /// Fields are checked in declaration order and the first failure wins:
    /// an empty name fails with [`PayrollError::InvalidName`], negative hours
    /// with [`PayrollError::NegativeHours`], and a zero or negative rate with
    /// [`PayrollError::NonPositiveRate`]. The check is pure and has no side
    /// effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("John", Decimal::from(40), Decimal::from(15));
    /// assert!(employee.validate().is_ok());
    /// ```
    pub fn validate(&self) -> PayrollResult<()> {
        if self.name.is_empty() {
            return Err(PayrollError::InvalidName);
        }
        if self.hours_worked < Decimal::ZERO {
            return Err(PayrollError::NegativeHours {
                hours: self.hours_worked,
            });
        }
        if self.hourly_rate <= Decimal::ZERO {
            return Err(PayrollError::NonPositiveRate {
                rate: self.hourly_rate,
            });
        }
        Ok(())
    }
}
