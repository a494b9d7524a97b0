//! Calculation logic for the payroll engine.
//!
//! This module contains the per-employee payroll arithmetic (regular pay,
//! overtime premium, flat tax, net pay) and the [`PayrollCalculator`] that
//! owns a validated roster of employees and produces the payroll report.

mod calculator;
mod payroll;

pub use calculator::PayrollCalculator;
pub use payroll::{OVERTIME_MULTIPLIER, REGULAR_HOURS, TAX_RATE, calculate_payroll};
