//! Payroll calculation engine.
//!
//! This crate computes payroll amounts (regular pay, overtime pay, tax, net pay)
//! for a roster of employees and renders a textual payroll report. All monetary
//! arithmetic uses exact decimal numbers so that values like `40.5 * 15.75` come
//! out as `637.875` exactly; rounding to two decimal places happens only when the
//! report is formatted.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod report;
