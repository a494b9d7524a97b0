//! Core data models for the payroll engine.

mod breakdown;
mod employee;

pub use breakdown::PayrollBreakdown;
pub use employee::Employee;
