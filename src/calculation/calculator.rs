//! The roster-owning payroll calculator.

use tracing::error;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayrollBreakdown};
use crate::report;

use super::payroll::calculate_payroll;

/// Computes payroll for an ordered, validated roster of employees.
///
/// Construction validates the whole roster up front; calculation and report
/// generation assume validity and never re-check it. The roster is read-only
/// after construction, so a calculator is safe to share across threads.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let calculator = PayrollCalculator::new(vec![
///     Employee::new("John", Decimal::from(40), Decimal::from(15)),
///     Employee::new("Jane", Decimal::from(45), Decimal::from(20)),
/// ])
/// .unwrap();
///
/// let report = calculator.generate_report().unwrap();
/// assert!(report.contains("Total Gross: $1550.00"));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollCalculator {
    employees: Vec<Employee>,
}

impl PayrollCalculator {
    /// Creates a calculator from an ordered roster of employees.
    ///
    /// Fails with [`PayrollError::EmptyRoster`] when the roster is empty,
    /// otherwise validates employees in input order and returns the first
    /// validation failure unchanged. On success the calculator takes
    /// ownership of the roster; report lines follow insertion order.
    pub fn new(employees: Vec<Employee>) -> PayrollResult<Self> {
        if employees.is_empty() {
            return Err(PayrollError::EmptyRoster);
        }
        for employee in &employees {
            employee.validate()?;
        }
        Ok(Self { employees })
    }

    /// Returns the roster in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Calculates the payroll breakdown for a single employee.
    ///
    /// See [`calculate_payroll`](super::calculate_payroll) for the pay
    /// structure and the error pass-through contract.
    pub fn calculate_payroll(&self, employee: &Employee) -> PayrollResult<PayrollBreakdown> {
        calculate_payroll(employee)
    }

    /// Generates the formatted payroll report for the whole roster.
    ///
    /// One line per employee in insertion order, bracketed by a fixed header
    /// and gross/net totals. Money is rounded to two decimal places at this
    /// point only. On any calculation failure the error is logged and
    /// propagated; no partial report is returned.
    pub fn generate_report(&self) -> PayrollResult<String> {
        match report::render(&self.employees) {
            Ok(text) => Ok(text),
            Err(err) => {
                error!(error = %err, "Error generating report");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let result = PayrollCalculator::new(vec![]);
        assert_eq!(result.unwrap_err(), PayrollError::EmptyRoster);
    }

    #[test]
    fn test_valid_roster_is_accepted() {
        let calculator = PayrollCalculator::new(vec![
            Employee::new("John", dec("40"), dec("15")),
            Employee::new("Jane", dec("45"), dec("20")),
        ])
        .unwrap();

        assert_eq!(calculator.employees().len(), 2);
    }

    #[test]
    fn test_invalid_employee_is_rejected() {
        let result = PayrollCalculator::new(vec![
            Employee::new("John", dec("40"), dec("15")),
            Employee::new("Jane", dec("-5"), dec("20")),
        ]);

        assert_eq!(
            result.unwrap_err(),
            PayrollError::NegativeHours { hours: dec("-5") }
        );
    }

    #[test]
    fn test_first_invalid_employee_wins() {
        // Validation checks the roster in input order and stops at the
        // first failure.
        let result = PayrollCalculator::new(vec![
            Employee::new("", dec("40"), dec("15")),
            Employee::new("Jane", dec("-5"), dec("20")),
        ]);

        assert_eq!(result.unwrap_err(), PayrollError::InvalidName);
    }

    #[test]
    fn test_roster_preserves_insertion_order() {
        let calculator = PayrollCalculator::new(vec![
            Employee::new("Doe", dec("45"), dec("12")),
            Employee::new("Mark", dec("50"), dec("20")),
            Employee::new("John", dec("40"), dec("15")),
        ])
        .unwrap();

        let names: Vec<&str> = calculator
            .employees()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Doe", "Mark", "John"]);
    }

    #[test]
    fn test_calculate_payroll_matches_free_function() {
        let employee = Employee::new("Jane", dec("45"), dec("20"));
        let calculator = PayrollCalculator::new(vec![employee.clone()]).unwrap();

        assert_eq!(
            calculator.calculate_payroll(&employee).unwrap(),
            calculate_payroll(&employee).unwrap()
        );
    }
}
