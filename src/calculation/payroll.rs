//! Per-employee payroll arithmetic.
//!
//! ## Pay structure
//!
//! - Hours up to [`REGULAR_HOURS`] are paid at the base hourly rate.
//! - Hours beyond that are paid at [`OVERTIME_MULTIPLIER`] times the base rate.
//! - A flat [`TAX_RATE`] fraction of gross pay is withheld as tax.
//!
//! All arithmetic is exact decimal; no rounding is applied here.

use rust_decimal::Decimal;
use tracing::error;

use crate::error::PayrollResult;
use crate::models::{Employee, PayrollBreakdown};

/// The weekly hours threshold above which overtime applies.
pub const REGULAR_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// The premium multiplier applied to the base rate for overtime hours (1.5).
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The flat tax rate withheld from gross pay (0.2).
pub const TAX_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Calculates the payroll breakdown for a single employee.
///
/// The employee is assumed to have passed [`Employee::validate`]; the
/// calculator enforces this once at construction. The computation is pure,
/// so calling it twice on the same employee yields identical results.
///
/// The fallible signature is a pass-through contract: the arithmetic itself
/// cannot fail on validated input, but if an error ever surfaces it is
/// logged tagged with the employee's name and propagated unchanged. No new
/// error kinds are introduced here.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new("Jane", Decimal::from(45), Decimal::from(20));
/// let breakdown = calculate_payroll(&employee).unwrap();
///
/// assert_eq!(breakdown.overtime_hours, Decimal::from(5));
/// assert_eq!(breakdown.gross_pay, Decimal::from(950));
/// assert_eq!(breakdown.net_pay, Decimal::from(760));
/// ```
pub fn calculate_payroll(employee: &Employee) -> PayrollResult<PayrollBreakdown> {
    match compute_breakdown(employee) {
        Ok(breakdown) => Ok(breakdown),
        Err(err) => {
            error!(employee = %employee.name, error = %err, "Error calculating payroll");
            Err(err)
        }
    }
}

fn compute_breakdown(employee: &Employee) -> PayrollResult<PayrollBreakdown> {
    let (overtime_hours, overtime_pay, gross_pay) = if employee.hours_worked > REGULAR_HOURS {
        let overtime_hours = employee.hours_worked - REGULAR_HOURS;
        let overtime_pay = overtime_hours * (employee.hourly_rate * OVERTIME_MULTIPLIER);
        let regular_pay = REGULAR_HOURS * employee.hourly_rate;
        (overtime_hours, overtime_pay, regular_pay + overtime_pay)
    } else {
        (
            Decimal::ZERO,
            Decimal::ZERO,
            employee.hours_worked * employee.hourly_rate,
        )
    };

    let tax_amount = gross_pay * TAX_RATE;
    let net_pay = gross_pay - tax_amount;

    Ok(PayrollBreakdown {
        overtime_hours,
        overtime_pay,
        gross_pay,
        tax_amount,
        net_pay,
    })
}
