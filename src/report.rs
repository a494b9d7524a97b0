//! Payroll report rendering.
//!
//! The report is plain text: a fixed two-line header, one line per employee
//! in roster order, and a two-line gross/net totals footer, joined with
//! newlines and without a trailing newline. This is the only place where
//! monetary values are rounded; everything upstream carries full precision.

use rust_decimal::Decimal;

use crate::calculation::calculate_payroll;
use crate::error::PayrollResult;
use crate::models::Employee;

const REPORT_TITLE: &str = "Employee Payroll Report:";
const REPORT_RULE: &str = "========================";

/// Formats a monetary value with exactly two decimal places.
///
/// Uses banker's rounding at the second decimal place, matching the
/// rounding the rest of the report applies to gross and net amounts.
///
/// # Examples
///
/// ```
/// use payroll_engine::report::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from(600)), "600.00");
/// assert_eq!(format_currency(Decimal::from_str("637.875").unwrap()), "637.88");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Renders the payroll report for a roster of validated employees.
///
/// Hours are rendered in their natural decimal form (`40` stays `40`, not
/// `40.00`); money is rendered through [`format_currency`].
pub(crate) fn render(employees: &[Employee]) -> PayrollResult<String> {
    let mut lines = vec![REPORT_TITLE.to_string(), REPORT_RULE.to_string()];
    let mut total_gross = Decimal::ZERO;
    let mut total_net = Decimal::ZERO;

    for employee in employees {
        let payroll = calculate_payroll(employee)?;
        total_gross += payroll.gross_pay;
        total_net += payroll.net_pay;

        lines.push(format!(
            "{} worked {} hrs, gross ${}, net ${}",
            employee.name,
            employee.hours_worked,
            format_currency(payroll.gross_pay),
            format_currency(payroll.net_pay),
        ));
    }

    lines.push(format!("Total Gross: ${}", format_currency(total_gross)));
    lines.push(format!("Total Net: ${}", format_currency(total_net)));

    Ok(lines.join("\n"))
}
