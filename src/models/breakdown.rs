//! Payroll breakdown result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The per-employee result of a payroll calculation.
///
/// All amounts are carried at full decimal precision; rounding to two
/// decimal places happens only when a report is formatted. A breakdown is a
/// derived value and is never stored back onto the [`Employee`] it was
/// computed from.
///
/// [`Employee`]: crate::models::Employee
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayrollBreakdown {
///     overtime_hours: Decimal::ZERO,
///     overtime_pay: Decimal::ZERO,
///     gross_pay: Decimal::from(600),
///     tax_amount: Decimal::from(120),
///     net_pay: Decimal::from(480),
/// };
/// assert_eq!(breakdown.gross_pay - breakdown.tax_amount, breakdown.net_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Hours worked beyond the regular-hours threshold.
    pub overtime_hours: Decimal,
    /// Pay for the overtime hours at the premium rate.
    pub overtime_pay: Decimal,
    /// Total pay before tax, including the overtime premium.
    pub gross_pay: Decimal,
    /// Tax withheld, a flat fraction of gross pay.
    pub tax_amount: Decimal,
    /// Gross pay minus tax.
    pub net_pay: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_breakdown() -> PayrollBreakdown {
        PayrollBreakdown {
            overtime_hours: dec("5"),
            overtime_pay: dec("150"),
            gross_pay: dec("950"),
            tax_amount: dec("190"),
            net_pay: dec("760"),
        }
    }

    #[test]
    fn test_serialize_round_trip() {
        let breakdown = sample_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: PayrollBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, deserialized);
    }

    #[test]
    fn test_amounts_serialize_as_strings() {
        let json = serde_json::to_value(sample_breakdown()).unwrap();
        assert_eq!(json["gross_pay"], "950");
        assert_eq!(json["net_pay"], "760");
    }
}
