//! Command-line entry point: runs a demonstration payroll and prints the report.

use std::process;

use rust_decimal::Decimal;
use tracing::error;

use payroll_engine::calculation::PayrollCalculator;
use payroll_engine::error::PayrollResult;
use payroll_engine::models::Employee;

fn run() -> PayrollResult<()> {
    let employees = vec![
        Employee::new("John", Decimal::from(40), Decimal::from(15)),
        Employee::new("Jane", Decimal::from(38), Decimal::from(17)),
        Employee::new("Doe", Decimal::from(45), Decimal::from(12)),
        Employee::new("Mark", Decimal::from(50), Decimal::from(20)),
    ];

    let calculator = PayrollCalculator::new(employees)?;
    let report = calculator.generate_report()?;
    println!("{report}");

    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    if let Err(err) = run() {
        error!(error = %err, "Payroll processing failed");
        process::exit(1);
    }
}
