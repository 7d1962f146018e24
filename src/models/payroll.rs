//! Payroll history and summary models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment state of a monthly payroll run for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Salary disbursed.
    Paid,
    /// Awaiting disbursement.
    Pending,
    /// Disbursement in progress.
    Processing,
}

/// One month's payroll line for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Display label for the pay month (e.g., "January 2026").
    pub month: String,
    /// Basic salary for the month.
    pub basic_salary: Decimal,
    /// Total allowances on top of basic.
    pub allowances: Decimal,
    /// Total deductions for the month.
    pub deductions: Decimal,
    /// Net amount payable.
    pub net_salary: Decimal,
    /// Payment state.
    pub status: PayrollStatus,
    /// The date the salary was disbursed, once paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<NaiveDate>,
}

/// Company-wide payroll totals for the admin view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Sum of net salaries across all employees for the month.
    pub total_payroll: Decimal,
    /// Number of employees already paid.
    pub employees_paid: usize,
    /// Total number of employees on payroll.
    pub total_employees: usize,
    /// Number of payments still pending or processing.
    pub pending_payments: usize,
}
