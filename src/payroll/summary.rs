//! Company-wide payroll summary for the admin view.

use rust_decimal::Decimal;

use crate::models::{EmployeeSalary, PayrollStatus, PayrollSummary};
use crate::payroll::breakdown;

/// Folds per-employee salary records and payment states into the totals
/// shown on the admin payroll dashboard.
///
/// `total_payroll` is the sum of computed net salaries; paid and pending
/// counts come from the payment state of each row.
pub fn summarize<'a, I>(rows: I) -> PayrollSummary
where
    I: IntoIterator<Item = (&'a EmployeeSalary, PayrollStatus)>,
{
    let mut total_payroll = Decimal::ZERO;
    let mut employees_paid = 0;
    let mut pending_payments = 0;
    let mut total_employees = 0;

    for (salary, status) in rows {
        total_employees += 1;
        total_payroll += breakdown(salary).net_salary;
        match status {
            PayrollStatus::Paid => employees_paid += 1,
            PayrollStatus::Pending | PayrollStatus::Processing => pending_payments += 1,
        }
    }

    PayrollSummary {
        total_payroll,
        employees_paid,
        total_employees,
        pending_payments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn salary(basic: &str) -> EmployeeSalary {
        EmployeeSalary {
            basic_salary: dec(basic),
            hra: Decimal::ZERO,
            standard_allowance: Decimal::ZERO,
            performance_bonus: Decimal::ZERO,
            lta: Decimal::ZERO,
            fixed_allowance: Decimal::ZERO,
            pf_employee: dec("100"),
            pf_employer: dec("100"),
            professional_tax: Decimal::ZERO,
        }
    }

    #[test]
    fn test_summary_counts_and_total() {
        let a = salary("5000");
        let b = salary("6000");
        let c = salary("7000");

        let summary = summarize([
            (&a, PayrollStatus::Paid),
            (&b, PayrollStatus::Pending),
            (&c, PayrollStatus::Processing),
        ]);

        // Nets: 4900 + 5900 + 6900
        assert_eq!(summary.total_payroll, dec("17700"));
        assert_eq!(summary.total_employees, 3);
        assert_eq!(summary.employees_paid, 1);
        assert_eq!(summary.pending_payments, 2);
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize([]);
        assert_eq!(summary.total_payroll, Decimal::ZERO);
        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.employees_paid, 0);
        assert_eq!(summary.pending_payments, 0);
    }
}
