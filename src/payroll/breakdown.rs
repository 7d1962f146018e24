//! Gross/net salary breakdown computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DayflowError, DayflowResult};
use crate::models::{CompanyStructure, EmployeeSalary};

/// The computed totals for one salary record.
///
/// Invariant: `net_salary = gross_salary - total_deductions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Sum of all earning components before deductions.
    pub gross_salary: Decimal,
    /// Employee PF contribution plus professional tax.
    pub total_deductions: Decimal,
    /// Gross salary minus total deductions.
    pub net_salary: Decimal,
}

/// Computes the salary breakdown for an employee record.
///
/// Gross salary sums the six earning components; deductions are the
/// employee PF contribution and professional tax. The employer PF
/// contribution is informational and never deducted from the employee.
///
/// # Example
///
/// ```
/// use dayflow_engine::models::EmployeeSalary;
/// use dayflow_engine::payroll::breakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let salary = EmployeeSalary {
///     basic_salary: dec("25000"),
///     hra: dec("12500"),
///     standard_allowance: dec("4167"),
///     performance_bonus: dec("2083"),
///     lta: dec("2083"),
///     fixed_allowance: dec("2918"),
///     pf_employee: dec("3000"),
///     pf_employer: dec("3000"),
///     professional_tax: dec("200"),
/// };
///
/// let totals = breakdown(&salary);
/// assert_eq!(totals.gross_salary, dec("48751"));
/// assert_eq!(totals.total_deductions, dec("3200"));
/// assert_eq!(totals.net_salary, dec("45551"));
/// ```
pub fn breakdown(salary: &EmployeeSalary) -> SalaryBreakdown {
    let gross_salary = salary.basic_salary
        + salary.hra
        + salary.standard_allowance
        + salary.performance_bonus
        + salary.lta
        + salary.fixed_allowance;

    let total_deductions = salary.pf_employee + salary.professional_tax;

    SalaryBreakdown {
        gross_salary,
        total_deductions,
        net_salary: gross_salary - total_deductions,
    }
}

/// Sums the earning components of the company structure.
pub fn structure_gross(structure: &CompanyStructure) -> Decimal {
    structure.components.iter().map(|c| c.amount).sum()
}

/// Validates an employee salary record before it replaces the stored one.
///
/// Every monetary field must be non-negative; the first offending field
/// is reported.
pub fn validate_salary(salary: &EmployeeSalary) -> DayflowResult<()> {
    for (field, amount) in salary.fields() {
        if amount < Decimal::ZERO {
            return Err(DayflowError::NegativeAmount {
                field: field.to_string(),
                message: format!("amount {} is negative", amount),
            });
        }
    }
    Ok(())
}

/// Validates the company structure before it replaces the stored one.
pub fn validate_structure(structure: &CompanyStructure) -> DayflowResult<()> {
    if structure.working_days > 7 {
        return Err(DayflowError::ValidationError {
            field: "working_days".to_string(),
            message: format!("{} exceeds 7 days per week", structure.working_days),
        });
    }

    for component in &structure.components {
        if component.amount < Decimal::ZERO {
            return Err(DayflowError::NegativeAmount {
                field: component.name.clone(),
                message: format!("amount {} is negative", component.amount),
            });
        }
    }

    let shares = [
        ("pf_employee", structure.pf_contribution.employee.amount),
        ("pf_employer", structure.pf_contribution.employer.amount),
        ("professional_tax", structure.professional_tax),
        ("month_wage", structure.month_wage),
        ("yearly_wage", structure.yearly_wage),
    ];
    for (field, amount) in shares {
        if amount < Decimal::ZERO {
            return Err(DayflowError::NegativeAmount {
                field: field.to_string(),
                message: format!("amount {} is negative", amount),
            });
        }
    }

    Ok(())
}
