//! Salary structure models.
//!
//! This module defines the company-wide salary structure and the
//! per-employee salary record that payroll computations consume.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single named earning component of the company structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponent {
    /// Display name (e.g., "House Rent Allowance").
    pub name: String,
    /// Monthly amount in currency minor units.
    pub amount: Decimal,
    /// Explanatory text shown alongside the component.
    pub description: String,
    /// Optional display percentage (e.g., "8.33%").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
}

/// One side of the provident fund contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PfShare {
    /// Monthly contribution amount.
    pub amount: Decimal,
    /// Display percentage of basic salary (e.g., "12.00%").
    pub percentage: String,
}

/// Provident fund contribution split between employee and employer.
///
/// Only the employee share counts toward employee-facing deductions;
/// the employer share is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PfContribution {
    /// The employee's share.
    pub employee: PfShare,
    /// The employer's share.
    pub employer: PfShare,
}

/// The single company-wide salary structure.
///
/// Created at load from configuration defaults and mutated in place by
/// admin edits; there is exactly one instance and it is never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyStructure {
    /// Monthly wage the structure is derived from.
    pub month_wage: Decimal,
    /// Yearly wage the structure is derived from.
    pub yearly_wage: Decimal,
    /// Number of working days per week (0..=7).
    pub working_days: u8,
    /// Daily break time in hours.
    pub break_time_hours: Decimal,
    /// Ordered earning components.
    pub components: Vec<SalaryComponent>,
    /// Provident fund contribution split.
    pub pf_contribution: PfContribution,
    /// Monthly professional tax deduction.
    pub professional_tax: Decimal,
}

/// Per-employee salary record.
///
/// Created from the company default template and mutated atomically by
/// admin edits, keyed by employee id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSalary {
    /// Base salary component.
    pub basic_salary: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Fixed monthly standard allowance.
    pub standard_allowance: Decimal,
    /// Performance-based incentive.
    pub performance_bonus: Decimal,
    /// Leave travel allowance.
    pub lta: Decimal,
    /// Additional fixed component.
    pub fixed_allowance: Decimal,
    /// Employee's provident fund contribution.
    pub pf_employee: Decimal,
    /// Employer's provident fund contribution (excluded from deductions).
    pub pf_employer: Decimal,
    /// Monthly professional tax.
    pub professional_tax: Decimal,
}

impl EmployeeSalary {
    /// The company default template applied to employees that have no
    /// salary record of their own.
    pub fn default_template() -> Self {
        Self {
            basic_salary: Decimal::new(25000, 0),
            hra: Decimal::new(12500, 0),
            standard_allowance: Decimal::new(4167, 0),
            performance_bonus: Decimal::new(2083, 0),
            lta: Decimal::new(2083, 0),
            fixed_allowance: Decimal::new(2918, 0),
            pf_employee: Decimal::new(3000, 0),
            pf_employer: Decimal::new(3000, 0),
            professional_tax: Decimal::new(200, 0),
        }
    }

    /// Iterates over the record's monetary fields with their names.
    ///
    /// Used by validation to reject negative amounts field by field.
    pub fn fields(&self) -> [(&'static str, Decimal); 9] {
        [
            ("basic_salary", self.basic_salary),
            ("hra", self.hra),
            ("standard_allowance", self.standard_allowance),
            ("performance_bonus", self.performance_bonus),
            ("lta", self.lta),
            ("fixed_allowance", self.fixed_allowance),
            ("pf_employee", self.pf_employee),
            ("pf_employer", self.pf_employer),
            ("professional_tax", self.professional_tax),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_employee_salary() {
        let json = r#"{
            "basic_salary": "25000",
            "hra": "12500",
            "standard_allowance": "4167",
            "performance_bonus": "2083",
            "lta": "2083",
            "fixed_allowance": "2918",
            "pf_employee": "3000",
            "pf_employer": "3000",
            "professional_tax": "200"
        }"#;

        let salary: EmployeeSalary = serde_json::from_str(json).unwrap();
        assert_eq!(salary.basic_salary, dec("25000"));
        assert_eq!(salary.professional_tax, dec("200"));
    }

    #[test]
    fn test_fields_covers_every_amount() {
        let salary = EmployeeSalary {
            basic_salary: dec("1"),
            hra: dec("2"),
            standard_allowance: dec("3"),
            performance_bonus: dec("4"),
            lta: dec("5"),
            fixed_allowance: dec("6"),
            pf_employee: dec("7"),
            pf_employer: dec("8"),
            professional_tax: dec("9"),
        };

        let total: Decimal = salary.fields().iter().map(|(_, v)| *v).sum();
        assert_eq!(total, dec("45"));
    }

    #[test]
    fn test_default_template_amounts() {
        let template = EmployeeSalary::default_template();
        assert_eq!(template.basic_salary, dec("25000"));
        assert_eq!(template.hra, dec("12500"));
        assert_eq!(template.pf_employer, dec("3000"));

        let earnings = template.basic_salary
            + template.hra
            + template.standard_allowance
            + template.performance_bonus
            + template.lta
            + template.fixed_allowance;
        assert_eq!(earnings, dec("48751"));
    }

    #[test]
    fn test_component_percentage_is_optional() {
        let json = r#"{
            "name": "Basic Salary",
            "amount": "25000",
            "description": "Define basic salary from company cost"
        }"#;

        let component: SalaryComponent = serde_json::from_str(json).unwrap();
        assert!(component.percentage.is_none());

        let out = serde_json::to_string(&component).unwrap();
        assert!(!out.contains("percentage"));
    }

    #[test]
    fn test_structure_round_trip() {
        let structure = CompanyStructure {
            month_wage: dec("50000"),
            yearly_wage: dec("600000"),
            working_days: 5,
            break_time_hours: dec("1"),
            components: vec![SalaryComponent {
                name: "Basic Salary".to_string(),
                amount: dec("25000"),
                description: "Half of monthly wage".to_string(),
                percentage: None,
            }],
            pf_contribution: PfContribution {
                employee: PfShare {
                    amount: dec("3000"),
                    percentage: "12.00%".to_string(),
                },
                employer: PfShare {
                    amount: dec("3000"),
                    percentage: "12.00%".to_string(),
                },
            },
            professional_tax: dec("200"),
        };

        let json = serde_json::to_string(&structure).unwrap();
        let back: CompanyStructure = serde_json::from_str(&json).unwrap();
        assert_eq!(structure, back);
    }
}
