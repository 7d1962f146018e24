//! Salary computation for the Dayflow engine.
//!
//! This module contains the pure functions that derive gross salary,
//! total deductions, and net salary from a per-employee salary record or
//! the company-wide structure, the validation applied to admin edits,
//! and the payroll summary used by the admin view.

mod breakdown;
mod summary;

pub use breakdown::{
    SalaryBreakdown, breakdown, structure_gross, validate_salary, validate_structure,
};
pub use summary::summarize;
