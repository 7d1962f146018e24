//! Storage seams for the Dayflow engine.
//!
//! Domain state lives behind small per-aggregate traits so the engine
//! never touches process-wide singletons; handlers receive a [`Store`]
//! and tests inject the same in-memory implementation production uses.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::DayflowResult;
use crate::leave::{LeaveDecision, LeaveDraft};
use crate::models::{
    AttendanceRecord, CompanyStructure, Employee, EmployeeSalary, LeaveBalance, LeaveRequest,
    PayrollRecord, PayrollStatus,
};

/// Fields a user may change on their own profile.
///
/// Updates are last-writer-wins; there is exactly one writer per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// New contact email, if changing.
    pub email: Option<String>,
    /// New phone number, if changing.
    pub phone: Option<String>,
}

/// Access to the employee directory.
pub trait EmployeeStore {
    /// All employees, ordered by id.
    fn employees(&self) -> Vec<Employee>;

    /// Looks up one employee by id.
    fn employee(&self, id: &str) -> DayflowResult<Employee>;

    /// Applies a profile update and returns the new record.
    fn update_profile(&self, id: &str, update: ProfileUpdate) -> DayflowResult<Employee>;
}

/// Access to the company structure and per-employee salary records.
pub trait SalaryStore {
    /// The single company-wide salary structure.
    fn company_structure(&self) -> CompanyStructure;

    /// Atomically replaces the company structure after validation.
    fn replace_company_structure(&self, structure: CompanyStructure) -> DayflowResult<()>;

    /// The salary record for an employee, falling back to the default
    /// template when no override has been saved.
    fn employee_salary(&self, id: &str) -> DayflowResult<EmployeeSalary>;

    /// Atomically replaces an employee's salary record after validation.
    fn replace_employee_salary(&self, id: &str, salary: EmployeeSalary) -> DayflowResult<()>;

    /// Salary and current payment state for every employee, ordered by id.
    fn payroll_rows(&self) -> Vec<(Employee, EmployeeSalary, PayrollStatus)>;

    /// Monthly payroll history for one employee, newest first.
    fn payroll_history(&self, id: &str) -> DayflowResult<Vec<PayrollRecord>>;
}

/// Access to per-day attendance records.
pub trait AttendanceStore {
    /// Records a check-in, creating or updating the day's record.
    ///
    /// Fails when the employee has already checked in that day.
    fn check_in(
        &self,
        employee_id: &str,
        date: NaiveDate,
        time: chrono::NaiveTime,
    ) -> DayflowResult<AttendanceRecord>;

    /// Records a check-out and rewrites the derived work/extra hours.
    ///
    /// Fails without an open check-in, or when the check-out precedes it.
    fn check_out(
        &self,
        employee_id: &str,
        date: NaiveDate,
        time: chrono::NaiveTime,
    ) -> DayflowResult<AttendanceRecord>;

    /// All records for one date, ordered by employee id.
    fn day_records(&self, date: NaiveDate) -> Vec<AttendanceRecord>;

    /// All records for the Monday-started week containing the anchor.
    fn week_records(&self, anchor: NaiveDate) -> Vec<AttendanceRecord>;

    /// Inserts or replaces a record wholesale. Used by data seeding.
    fn put_record(&self, record: AttendanceRecord);
}

/// Access to the leave-request ledger.
pub trait LeaveStore {
    /// Validates and stores a new pending request.
    fn submit_leave(&self, draft: LeaveDraft, applied_on: NaiveDate)
    -> DayflowResult<LeaveRequest>;

    /// Every request, newest submission first.
    fn leave_requests(&self) -> Vec<LeaveRequest>;

    /// Requests belonging to one employee, newest submission first.
    fn leave_requests_for(&self, employee_id: &str) -> Vec<LeaveRequest>;

    /// Applies an admin decision and returns the updated request.
    fn decide_leave(&self, id: Uuid, decision: LeaveDecision) -> DayflowResult<LeaveRequest>;

    /// The remaining leave allowance for one employee.
    fn leave_balance(&self, employee_id: &str) -> DayflowResult<LeaveBalance>;
}

/// The full storage interface handlers depend on.
pub trait Store:
    EmployeeStore + SalaryStore + AttendanceStore + LeaveStore + Send + Sync
{
}

impl<T> Store for T where T: EmployeeStore + SalaryStore + AttendanceStore + LeaveStore + Send + Sync
{}
