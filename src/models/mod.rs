//! Domain models for the Dayflow engine.

mod attendance;
mod employee;
mod leave;
mod payroll;
mod salary;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{CurrentUser, Employee, EmployeeStatus, Role, Viewer};
pub use leave::{LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};
pub use payroll::{PayrollRecord, PayrollStatus, PayrollSummary};
pub use salary::{CompanyStructure, EmployeeSalary, PfContribution, PfShare, SalaryComponent};
