//! HTTP API module for the Dayflow engine.
//!
//! This module provides the REST endpoints behind the Dayflow HR
//! views: the employee directory, attendance day/week reports and
//! check-in/check-out, the leave ledger, and salary/payroll reads and
//! admin edits. Caller identity arrives in `x-employee-id`/`x-role`
//! headers and is narrowed to a viewer capability per request.

mod handlers;
mod request;
mod response;
mod state;
mod viewer;

pub use handlers::create_router;
pub use request::{CheckInRequest, CheckOutRequest, LeaveApplication, ProfileUpdateRequest};
pub use response::{
    ApiError, CompanyStructureResponse, EmployeeSalaryResponse, PayrollOverview, PayrollRow,
};
pub use state::AppState;
