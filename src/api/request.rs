//! Request types for the Dayflow API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::LeaveType;

/// Query parameter selecting the day (or week) to report on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateQuery {
    /// The date of interest, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Optional employee selector for admin queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeQuery {
    /// The employee of interest; defaults to the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

/// Body for POST /attendance/check-in.
///
/// The employee is taken from the caller's identity, never the body;
/// the time is a 24-hour "HH:MM" string from the client clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// The day being checked into.
    pub date: NaiveDate,
    /// Check-in time as "HH:MM".
    pub time: String,
}

/// Body for POST /attendance/check-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRequest {
    /// The day being checked out of.
    pub date: NaiveDate,
    /// Check-out time as "HH:MM".
    pub time: String,
}

/// Body for POST /leave.
///
/// Employees always apply for themselves; `employee_id` is honored only
/// when an admin submits on someone's behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// Target employee, admin submissions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The stated reason for the request.
    pub reason: String,
}

/// Body for PUT /profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    /// New contact email, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone number, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
