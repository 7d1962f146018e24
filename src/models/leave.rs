//! Leave request model and lifecycle states.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The category of time off being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid time off, drawn from the paid balance.
    Paid,
    /// Sick leave, drawn from the sick balance.
    Sick,
    /// Unpaid leave, unlimited.
    Unpaid,
}

/// Lifecycle state of a leave request.
///
/// `Pending` transitions to `Approved` or `Rejected`; both are terminal.
/// There is no reopening or cancellation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted and awaiting an admin decision.
    Pending,
    /// Approved by an admin (terminal).
    Approved,
    /// Rejected by an admin (terminal).
    Rejected,
}

impl LeaveStatus {
    /// Returns true once the request can no longer change state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// An employee-submitted time-off application.
///
/// `days` is computed once at submission from the inclusive date range
/// and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier assigned at submission.
    pub id: Uuid,
    /// The requesting employee's id.
    pub employee_id: String,
    /// The requesting employee's display name.
    pub employee_name: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Number of whole days requested, always >= 1.
    pub days: i64,
    /// The stated reason for the request.
    pub reason: String,
    /// Current lifecycle state.
    pub status: LeaveStatus,
    /// The date the request was submitted.
    pub applied_on: NaiveDate,
}

/// Remaining leave allowance for one employee.
///
/// Unpaid leave has no counter; it is always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Paid leave days remaining.
    pub paid: u32,
    /// Sick leave days remaining.
    pub sick: u32,
}

impl Default for LeaveBalance {
    fn default() -> Self {
        // Company-wide annual allowance.
        Self { paid: 12, sick: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_not_terminal() {
        assert!(!LeaveStatus::Pending.is_terminal());
        assert!(LeaveStatus::Approved.is_terminal());
        assert!(LeaveStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(LeaveStatus::Pending.to_string(), "pending");
        assert_eq!(LeaveStatus::Approved.to_string(), "approved");
        assert_eq!(LeaveStatus::Rejected.to_string(), "rejected");
    }

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(serde_json::to_string(&LeaveType::Paid).unwrap(), "\"paid\"");
        assert_eq!(serde_json::to_string(&LeaveType::Sick).unwrap(), "\"sick\"");
        assert_eq!(
            serde_json::to_string(&LeaveType::Unpaid).unwrap(),
            "\"unpaid\""
        );
    }

    #[test]
    fn test_default_balance_matches_company_allowance() {
        let balance = LeaveBalance::default();
        assert_eq!(balance.paid, 12);
        assert_eq!(balance.sick, 5);
    }

    #[test]
    fn test_request_round_trip() {
        let request = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: "EMP002".to_string(),
            employee_name: "John Smith".to_string(),
            leave_type: LeaveType::Paid,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            days: 3,
            reason: "Family vacation".to_string(),
            status: LeaveStatus::Pending,
            applied_on: NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(),
        };

        let json = serde_json::to_string(&request).unwrap();
        let back: LeaveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, back);
    }
}
