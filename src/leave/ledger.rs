//! Leave submission and decision rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DayflowError, DayflowResult};
use crate::models::{LeaveRequest, LeaveStatus, LeaveType};

/// The fields an employee supplies when requesting leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDraft {
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
    /// The stated reason for the request.
    pub reason: String,
}

/// An admin's decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDecision {
    /// Grant the request.
    Approve,
    /// Decline the request.
    Reject,
}

impl LeaveDecision {
    /// The terminal status this decision moves a request to.
    pub fn target(&self) -> LeaveStatus {
        match self {
            LeaveDecision::Approve => LeaveStatus::Approved,
            LeaveDecision::Reject => LeaveStatus::Rejected,
        }
    }
}

/// What applying a decision did to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    /// The request moved from pending to the decision's terminal state.
    Applied,
    /// The request was already in the decision's terminal state; nothing changed.
    AlreadyDecided,
}

/// Counts the whole days in an inclusive date range.
///
/// A range ending before it starts is rejected, so the count is always
/// at least 1 (a single-day request covers one day).
///
/// # Example
///
/// ```
/// use dayflow_engine::leave::days_inclusive;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(days_inclusive(start, end).unwrap(), 3);
/// assert_eq!(days_inclusive(start, start).unwrap(), 1);
/// assert!(days_inclusive(end, start).is_err());
/// ```
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> DayflowResult<i64> {
    if end < start {
        return Err(DayflowError::InvalidDateRange { start, end });
    }
    Ok((end - start).num_days() + 1)
}

/// Validates a draft and builds the pending request.
///
/// The reason must be non-empty and the date range well-ordered; `days`
/// is computed here and fixed for the life of the request. Every
/// submission gets a fresh id — identical drafts produce distinct
/// records.
pub fn submit(draft: LeaveDraft, applied_on: NaiveDate) -> DayflowResult<LeaveRequest> {
    if draft.employee_id.trim().is_empty() {
        return Err(DayflowError::ValidationError {
            field: "employee_id".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if draft.reason.trim().is_empty() {
        return Err(DayflowError::ValidationError {
            field: "reason".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    let days = days_inclusive(draft.start_date, draft.end_date)?;

    Ok(LeaveRequest {
        id: Uuid::new_v4(),
        employee_id: draft.employee_id,
        employee_name: draft.employee_name,
        leave_type: draft.leave_type,
        start_date: draft.start_date,
        end_date: draft.end_date,
        days,
        reason: draft.reason,
        status: LeaveStatus::Pending,
        applied_on,
    })
}

/// Applies an admin decision to a request.
///
/// Pending requests move to the decision's terminal state. Repeating a
/// decision already in effect is a no-op; the opposite decision on a
/// terminal request is an invalid transition.
pub fn decide(
    request: &mut LeaveRequest,
    decision: LeaveDecision,
) -> DayflowResult<DecisionOutcome> {
    let target = decision.target();

    if request.status == target {
        return Ok(DecisionOutcome::AlreadyDecided);
    }
    if request.status.is_terminal() {
        return Err(DayflowError::InvalidLeaveTransition {
            id: request.id.to_string(),
            status: request.status,
            attempted: target,
        });
    }

    request.status = target;
    Ok(DecisionOutcome::Applied)
}
