//! Error types for the Dayflow engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the HR domain core.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::LeaveStatus;

/// The main error type for the Dayflow engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use dayflow_engine::error::DayflowError;
///
/// let error = DayflowError::EmployeeNotFound {
///     id: "EMP999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: EMP999");
/// ```
#[derive(Debug, Error)]
pub enum DayflowError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// No leave request exists with the given id.
    #[error("Leave request not found: {id}")]
    LeaveRequestNotFound {
        /// The leave request id that was not found.
        id: String,
    },

    /// A leave request in a terminal state received the opposite decision.
    #[error("Leave request '{id}' is already {status} and cannot be {attempted}")]
    InvalidLeaveTransition {
        /// The leave request id.
        id: String,
        /// The current (terminal) status of the request.
        status: LeaveStatus,
        /// The decision that was attempted.
        attempted: LeaveStatus,
    },

    /// A date range with the end before the start.
    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidDateRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// A time-of-day string that is not valid "HH:MM".
    #[error("Invalid time '{value}': expected 24-hour HH:MM")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
    },

    /// A monetary field holding a negative amount.
    #[error("Invalid amount for '{field}': {message}")]
    NegativeAmount {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A required field was missing or empty.
    #[error("Validation failed for '{field}': {message}")]
    ValidationError {
        /// The field that failed validation.
        field: String,
        /// A description of the failure.
        message: String,
    },

    /// An attendance operation that conflicts with the day's record.
    #[error("Attendance error for employee '{employee_id}': {message}")]
    AttendanceError {
        /// The employee whose record was targeted.
        employee_id: String,
        /// A description of the conflict.
        message: String,
    },
}

/// A type alias for Results that return DayflowError.
pub type DayflowResult<T> = Result<T, DayflowError>;
