//! Response types for the Dayflow API.
//!
//! This module defines the error response structures and the composite
//! payloads that join store records with derived payroll figures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DayflowError;
use crate::models::{CompanyStructure, EmployeeSalary, PayrollStatus, PayrollSummary};
use crate::payroll::SalaryBreakdown;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// The response for a caller whose view does not cover the resource.
    pub fn forbidden() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            error: ApiError::new(
                "ADMIN_REQUIRED",
                "This operation is limited to administrators",
            ),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DayflowError> for ApiErrorResponse {
    fn from(error: DayflowError) -> Self {
        match error {
            DayflowError::ConfigNotFound { .. } | DayflowError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        error.to_string(),
                    ),
                }
            }
            DayflowError::EmployeeNotFound { ref id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    error.to_string(),
                    format!("No employee exists with id '{id}'"),
                ),
            },
            DayflowError::LeaveRequestNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("LEAVE_REQUEST_NOT_FOUND", error.to_string()),
            },
            DayflowError::InvalidLeaveTransition { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("INVALID_TRANSITION", error.to_string()),
            },
            DayflowError::AttendanceError { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("ATTENDANCE_CONFLICT", error.to_string()),
            },
            DayflowError::InvalidDateRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_DATE_RANGE", error.to_string()),
            },
            DayflowError::InvalidTime { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_TIME", error.to_string()),
            },
            DayflowError::NegativeAmount { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("NEGATIVE_AMOUNT", error.to_string()),
            },
            DayflowError::ValidationError { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("VALIDATION_ERROR", error.to_string()),
            },
        }
    }
}

/// The company structure joined with the sum of its earning components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyStructureResponse {
    /// The stored company-wide structure.
    pub structure: CompanyStructure,
    /// Sum of all component amounts.
    pub components_total: Decimal,
}

/// A salary record joined with its derived totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSalaryResponse {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The stored (or template) salary record.
    pub salary: EmployeeSalary,
    /// Gross, deductions and net derived from the record.
    pub breakdown: SalaryBreakdown,
}

/// One employee's line in the admin payroll table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRow {
    /// The employee id.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The department shown alongside the row.
    pub department: String,
    /// Net amount payable this month.
    pub net_salary: Decimal,
    /// Payment state for the current month.
    pub status: PayrollStatus,
}

/// The admin payroll view: totals plus the per-employee table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollOverview {
    /// Aggregated totals over all rows.
    pub summary: PayrollSummary,
    /// One row per employee, ordered by id.
    pub rows: Vec<PayrollRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = DayflowError::EmployeeNotFound {
            id: "EMP999".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[test]
    fn test_terminal_transition_maps_to_409() {
        let response: ApiErrorResponse = DayflowError::InvalidLeaveTransition {
            id: "req_001".to_string(),
            status: crate::models::LeaveStatus::Approved,
            attempted: crate::models::LeaveStatus::Rejected,
        }
        .into();

        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.error.code, "INVALID_TRANSITION");
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response: ApiErrorResponse = DayflowError::NegativeAmount {
            field: "hra".to_string(),
            message: "amount -1 is negative".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_serialization_skips_empty_details() {
        let error = ApiError::new("VALIDATION_ERROR", "reason must not be empty");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("details"));
    }
}
