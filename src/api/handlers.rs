//! HTTP request handlers for the Dayflow API.
//!
//! This module contains the handler functions for all API endpoints.
//! Each handler narrows the caller's [`CurrentUser`] to a [`Viewer`]
//! exactly once and scopes the response through it.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::attendance::parse_hhmm;
use crate::leave::{LeaveDecision, LeaveDraft};
use crate::models::{
    AttendanceRecord, CompanyStructure, CurrentUser, EmployeeSalary, Viewer,
};
use crate::payroll::{breakdown, structure_gross, summarize};
use crate::store::ProfileUpdate;

use super::request::{
    CheckInRequest, CheckOutRequest, DateQuery, EmployeeQuery, LeaveApplication,
    ProfileUpdateRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CompanyStructureResponse, EmployeeSalaryResponse, PayrollOverview,
    PayrollRow,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees))
        .route("/profile", put(update_profile))
        .route("/attendance/day", get(attendance_day))
        .route("/attendance/week", get(attendance_week))
        .route("/attendance/check-in", post(check_in))
        .route("/attendance/check-out", post(check_out))
        .route("/leave", get(list_leave).post(apply_leave))
        .route("/leave/balance", get(leave_balance))
        .route("/leave/:id/approve", post(approve_leave))
        .route("/leave/:id/reject", post(reject_leave))
        .route("/salary/structure", get(get_structure).put(put_structure))
        .route("/salary/employees/:id", get(get_salary).put(put_salary))
        .route("/payroll", get(payroll))
        .with_state(state)
}

/// Unwraps a JSON body, turning axum's rejection into an API error.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

/// Restricts records to what the viewer may see.
fn scope_records(viewer: &Viewer, records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
    match viewer {
        Viewer::AdminView => records,
        Viewer::EmployeeView { employee_id } => records
            .into_iter()
            .filter(|record| &record.employee_id == employee_id)
            .collect(),
    }
}

/// Handler for GET /employees.
async fn list_employees(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    match Viewer::from(user) {
        Viewer::AdminView => Ok(Json(state.store().employees())),
        Viewer::EmployeeView { employee_id } => {
            let employee = state.store().employee(&employee_id)?;
            Ok(Json(vec![employee]))
        }
    }
}

/// Handler for PUT /profile.
///
/// Always applies to the caller's own record, whatever their role.
async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<ProfileUpdateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let body = parse_json(payload, correlation_id)?;

    let employee = state.store().update_profile(
        &user.employee_id,
        ProfileUpdate {
            email: body.email,
            phone: body.phone,
        },
    )?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        "Profile updated"
    );
    Ok(Json(employee))
}

/// Handler for GET /attendance/day.
async fn attendance_day(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let viewer = Viewer::from(user);
    let records = state.store().day_records(query.date);
    Ok(Json(scope_records(&viewer, records)))
}

/// Handler for GET /attendance/week.
///
/// The week always starts on Monday; any date inside it may anchor.
async fn attendance_week(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let viewer = Viewer::from(user);
    let records = state.store().week_records(query.date);
    Ok(Json(scope_records(&viewer, records)))
}

/// Handler for POST /attendance/check-in.
async fn check_in(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let body = parse_json(payload, correlation_id)?;
    let time = parse_hhmm(&body.time)?;

    let record = state.store().check_in(&user.employee_id, body.date, time)?;
    info!(
        correlation_id = %correlation_id,
        employee_id = %record.employee_id,
        date = %record.date,
        status = ?record.status,
        "Check-in recorded"
    );
    Ok(Json(record))
}

/// Handler for POST /attendance/check-out.
async fn check_out(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<CheckOutRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let body = parse_json(payload, correlation_id)?;
    let time = parse_hhmm(&body.time)?;

    let record = state
        .store()
        .check_out(&user.employee_id, body.date, time)?;
    info!(
        correlation_id = %correlation_id,
        employee_id = %record.employee_id,
        date = %record.date,
        work_hours = ?record.work_hours,
        "Check-out recorded"
    );
    Ok(Json(record))
}

/// Handler for GET /leave.
async fn list_leave(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    match Viewer::from(user) {
        Viewer::AdminView => Ok(Json(state.store().leave_requests())),
        Viewer::EmployeeView { employee_id } => {
            Ok(Json(state.store().leave_requests_for(&employee_id)))
        }
    }
}

/// Handler for POST /leave.
async fn apply_leave(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<LeaveApplication>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let caller_id = user.employee_id.clone();
    let viewer = Viewer::from(user);
    let body = parse_json(payload, correlation_id)?;

    // Employees apply for themselves; admins may name someone else.
    let employee_id = match (&viewer, body.employee_id) {
        (Viewer::AdminView, Some(id)) => id,
        (Viewer::EmployeeView { employee_id }, Some(id)) if id != *employee_id => {
            return Err(ApiErrorResponse::forbidden());
        }
        _ => caller_id,
    };
    let employee = state.store().employee(&employee_id)?;

    let draft = LeaveDraft {
        employee_id: employee.id,
        employee_name: employee.name,
        leave_type: body.leave_type,
        start_date: body.start_date,
        end_date: body.end_date,
        reason: body.reason,
    };
    let request = state
        .store()
        .submit_leave(draft, Utc::now().date_naive())?;

    info!(
        correlation_id = %correlation_id,
        request_id = %request.id,
        employee_id = %request.employee_id,
        days = request.days,
        "Leave request submitted"
    );
    Ok((StatusCode::CREATED, Json(request)))
}

/// Handler for GET /leave/balance.
async fn leave_balance(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<EmployeeQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let caller_id = user.employee_id.clone();
    let employee_id = match (Viewer::from(user), query.employee_id) {
        (Viewer::AdminView, Some(id)) => id,
        (Viewer::EmployeeView { .. }, Some(id)) if id != caller_id => {
            return Err(ApiErrorResponse::forbidden());
        }
        _ => caller_id,
    };

    let balance = state.store().leave_balance(&employee_id)?;
    Ok(Json(balance))
}

/// Handler for POST /leave/:id/approve.
async fn approve_leave(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    decide_leave(state, user, id, LeaveDecision::Approve)
}

/// Handler for POST /leave/:id/reject.
async fn reject_leave(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    decide_leave(state, user, id, LeaveDecision::Reject)
}

fn decide_leave(
    state: AppState,
    user: CurrentUser,
    id: Uuid,
    decision: LeaveDecision,
) -> Result<Json<crate::models::LeaveRequest>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    if !Viewer::from(user).is_admin() {
        return Err(ApiErrorResponse::forbidden());
    }

    let request = state.store().decide_leave(id, decision)?;
    info!(
        correlation_id = %correlation_id,
        request_id = %request.id,
        status = %request.status,
        "Leave request decided"
    );
    Ok(Json(request))
}

/// Handler for GET /salary/structure.
async fn get_structure(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let structure = state.store().company_structure();
    Ok(Json(CompanyStructureResponse {
        components_total: structure_gross(&structure),
        structure,
    }))
}

/// Handler for PUT /salary/structure.
async fn put_structure(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<CompanyStructure>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    if !Viewer::from(user).is_admin() {
        return Err(ApiErrorResponse::forbidden());
    }
    let structure = parse_json(payload, correlation_id)?;

    state.store().replace_company_structure(structure)?;
    info!(correlation_id = %correlation_id, "Company structure replaced");
    let structure = state.store().company_structure();
    Ok(Json(CompanyStructureResponse {
        components_total: structure_gross(&structure),
        structure,
    }))
}

/// Handler for GET /salary/employees/:id.
async fn get_salary(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    match Viewer::from(user) {
        Viewer::EmployeeView { employee_id } if employee_id != id => {
            return Err(ApiErrorResponse::forbidden());
        }
        _ => {}
    }

    let salary = state.store().employee_salary(&id)?;
    Ok(Json(EmployeeSalaryResponse {
        employee_id: id,
        breakdown: breakdown(&salary),
        salary,
    }))
}

/// Handler for PUT /salary/employees/:id.
async fn put_salary(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeSalary>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    if !Viewer::from(user).is_admin() {
        return Err(ApiErrorResponse::forbidden());
    }
    let salary = parse_json(payload, correlation_id)?;

    state.store().replace_employee_salary(&id, salary)?;
    let totals = breakdown(&salary);
    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        net_salary = %totals.net_salary,
        "Employee salary replaced"
    );
    Ok(Json(EmployeeSalaryResponse {
        employee_id: id,
        salary,
        breakdown: totals,
    }))
}

/// Handler for GET /payroll.
///
/// Admins get the company table with totals; employees get their own
/// payment history.
async fn payroll(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Response, ApiErrorResponse> {
    match Viewer::from(user) {
        Viewer::AdminView => {
            let rows = state.store().payroll_rows();
            let summary = summarize(rows.iter().map(|(_, salary, status)| (salary, *status)));
            let rows = rows
                .into_iter()
                .map(|(employee, salary, status)| PayrollRow {
                    employee_id: employee.id,
                    employee_name: employee.name,
                    department: employee.department,
                    net_salary: breakdown(&salary).net_salary,
                    status,
                })
                .collect();
            Ok(Json(PayrollOverview { summary, rows }).into_response())
        }
        Viewer::EmployeeView { employee_id } => {
            let history = state.store().payroll_history(&employee_id)?;
            Ok(Json(history).into_response())
        }
    }
}
