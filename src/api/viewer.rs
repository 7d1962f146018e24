//! Caller identity extraction.
//!
//! Authentication happens upstream of this service; the gateway passes
//! the signed-in user along in `x-employee-id` and `x-role` headers.
//! This extractor turns those headers into a [`CurrentUser`] so each
//! handler narrows it to a [`crate::models::Viewer`] exactly once.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;

use crate::models::{CurrentUser, Role};

use super::response::{ApiError, ApiErrorResponse};

const EMPLOYEE_ID_HEADER: &str = "x-employee-id";
const ROLE_HEADER: &str = "x-role";

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let employee_id = header_value(parts, EMPLOYEE_ID_HEADER)?;
        let role = match header_value(parts, ROLE_HEADER)?.as_str() {
            "admin" => Role::Admin,
            "employee" => Role::Employee,
            other => {
                return Err(ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::with_details(
                        "INVALID_ROLE",
                        format!("Unknown role: {other}"),
                        "The x-role header must be 'admin' or 'employee'",
                    ),
                });
            }
        };

        Ok(CurrentUser { employee_id, role })
    }
}

fn header_value(parts: &Parts, name: &str) -> Result<String, ApiErrorResponse> {
    let value = parts.headers.get(name).ok_or_else(|| ApiErrorResponse {
        status: StatusCode::UNAUTHORIZED,
        error: ApiError::with_details(
            "MISSING_IDENTITY",
            format!("Missing required header: {name}"),
            "Requests must carry x-employee-id and x-role headers",
        ),
    })?;

    let value = value.to_str().map_err(|_| ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::new(
            "INVALID_HEADER",
            format!("Header {name} is not valid UTF-8"),
        ),
    })?;

    if value.trim().is_empty() {
        return Err(ApiErrorResponse {
            status: StatusCode::UNAUTHORIZED,
            error: ApiError::new("MISSING_IDENTITY", format!("Header {name} is empty")),
        });
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<CurrentUser, ApiErrorResponse> {
        let (mut parts, _) = request.into_parts();
        CurrentUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_both_headers_yield_user() {
        let request = Request::builder()
            .header("x-employee-id", "EMP002")
            .header("x-role", "employee")
            .body(())
            .unwrap();

        let user = extract(request).await.unwrap();
        assert_eq!(user.employee_id, "EMP002");
        assert_eq!(user.role, Role::Employee);
    }

    #[tokio::test]
    async fn test_missing_identity_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();
        let rejection = extract(request).await.unwrap_err();
        assert_eq!(rejection.status, StatusCode::UNAUTHORIZED);
        assert_eq!(rejection.error.code, "MISSING_IDENTITY");
    }

    #[tokio::test]
    async fn test_unknown_role_is_rejected() {
        let request = Request::builder()
            .header("x-employee-id", "EMP002")
            .header("x-role", "superuser")
            .body(())
            .unwrap();

        let rejection = extract(request).await.unwrap_err();
        assert_eq!(rejection.status, StatusCode::BAD_REQUEST);
        assert_eq!(rejection.error.code, "INVALID_ROLE");
    }
}
