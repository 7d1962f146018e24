//! Employee model and the viewer capability.
//!
//! This module defines the Employee struct for directory records, and the
//! [`Viewer`] capability that callers derive once from a [`CurrentUser`]
//! at the boundary instead of re-checking roles throughout the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents the employment state shown in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Actively employed and working.
    Active,
    /// No longer active (offboarded or suspended).
    Inactive,
    /// Currently away on approved leave.
    OnLeave,
}

/// Represents an employee in the company directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (e.g., "EMP002").
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// Work email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The employee's job title.
    pub position: String,
    /// Current employment state.
    pub status: EmployeeStatus,
    /// The date the employee joined the company.
    pub join_date: NaiveDate,
}

/// The role attached to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// HR administrator with access to all records.
    Admin,
    /// Regular employee restricted to their own records.
    Employee,
}

/// The identity handed to the engine by the authentication collaborator.
///
/// The engine never authenticates anyone itself; a `CurrentUser` is
/// supplied by the caller and immediately narrowed to a [`Viewer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The employee id of the signed-in user.
    pub employee_id: String,
    /// The role granted at sign-in.
    pub role: Role,
}

/// Capability selected once at the boundary from a [`CurrentUser`].
///
/// Handlers and queries branch on this variant instead of sprinkling
/// role checks through the computation paths.
///
/// # Example
///
/// ```
/// use dayflow_engine::models::{CurrentUser, Role, Viewer};
///
/// let user = CurrentUser {
///     employee_id: "EMP002".to_string(),
///     role: Role::Employee,
/// };
/// match Viewer::from(user) {
///     Viewer::AdminView => unreachable!(),
///     Viewer::EmployeeView { employee_id } => assert_eq!(employee_id, "EMP002"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// Full administrative visibility.
    AdminView,
    /// Visibility limited to one employee's own records.
    EmployeeView {
        /// The employee id the view is scoped to.
        employee_id: String,
    },
}

impl Viewer {
    /// Returns true for the administrative view.
    pub fn is_admin(&self) -> bool {
        matches!(self, Viewer::AdminView)
    }
}

impl From<CurrentUser> for Viewer {
    fn from(user: CurrentUser) -> Self {
        match user.role {
            Role::Admin => Viewer::AdminView,
            Role::Employee => Viewer::EmployeeView {
                employee_id: user.employee_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(role: Role) -> CurrentUser {
        CurrentUser {
            employee_id: "EMP002".to_string(),
            role,
        }
    }

    #[test]
    fn test_admin_user_becomes_admin_view() {
        let viewer: Viewer = make_user(Role::Admin).into();
        assert_eq!(viewer, Viewer::AdminView);
        assert!(viewer.is_admin());
    }

    #[test]
    fn test_employee_user_becomes_scoped_view() {
        let viewer: Viewer = make_user(Role::Employee).into();
        assert_eq!(
            viewer,
            Viewer::EmployeeView {
                employee_id: "EMP002".to_string()
            }
        );
        assert!(!viewer.is_admin());
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "EMP002",
            "name": "John Smith",
            "email": "john.smith@dayflow.com",
            "phone": "+1 (555) 987-6543",
            "department": "Engineering",
            "position": "Software Developer",
            "status": "active",
            "join_date": "2022-06-01"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "EMP002");
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert_eq!(
            employee.join_date,
            NaiveDate::from_ymd_opt(2022, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Active).unwrap(),
            "\"active\""
        );
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Employee).unwrap(),
            "\"employee\""
        );
    }
}
