//! Login user, session and "who am I" models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::employee::Employee;
use super::role::{Role, RoleName, highest_role};
use crate::permissions::{Permissions, home_path};

/// Login account owner. Distinct from [`Employee`]; the link is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub image: Option<String>,
    pub employee_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public subset of [`User`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            employee_id: user.employee_id.clone(),
        }
    }
}

/// User resolved to its employee record and roles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEmployee {
    pub user: UserSummary,
    pub employee: Option<Employee>,
    pub roles: Vec<Role>,
}

impl UserEmployee {
    pub fn role_names(&self) -> Vec<RoleName> {
        self.roles.iter().map(|r| r.role_name).collect()
    }

    pub fn highest_role(&self) -> Option<RoleName> {
        highest_role(self.role_names())
    }
}

/// Response of `GET /api/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserView {
    pub user: UserSummary,
    pub employee: Option<Employee>,
    pub roles: Vec<RoleName>,
    pub highest_role: Option<RoleName>,
    pub permissions: Permissions,
    pub home: String,
}

impl From<UserEmployee> for CurrentUserView {
    fn from(ue: UserEmployee) -> Self {
        let roles = ue.role_names();
        let highest = highest_role(roles.iter().copied());
        Self {
            user: ue.user,
            employee: ue.employee,
            roles,
            highest_role: highest,
            permissions: Permissions::for_role(highest),
            home: home_path(highest).to_string(),
        }
    }
}

/// Response of `GET /api/auth/get-session`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserSummary,
}

/// Email sign-up payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUp {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Email sign-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> UserSummary {
        UserSummary {
            id: "u1".into(),
            name: "Asha".into(),
            email: "asha@example.edu".into(),
            employee_id: None,
        }
    }

    #[test]
    fn test_view_without_roles_is_guest() {
        let view = CurrentUserView::from(UserEmployee {
            user: summary(),
            employee: None,
            roles: vec![],
        });
        assert_eq!(view.highest_role, None);
        assert_eq!(view.home, "/login");
        assert!(!view.permissions.can_view_events);
    }

    #[test]
    fn test_view_uses_highest_role() {
        let role = |role_id, role_name| Role {
            role_id,
            role_name,
            description: None,
            created_at: chrono::DateTime::UNIX_EPOCH,
        };
        let view = CurrentUserView::from(UserEmployee {
            user: summary(),
            employee: None,
            roles: vec![role(2, RoleName::Faculty), role(5, RoleName::Admin)],
        });
        assert_eq!(view.highest_role, Some(RoleName::Admin));
        assert_eq!(view.home, "/admin");
        assert!(view.permissions.can_delete_events);
        assert_eq!(view.roles, vec![RoleName::Faculty, RoleName::Admin]);
    }

    #[test]
    fn test_summary_omits_missing_employee_id() {
        let json = serde_json::to_value(summary()).unwrap();
        assert!(json.get("employeeId").is_none());
    }
}
