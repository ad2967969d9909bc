//! Permission predicates
//!
//! Every predicate compares the caller's effective role against a fixed
//! threshold in the role hierarchy. Deleting events is the one exception:
//! it is reserved for the top role only. A missing role never passes.

use serde::{Deserialize, Serialize};

use crate::models::role::RoleName;

fn at_least(role: Option<RoleName>, threshold: RoleName) -> bool {
    role.is_some_and(|r| r.level() >= threshold.level())
}

pub fn can_view_events(role: Option<RoleName>) -> bool {
    at_least(role, RoleName::Clerk)
}

pub fn can_record_attendance(role: Option<RoleName>) -> bool {
    at_least(role, RoleName::Clerk)
}

pub fn can_view_feedback(role: Option<RoleName>) -> bool {
    at_least(role, RoleName::Faculty)
}

pub fn can_view_reports(role: Option<RoleName>) -> bool {
    at_least(role, RoleName::Ccc)
}

/// HOD and admin
pub fn can_create_events(role: Option<RoleName>) -> bool {
    at_least(role, RoleName::Hod)
}

pub fn can_edit_events(role: Option<RoleName>) -> bool {
    at_least(role, RoleName::Hod)
}

pub fn can_manage_employees(role: Option<RoleName>) -> bool {
    at_least(role, RoleName::Hod)
}

/// Admin only
pub fn can_delete_events(role: Option<RoleName>) -> bool {
    role == Some(RoleName::Admin)
}

/// Landing page for a role
pub fn home_path(role: Option<RoleName>) -> &'static str {
    match role {
        Some(RoleName::Admin) => "/admin",
        Some(_) => "/dashboard",
        None => "/login",
    }
}

/// Snapshot of every predicate for one role, sent to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub can_view_events: bool,
    pub can_create_events: bool,
    pub can_edit_events: bool,
    pub can_delete_events: bool,
    pub can_record_attendance: bool,
    pub can_view_feedback: bool,
    pub can_view_reports: bool,
    pub can_manage_employees: bool,
}

impl Permissions {
    pub fn for_role(role: Option<RoleName>) -> Self {
        Self {
            can_view_events: can_view_events(role),
            can_create_events: can_create_events(role),
            can_edit_events: can_edit_events(role),
            can_delete_events: can_delete_events(role),
            can_record_attendance: can_record_attendance(role),
            can_view_feedback: can_view_feedback(role),
            can_view_reports: can_view_reports(role),
            can_manage_employees: can_manage_employees(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_is_admin_only() {
        assert!(can_delete_events(Some(RoleName::Admin)));
        for role in [
            RoleName::Clerk,
            RoleName::Faculty,
            RoleName::Ccc,
            RoleName::Hod,
        ] {
            assert!(!can_delete_events(Some(role)), "{role} must not delete");
        }
        assert!(!can_delete_events(None));
    }

    #[test]
    fn test_none_role_denies_everything() {
        let p = Permissions::for_role(None);
        assert_eq!(
            p,
            Permissions {
                can_view_events: false,
                can_create_events: false,
                can_edit_events: false,
                can_delete_events: false,
                can_record_attendance: false,
                can_view_feedback: false,
                can_view_reports: false,
                can_manage_employees: false,
            }
        );
    }

    #[test]
    fn test_create_and_edit_thresholds() {
        assert!(!can_create_events(Some(RoleName::Ccc)));
        assert!(can_create_events(Some(RoleName::Hod)));
        assert!(can_create_events(Some(RoleName::Admin)));
        assert!(!can_edit_events(Some(RoleName::Faculty)));
        assert!(can_edit_events(Some(RoleName::Hod)));
    }

    #[test]
    fn test_predicates_are_monotonic() {
        // once a role passes, every higher role passes too (delete excepted)
        let preds: [fn(Option<RoleName>) -> bool; 7] = [
            can_view_events,
            can_record_attendance,
            can_view_feedback,
            can_view_reports,
            can_create_events,
            can_edit_events,
            can_manage_employees,
        ];
        for pred in preds {
            let results: Vec<bool> = RoleName::ALL.iter().map(|r| pred(Some(*r))).collect();
            let first_pass = results.iter().position(|ok| *ok).unwrap();
            assert!(results[first_pass..].iter().all(|ok| *ok));
        }
    }

    #[test]
    fn test_clerk_permissions() {
        let p = Permissions::for_role(Some(RoleName::Clerk));
        assert!(p.can_view_events);
        assert!(p.can_record_attendance);
        assert!(!p.can_view_feedback);
        assert!(!p.can_create_events);
    }

    #[test]
    fn test_home_path() {
        assert_eq!(home_path(Some(RoleName::Admin)), "/admin");
        assert_eq!(home_path(Some(RoleName::Hod)), "/dashboard");
        assert_eq!(home_path(Some(RoleName::Clerk)), "/dashboard");
        assert_eq!(home_path(None), "/login");
    }

    #[test]
    fn test_permissions_serialize_camel_case() {
        let json = serde_json::to_value(Permissions::for_role(Some(RoleName::Admin))).unwrap();
        assert_eq!(json["canDeleteEvents"], true);
        assert_eq!(json["canManageEmployees"], true);
    }
}
