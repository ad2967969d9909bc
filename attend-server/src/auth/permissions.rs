//! Role-gated operations

use shared::error::AppError;
use shared::models::RoleName;
use shared::permissions as rules;

/// An operation gated on the caller's highest role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ViewEvents,
    CreateEvents,
    EditEvents,
    DeleteEvents,
    RecordAttendance,
    ViewFeedback,
    ViewReports,
    ManageEmployees,
}

impl Permission {
    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::ViewEvents => "events:view",
            Permission::CreateEvents => "events:create",
            Permission::EditEvents => "events:edit",
            Permission::DeleteEvents => "events:delete",
            Permission::RecordAttendance => "attendance:record",
            Permission::ViewFeedback => "feedback:view",
            Permission::ViewReports => "reports:view",
            Permission::ManageEmployees => "employees:manage",
        }
    }

    pub fn allows(self, role: Option<RoleName>) -> bool {
        match self {
            Permission::ViewEvents => rules::can_view_events(role),
            Permission::CreateEvents => rules::can_create_events(role),
            Permission::EditEvents => rules::can_edit_events(role),
            Permission::DeleteEvents => rules::can_delete_events(role),
            Permission::RecordAttendance => rules::can_record_attendance(role),
            Permission::ViewFeedback => rules::can_view_feedback(role),
            Permission::ViewReports => rules::can_view_reports(role),
            Permission::ManageEmployees => rules::can_manage_employees(role),
        }
    }

    /// 403 unless `role` passes
    pub fn check(self, role: Option<RoleName>) -> Result<(), AppError> {
        if self.allows(role) {
            Ok(())
        } else {
            Err(AppError::permission_denied(format!(
                "Permission denied: {}",
                self.as_str()
            ))
            .with_detail("required", self.as_str()))
        }
    }
}
