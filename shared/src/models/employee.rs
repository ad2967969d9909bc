//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::{Role, RoleName};

wire_enum! {
    EmployeeType, UnknownEmployeeType {
        Teaching => "teaching",
        NonTeaching => "non-teaching",
    }
}

wire_enum! {
    /// Academic grade (teaching staff only)
    Grade, UnknownGrade {
        Professor => "professor",
        ProfessorOfPractice => "professor-of-practice",
        AssociateProfessor => "associate-professor",
        AssistantProfessor => "asst-professor",
    }
}

/// Employee identity record
///
/// Created by batch import and never deleted by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub employee_type: EmployeeType,
    pub grade: Option<Grade>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Employee together with every role assigned to it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWithRoles {
    pub employee: Employee,
    pub roles: Vec<Role>,
}

impl EmployeeWithRoles {
    pub fn role_names(&self) -> Vec<RoleName> {
        self.roles.iter().map(|r| r.role_name).collect()
    }

    /// Effective role: the highest-level role held
    pub fn highest_role(&self) -> Option<RoleName> {
        super::role::highest_role(self.role_names())
    }
}
