//! Role Model
//!
//! Roles form a fixed, closed hierarchy. Every role has a distinct level, so
//! comparing levels is enough to order them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role name (closed set, ordered by hierarchy level)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Clerk,
    Faculty,
    Ccc,
    Hod,
    Admin,
}

impl RoleName {
    /// All roles, lowest level first
    pub const ALL: [RoleName; 5] = [
        RoleName::Clerk,
        RoleName::Faculty,
        RoleName::Ccc,
        RoleName::Hod,
        RoleName::Admin,
    ];

    /// Hierarchy level: clerk=1 … admin=5
    pub const fn level(self) -> u8 {
        match self {
            RoleName::Clerk => 1,
            RoleName::Faculty => 2,
            RoleName::Ccc => 3,
            RoleName::Hod => 4,
            RoleName::Admin => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RoleName::Clerk => "clerk",
            RoleName::Faculty => "faculty",
            RoleName::Ccc => "ccc",
            RoleName::Hod => "hod",
            RoleName::Admin => "admin",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unknown role spelling
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for RoleName {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleName::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Role entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_id: i64,
    pub role_name: RoleName,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Return the role with the highest hierarchy level, or `None` for no roles
pub fn highest_role<I>(roles: I) -> Option<RoleName>
where
    I: IntoIterator<Item = RoleName>,
{
    roles.into_iter().max_by_key(|r| r.level())
}

/// Check if `roles` contains `target`
pub fn has_role(roles: &[RoleName], target: RoleName) -> bool {
    roles.contains(&target)
}

/// Check if `roles` contains any of `targets`
pub fn has_any_role(roles: &[RoleName], targets: &[RoleName]) -> bool {
    roles.iter().any(|r| targets.contains(r))
}
