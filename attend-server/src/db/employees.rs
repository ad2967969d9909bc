use shared::models::{Employee, Role, RoleName};
use sqlx::SqlitePool;

use super::parse_column;
use crate::util::millis_to_datetime;

#[derive(Debug, sqlx::FromRow)]
pub struct EmployeeRow {
    pub employee_id: String,
    pub employee_type: String,
    pub grade: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub location: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = sqlx::Error;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Employee {
            employee_type: parse_column(&row.employee_type)?,
            grade: row.grade.as_deref().map(parse_column).transpose()?,
            employee_id: row.employee_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            mobile: row.mobile,
            location: row.location,
            created_at: millis_to_datetime(row.created_at),
            updated_at: millis_to_datetime(row.updated_at),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RoleRow {
    role_id: i64,
    role_name: String,
    description: Option<String>,
    created_at: i64,
}

impl TryFrom<RoleRow> for Role {
    type Error = sqlx::Error;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        Ok(Role {
            role_id: row.role_id,
            role_name: parse_column(&row.role_name)?,
            description: row.description,
            created_at: millis_to_datetime(row.created_at),
        })
    }
}

/// Fields of an imported employee
#[derive(Debug, Clone)]
pub struct NewEmployee<'a> {
    pub employee_id: &'a str,
    pub employee_type: shared::models::EmployeeType,
    pub grade: Option<shared::models::Grade>,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub mobile: Option<&'a str>,
    pub location: Option<&'a str>,
}

/// Insert one employee (the batch-import primitive)
pub async fn create(pool: &SqlitePool, new: &NewEmployee<'_>, now: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO attendease_employee
            (employee_id, employee_type, grade, first_name, last_name, email, mobile, location, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(new.employee_id)
    .bind(new.employee_type.as_str())
    .bind(new.grade.map(|g| g.as_str()))
    .bind(new.first_name)
    .bind(new.last_name)
    .bind(new.email)
    .bind(new.mobile)
    .bind(new.location)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

/// Assign a role; assigning a held role again is a no-op
pub async fn assign_role(
    pool: &SqlitePool,
    employee_id: &str,
    role: RoleName,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT OR IGNORE INTO attendease_employee_role (employee_id, role_id, assigned_at)
         SELECT ?, role_id, ? FROM attendease_role WHERE role_name = ?",
    )
    .bind(employee_id)
    .bind(now)
    .bind(role.as_str())
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, employee_id: &str) -> Result<Option<Employee>, sqlx::Error> {
    let row: Option<EmployeeRow> =
        sqlx::query_as("SELECT * FROM attendease_employee WHERE employee_id = ?")
            .bind(employee_id)
            .fetch_optional(pool)
            .await?;
    row.map(Employee::try_from).transpose()
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Employee>, sqlx::Error> {
    let row: Option<EmployeeRow> =
        sqlx::query_as("SELECT * FROM attendease_employee WHERE email = ? COLLATE NOCASE")
            .bind(email)
            .fetch_optional(pool)
            .await?;
    row.map(Employee::try_from).transpose()
}

/// Roles held by an employee, lowest level first
pub async fn roles_for(pool: &SqlitePool, employee_id: &str) -> Result<Vec<Role>, sqlx::Error> {
    let rows: Vec<RoleRow> = sqlx::query_as(
        "SELECT r.role_id, r.role_name, r.description, r.created_at
         FROM attendease_employee_role er
         JOIN attendease_role r ON r.role_id = er.role_id
         WHERE er.employee_id = ?",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    let mut roles = rows
        .into_iter()
        .map(Role::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    roles.sort_by_key(|r| r.role_name.level());
    Ok(roles)
}

/// Every employee, ordered by first name then last name
pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, sqlx::Error> {
    let rows: Vec<EmployeeRow> =
        sqlx::query_as("SELECT * FROM attendease_employee ORDER BY first_name, last_name")
            .fetch_all(pool)
            .await?;
    rows.into_iter().map(Employee::try_from).collect()
}
