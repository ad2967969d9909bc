//! Employee and role resolution

use shared::models::{Employee, EmployeeWithRoles, UserEmployee, UserSummary};
use sqlx::SqlitePool;

use crate::db;
use crate::util::now_millis;

pub async fn get_employee_with_roles(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Option<EmployeeWithRoles>, sqlx::Error> {
    let Some(employee) = db::employees::find_by_id(pool, employee_id).await? else {
        return Ok(None);
    };
    let roles = db::employees::roles_for(pool, employee_id).await?;
    Ok(Some(EmployeeWithRoles { employee, roles }))
}

/// Resolve a login user to its employee record and roles
///
/// `None` when the user does not exist. A user without a linked employee
/// resolves with no employee and no roles.
pub async fn get_user_employee(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<UserEmployee>, sqlx::Error> {
    let Some(user) = db::users::find_by_id(pool, user_id).await? else {
        return Ok(None);
    };

    let linked = match user.employee_id.as_deref() {
        Some(employee_id) => get_employee_with_roles(pool, employee_id).await?,
        None => None,
    };
    let (employee, roles) = match linked {
        Some(with_roles) => (Some(with_roles.employee), with_roles.roles),
        None => (None, Vec::new()),
    };

    Ok(Some(UserEmployee {
        user: UserSummary::from(&user),
        employee,
        roles,
    }))
}

/// Link a user to an employee; false when the employee does not exist
pub async fn link_user_to_employee(
    pool: &SqlitePool,
    user_id: &str,
    employee_id: &str,
) -> Result<bool, sqlx::Error> {
    if db::employees::find_by_id(pool, employee_id).await?.is_none() {
        return Ok(false);
    }
    db::users::set_employee(pool, user_id, employee_id, now_millis()).await
}

pub async fn get_employee_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    db::employees::find_by_email(pool, email).await
}

/// Every employee with its roles, ordered by first name then last name
pub async fn list_employees_with_roles(
    pool: &SqlitePool,
) -> Result<Vec<EmployeeWithRoles>, sqlx::Error> {
    let employees = db::employees::list(pool).await?;
    let mut out = Vec::with_capacity(employees.len());
    for employee in employees {
        let roles = db::employees::roles_for(pool, &employee.employee_id).await?;
        out.push(EmployeeWithRoles { employee, roles });
    }
    Ok(out)
}
