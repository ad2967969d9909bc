//! Service layer: employee/role resolution, event queries and participation

pub mod employees;
pub mod events;
pub mod participation;
