use shared::event_utils::event_slug;
use shared::models::{Employee, Event, EventStatus, EventType, EventWithCreator};
use sqlx::SqlitePool;

use super::employees::EmployeeRow;
use super::parse_column;
use crate::util::millis_to_datetime;

#[derive(Debug, sqlx::FromRow)]
pub struct EventRow {
    pub event_id: i64,
    pub event_type: String,
    pub event_date: i64,
    pub event_title: String,
    pub event_description: Option<String>,
    pub event_status: String,
    pub event_delegated_to: Option<String>,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<EventRow> for Event {
    type Error = sqlx::Error;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            event_id: row.event_id,
            event_type: parse_column(&row.event_type)?,
            event_date: millis_to_datetime(row.event_date),
            event_title: row.event_title,
            event_description: row.event_description,
            event_status: parse_column(&row.event_status)?,
            event_delegated_to: row.event_delegated_to,
            created_by: row.created_by,
            created_at: millis_to_datetime(row.created_at),
            updated_at: millis_to_datetime(row.updated_at),
        })
    }
}

/// Event left-joined with its creator's employee columns
#[derive(Debug, sqlx::FromRow)]
struct EventCreatorRow {
    #[sqlx(flatten)]
    event: EventRow,
    c_employee_id: Option<String>,
    c_employee_type: Option<String>,
    c_grade: Option<String>,
    c_first_name: Option<String>,
    c_last_name: Option<String>,
    c_email: Option<String>,
    c_mobile: Option<String>,
    c_location: Option<String>,
    c_created_at: Option<i64>,
    c_updated_at: Option<i64>,
}

impl TryFrom<EventCreatorRow> for EventWithCreator {
    type Error = sqlx::Error;

    fn try_from(row: EventCreatorRow) -> Result<Self, Self::Error> {
        let creator = match (row.c_employee_id, row.c_employee_type, row.c_email) {
            (Some(employee_id), Some(employee_type), Some(email)) => {
                Some(Employee::try_from(EmployeeRow {
                    employee_id,
                    employee_type,
                    grade: row.c_grade,
                    first_name: row.c_first_name.unwrap_or_default(),
                    last_name: row.c_last_name.unwrap_or_default(),
                    email,
                    mobile: row.c_mobile,
                    location: row.c_location,
                    created_at: row.c_created_at.unwrap_or_default(),
                    updated_at: row.c_updated_at.unwrap_or_default(),
                })?)
            }
            _ => None,
        };
        Ok(EventWithCreator {
            event: Event::try_from(row.event)?,
            creator,
        })
    }
}

/// Fields of a new event; status always starts as `created`
#[derive(Debug, Clone)]
pub struct NewEvent<'a> {
    pub event_type: EventType,
    pub event_date: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub created_by: &'a str,
}

fn collect(rows: Vec<EventRow>) -> Result<Vec<Event>, sqlx::Error> {
    rows.into_iter().map(Event::try_from).collect()
}

/// `event_date >= now` and status `created`, soonest first
pub async fn upcoming(pool: &SqlitePool, now: i64) -> Result<Vec<Event>, sqlx::Error> {
    let rows: Vec<EventRow> = sqlx::query_as(
        "SELECT * FROM attendease_event
         WHERE event_date >= ? AND event_status = 'created'
         ORDER BY event_date ASC",
    )
    .bind(now)
    .fetch_all(pool)
    .await?;
    collect(rows)
}

/// `day_start <= event_date < day_end` and status `inprogress`, earliest first
pub async fn in_progress(
    pool: &SqlitePool,
    day_start: i64,
    day_end: i64,
) -> Result<Vec<Event>, sqlx::Error> {
    let rows: Vec<EventRow> = sqlx::query_as(
        "SELECT * FROM attendease_event
         WHERE event_date >= ? AND event_date < ? AND event_status = 'inprogress'
         ORDER BY event_date ASC",
    )
    .bind(day_start)
    .bind(day_end)
    .fetch_all(pool)
    .await?;
    collect(rows)
}

/// `event_date <= now` and status `completed`, most recent first
pub async fn past(pool: &SqlitePool, now: i64) -> Result<Vec<Event>, sqlx::Error> {
    let rows: Vec<EventRow> = sqlx::query_as(
        "SELECT * FROM attendease_event
         WHERE event_date <= ? AND event_status = 'completed'
         ORDER BY event_date DESC",
    )
    .bind(now)
    .fetch_all(pool)
    .await?;
    collect(rows)
}

/// Every event with its creator, newest first
pub async fn list_with_creators(pool: &SqlitePool) -> Result<Vec<EventWithCreator>, sqlx::Error> {
    let rows: Vec<EventCreatorRow> = sqlx::query_as(
        "SELECT e.*,
                c.employee_id AS c_employee_id, c.employee_type AS c_employee_type,
                c.grade AS c_grade, c.first_name AS c_first_name, c.last_name AS c_last_name,
                c.email AS c_email, c.mobile AS c_mobile, c.location AS c_location,
                c.created_at AS c_created_at, c.updated_at AS c_updated_at
         FROM attendease_event e
         LEFT JOIN attendease_employee c ON c.employee_id = e.created_by
         ORDER BY e.event_date DESC, e.event_id DESC",
    )
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(EventWithCreator::try_from).collect()
}

pub async fn find_by_id(pool: &SqlitePool, event_id: i64) -> Result<Option<Event>, sqlx::Error> {
    let row: Option<EventRow> =
        sqlx::query_as("SELECT * FROM attendease_event WHERE event_id = ?")
            .bind(event_id)
            .fetch_optional(pool)
            .await?;
    row.map(Event::try_from).transpose()
}

/// Most recent non-cancelled event whose title slug equals `code`
pub async fn find_by_code(pool: &SqlitePool, code: &str) -> Result<Option<Event>, sqlx::Error> {
    let row: Option<EventRow> = sqlx::query_as(
        "SELECT * FROM attendease_event
         WHERE event_code = ? AND event_status != 'cancelled'
         ORDER BY event_date DESC, event_id DESC
         LIMIT 1",
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;
    row.map(Event::try_from).transpose()
}

/// Insert and return the new event id; the code is derived from the title
pub async fn create(pool: &SqlitePool, new: &NewEvent<'_>, now: i64) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO attendease_event
            (event_type, event_date, event_title, event_code, event_description, event_status, created_by, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, 'created', ?, ?, ?)",
    )
    .bind(new.event_type.as_str())
    .bind(new.event_date)
    .bind(new.title)
    .bind(event_slug(new.title))
    .bind(new.description)
    .bind(new.created_by)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Returns false when no event has this id
pub async fn update_status(
    pool: &SqlitePool,
    event_id: i64,
    status: EventStatus,
    now: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE attendease_event SET event_status = ?, updated_at = ? WHERE event_id = ?",
    )
    .bind(status.as_str())
    .bind(now)
    .bind(event_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Attendance and feedback rows go with it (cascade)
pub async fn delete(pool: &SqlitePool, event_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM attendease_event WHERE event_id = ?")
        .bind(event_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
