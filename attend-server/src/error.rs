//! Service-layer error
//!
//! Services return `ServiceError` so one `?` covers both sqlx failures and
//! business-rule rejections; handlers convert it into `AppError`.

use axum::response::{IntoResponse, Response};
use shared::error::{AppError, ErrorCode};

#[derive(Debug)]
pub enum ServiceError {
    /// Storage failure: logged, answered with 500
    Db(sqlx::Error),
    /// Rejection passed through to the client as is
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(err) => err,
            ServiceError::Db(err) => {
                tracing::error!(error = %err, "Database error");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
