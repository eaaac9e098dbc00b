// Erreurs de l'API et leur conversion en réponses HTTP

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use std::fmt;
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::password::PasswordError;

/// Les quatre familles d'erreurs remontées jusqu'à la frontière HTTP.
/// Seul `NotFound` donne un 404, tout le reste est un 400.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ConstraintViolation(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Storage(String),
}

impl AppError {
    pub fn not_found(table: &str, key: impl fmt::Debug) -> Self {
        AppError::NotFound(format!("{} {:?} not found", table, key))
    }

    pub fn missing_parent(table: &str, id: i32) -> Self {
        AppError::ConstraintViolation(format!("{} {} does not exist", table, id))
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::ConstraintViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => AppError::ConstraintViolation(msg),
            _ => match err {
                DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
                other => AppError::Storage(other.to_string()),
            },
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Storage(msg) = self {
            tracing::warn!("Storage error: {}", msg);
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
