use crate::storage::StorageError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared_types::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Chat store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unavailable(reason) => AppError::StoreUnavailable(reason),
            other => AppError::Storage(other),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_response = ErrorResponse {
            error: self.error_type().to_string(),
            message: self.to_string(),
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::StoreUnavailable(_) => "store_unavailable",
            AppError::Storage(_) => "storage_error",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
