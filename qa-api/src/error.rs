use crate::storage::StorageError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use qa_types::ErrorResponse;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The request body or path did not have the expected shape
    #[error("{0}")]
    Validation(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Storage(StorageError::QuestionNotFound(_))
            | AppError::Storage(StorageError::AnswerNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Storage(StorageError::QuestionMissing(_)) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let detail = if status.is_server_error() {
            error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            warn!(status = status.as_u16(), detail = %self, "Request rejected");
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorResponse::new(detail))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::from(StorageError::QuestionNotFound(1)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(StorageError::AnswerNotFound(1)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(StorageError::QuestionMissing(1)).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation("text must not be empty".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(StorageError::OperationFailed("Lock error".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_message_passes_through() {
        let err = AppError::from(StorageError::QuestionMissing(7));
        assert_eq!(err.to_string(), "Question with id 7 does not exist.");
    }
}
