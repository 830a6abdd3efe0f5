use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    dto::orders::OrderResponse,
    services::{notification_service::NotificationError, order_validation::ValidationError},
};

/// Reply to a filled honeypot, sent with a 200 status.
pub const GENERIC_SPAM_MESSAGE: &str = "There was an error processing your order. Please try again.";
/// Reply to any rejected or failed order. The cause only reaches the logs.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "There was an error processing your order. Please try again or contact us directly.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Spam detected")]
    SpamDetected,

    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::Validation(ValidationError::SpamDetected) | AppError::SpamDetected => {
                (StatusCode::OK, GENERIC_SPAM_MESSAGE.to_string())
            }
            AppError::Validation(_) | AppError::Notification(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE_MESSAGE.to_string(),
            ),
        };

        (status, axum::Json(OrderResponse::rejected(message))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
