//! API error mapping
//!
//! Converts the kernel's error taxonomy into HTTP responses. NotFound maps
//! to 404, input problems to 400, auth to 401/403; everything else becomes
//! a logged 500 with a generic body, never the internal message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portal_core::errors::{ErrorKind, OpError, PortalError};
use serde_json::json;
use tracing::error;

/// Error returned by API handlers
#[derive(Debug)]
pub struct ApiError(OpError);

impl ApiError {
    pub fn unauthorised(message: &str) -> Self {
        Self(
            OpError::new(ErrorKind::Unauthorised)
                .with_op("auth")
                .with_message(message.to_string()),
        )
    }

    pub fn forbidden(message: &str) -> Self {
        Self(
            OpError::new(ErrorKind::Forbidden)
                .with_op("auth")
                .with_message(message.to_string()),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.0.kind()
    }

    fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidInput
            | ErrorKind::InvalidName
            | ErrorKind::InvalidEmail
            | ErrorKind::InvalidStatus
            | ErrorKind::InvalidRole
            | ErrorKind::InvalidAmount
            | ErrorKind::AlreadyExists
            | ErrorKind::ConstraintViolation
            | ErrorKind::UnknownAssignee => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorised => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<OpError> for ApiError {
    fn from(err: OpError) -> Self {
        Self(err)
    }
}

impl From<PortalError> for ApiError {
    fn from(err: PortalError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(err_code = self.0.code(), err = %self.0, "internal error");
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "code": self.0.code(),
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
