//! Unified error handling for the JSON API.
//!
//! Provides a unified `AppError` type mapped to HTTP statuses. All route
//! handlers return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use meteor_store::{AuthError, CheckoutError, StoreError};

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Data-service operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout failed.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Caller is not authorized for the admin surface.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Store(err) => match err {
                StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                StoreError::Backend(_) | StoreError::Http(_) => StatusCode::BAD_GATEWAY,
                StoreError::Serialization(_) | StoreError::Io(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UserExists => StatusCode::CONFLICT,
                AuthError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Checkout(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request error");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(err) => match err {
                StoreError::NotFound { .. } => self.to_string(),
                StoreError::Backend(_) | StoreError::Http(_) => {
                    "external service error".to_owned()
                }
                StoreError::Serialization(_) | StoreError::Io(_) => {
                    "internal server error".to_owned()
                }
            },
            Self::Auth(AuthError::Store(_)) => "internal server error".to_owned(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::Store(StoreError::not_found("product", 7_i64));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_credentials_maps_to_401() {
        let err = AppError::Auth(AuthError::InvalidCredentials);
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_user_exists_maps_to_409() {
        let err = AppError::Auth(AuthError::UserExists);
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_empty_cart_maps_to_400() {
        let err = AppError::Checkout(CheckoutError::EmptyCart);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
