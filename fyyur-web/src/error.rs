//! Error types for fyyur-web
//!
//! Handlers that hit an unexpected store failure return [`AppError`], which
//! logs the detail and renders the generic 500 page. Expected outcomes such
//! as validation failures or missing rows are handled in the handlers with
//! flash notices and never reach this type.

use crate::views::errors::{not_found_page, server_error_page};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Page does not exist (404)
    #[error("Not found")]
    NotFound,

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// fyyur-common error
    #[error("Common error: {0}")]
    Common(#[from] fyyur_common::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Common(fyyur_common::Error::Database(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, Html(not_found_page())).into_response(),
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(server_error_page())).into_response()
            }
        }
    }
}

/// Result type for HTTP handlers
pub type AppResult<T> = Result<T, AppError>;
