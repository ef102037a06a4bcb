//! Home page, shared stylesheet and error pages

use crate::error::AppError;
use crate::flash::Flash;
use crate::views;
use crate::AppState;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any;

// Embed static files at compile time
const FYYUR_CSS: &str = include_str!("../../static/fyyur.css");

/// GET /
pub async fn home(flash: Flash) -> Response {
    flash.render(StatusCode::OK, views::home::page)
}

/// GET /static/fyyur.css
pub async fn serve_fyyur_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        FYYUR_CSS,
    )
        .into_response()
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Response for a handler that panicked
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/static/fyyur.css", get(serve_fyyur_css))
}
