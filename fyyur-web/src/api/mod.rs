//! HTTP handlers
//!
//! # Structure
//! - **Pages** (`pages`): home, stylesheet, 404 fallback, panic page
//! - **Venues** (`venues`): list, search, detail, create, edit, delete
//! - **Artists** (`artists`): list, search, detail, create, edit
//! - **Shows** (`shows`): list, create
//! - **Health** (`health`): JSON status for monitoring

pub mod artists;
pub mod health;
pub mod pages;
pub mod shows;
pub mod venues;

pub use artists::artist_routes;
pub use health::health_routes;
pub use pages::{not_found, page_routes, panic_response};
pub use shows::show_routes;
pub use venues::venue_routes;

use crate::flash::Flash;
use axum::response::Response;

/// Path ids that are not positive integers are treated like missing rows
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// `<Entity> not found` notice and a redirect home
pub(crate) fn not_found_redirect(mut flash: Flash, entity: &str) -> Response {
    flash.error(format!("{entity} not found"));
    flash.redirect("/")
}

/// Value of the `search_term` form field
pub(crate) fn search_term(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .find(|(key, _)| key == "search_term")
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}
