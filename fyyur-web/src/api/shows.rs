//! Show handlers

use crate::display;
use crate::error::AppResult;
use crate::flash::Flash;
use crate::forms::{self, show::INPUT_LAYOUT, FieldErrors, SubmittedFields};
use crate::views;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::Response, routing::get, Form, Router};
use chrono::Utc;
use fyyur_common::db::{
    ArtistRepository, Repository, ShowDraft, ShowFilter, ShowRepository, UnitOfWork, VenueRepository,
};
use sqlx::SqlitePool;
use tracing::{error, info, warn};

pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show_submission))
}

/// GET /shows
pub async fn list_shows(State(state): State<AppState>, flash: Flash) -> AppResult<Response> {
    let mut conn = state.db.acquire().await?;
    let shows = ShowRepository.find_by_filter(&mut conn, &ShowFilter::All).await?;
    let rows = display::show_rows(shows);

    Ok(flash.render(StatusCode::OK, |messages| views::shows::list_page(messages, &rows)))
}

/// GET /shows/create
///
/// Start time is pre-filled with the current time
pub async fn create_show_form(flash: Flash) -> Response {
    let mut fields = SubmittedFields::default();
    fields.push("start_time", Utc::now().format(INPUT_LAYOUT).to_string());
    flash.render(StatusCode::OK, |messages| {
        views::shows::form_page(messages, &fields, &FieldErrors::default())
    })
}

/// Result of trying to book a show
#[derive(Debug)]
enum Booking {
    Listed(i64),
    /// One notice per missing reference; nothing was written
    Rejected(Vec<&'static str>),
}

/// POST /shows/create
pub async fn create_show_submission(
    State(state): State<AppState>,
    mut flash: Flash,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = SubmittedFields::new(pairs);

    let draft = match forms::show::validate(&fields) {
        Ok(draft) => draft,
        Err(errors) => {
            warn!("Show form rejected with {} field error(s)", errors.len());
            flash.error("Check the fields!");
            return flash.render(StatusCode::UNPROCESSABLE_ENTITY, |messages| {
                views::shows::form_page(messages, &fields, &errors)
            });
        }
    };

    match book_show(&state.db, &draft).await {
        Ok(Booking::Listed(id)) => {
            info!(show_id = id, artist_id = draft.artist_id, venue_id = draft.venue_id, "Show listed");
            flash.success("Show was successfully listed!");
            flash.redirect("/")
        }
        Ok(Booking::Rejected(missing)) => {
            warn!(
                artist_id = draft.artist_id,
                venue_id = draft.venue_id,
                "Show rejected: {}",
                missing.join(", ")
            );
            for notice in missing {
                flash.error(notice);
            }
            flash.render(StatusCode::UNPROCESSABLE_ENTITY, |messages| {
                views::shows::form_page(messages, &fields, &FieldErrors::default())
            })
        }
        Err(e) => {
            error!("Failed to list show for artist {}: {}", draft.artist_id, e);
            flash.error(format!(
                "An error occurred. Show for artist {} could not be listed.",
                draft.artist_id
            ));
            flash.redirect("/")
        }
    }
}

/// Checks both references, then inserts, all in one unit of work
async fn book_show(pool: &SqlitePool, draft: &ShowDraft) -> fyyur_common::Result<Booking> {
    let mut uow = UnitOfWork::begin(pool).await?;

    let mut missing = Vec::new();
    let outcome: fyyur_common::Result<Option<i64>> = async {
        if !ArtistRepository.exists(uow.conn(), draft.artist_id).await? {
            missing.push("Artist does not exist");
        }
        if !VenueRepository.exists(uow.conn(), draft.venue_id).await? {
            missing.push("Venue does not exist");
        }
        if !missing.is_empty() {
            return Ok(None);
        }
        ShowRepository.insert(uow.conn(), draft).await.map(Some)
    }
    .await;

    match outcome {
        Ok(Some(id)) => uow.commit().await.map(|()| Booking::Listed(id)),
        Ok(None) => {
            uow.rollback().await?;
            Ok(Booking::Rejected(missing))
        }
        Err(e) => uow.finish(Err(e)).await,
    }
}
