//! Venue handlers

use super::{not_found_redirect, parse_id, search_term};
use crate::display;
use crate::error::AppResult;
use crate::flash::Flash;
use crate::forms::{self, FieldErrors, SubmittedFields};
use crate::views::{self, forms::FormTarget};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Form, Router,
};
use chrono::Utc;
use fyyur_common::db::{
    Repository, ShowFilter, ShowRepository, UnitOfWork, VenueDraft, VenueFilter, VenueRepository,
};
use sqlx::SqlitePool;
use tracing::{error, info, warn};

pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue_submission))
        .route("/venues/:venue_id", get(show_venue).post(delete_venue).delete(delete_venue))
        .route("/venues/:venue_id/edit", get(edit_venue_form).post(edit_venue_submission))
}

/// GET /venues
///
/// Venues grouped by (city, state) with upcoming show counts
pub async fn list_venues(State(state): State<AppState>, flash: Flash) -> AppResult<Response> {
    let mut conn = state.db.acquire().await?;
    let venues = VenueRepository.find_by_filter(&mut conn, &VenueFilter::All).await?;
    let shows = ShowRepository.find_by_filter(&mut conn, &ShowFilter::All).await?;

    let counts = display::venue_counts(&shows, &Utc::now());
    let areas = display::group_by_area(&venues, &counts);

    Ok(flash.render(StatusCode::OK, |messages| views::venues::list_page(messages, &areas)))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    flash: Flash,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let term = search_term(&pairs);

    let mut conn = state.db.acquire().await?;
    let venues = VenueRepository
        .find_by_filter(&mut conn, &VenueFilter::NameContains(term.clone()))
        .await?;
    let shows = ShowRepository.find_by_filter(&mut conn, &ShowFilter::All).await?;

    let counts = display::venue_counts(&shows, &Utc::now());
    let results = display::search_results(&term, display::venue_summaries(&venues, &counts));

    Ok(flash.render(StatusCode::OK, |messages| views::venues::search_page(messages, &results)))
}

/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    flash: Flash,
    Path(venue_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&venue_id) else {
        return Ok(not_found_redirect(flash, "Venue"));
    };

    let mut conn = state.db.acquire().await?;
    let Some(venue) = VenueRepository.find_by_id(&mut conn, id).await? else {
        return Ok(not_found_redirect(flash, "Venue"));
    };
    let shows = ShowRepository.find_by_filter(&mut conn, &ShowFilter::ForVenue(id)).await?;

    let detail = display::venue_detail(venue, shows, &Utc::now());
    Ok(flash.render(StatusCode::OK, |messages| views::venues::detail_page(messages, &detail)))
}

/// GET /venues/create
pub async fn create_venue_form(flash: Flash) -> Response {
    flash.render(StatusCode::OK, |messages| {
        views::venues::form_page(messages, FormTarget::Create, &SubmittedFields::default(), &FieldErrors::default())
    })
}

/// POST /venues/create
pub async fn create_venue_submission(
    State(state): State<AppState>,
    mut flash: Flash,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = SubmittedFields::new(pairs);
    let name = fields.text("name").to_string();

    let draft = match forms::venue::validate(&fields) {
        Ok(draft) => draft,
        Err(errors) => {
            warn!("Venue form rejected with {} field error(s)", errors.len());
            flash.error(format!(
                "An error occurred. Venue {name} could not be listed. Please, fill all the fields correctly"
            ));
            return flash.render(StatusCode::UNPROCESSABLE_ENTITY, |messages| {
                views::venues::form_page(messages, FormTarget::Create, &fields, &errors)
            });
        }
    };

    match insert_venue(&state.db, &draft).await {
        Ok(id) => {
            info!(venue_id = id, "Venue listed: {}", draft.name);
            flash.success(format!("Venue {} was successfully listed!", draft.name));
            flash.redirect("/")
        }
        Err(e) => {
            error!("Failed to list venue '{}': {}", draft.name, e);
            flash.error(format!("An error occurred. Venue {} could not be listed.", draft.name));
            flash.render(StatusCode::INTERNAL_SERVER_ERROR, |messages| {
                views::venues::form_page(messages, FormTarget::Create, &fields, &FieldErrors::default())
            })
        }
    }
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    flash: Flash,
    Path(venue_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&venue_id) else {
        return Ok(not_found_redirect(flash, "Venue"));
    };

    let mut conn = state.db.acquire().await?;
    let Some(venue) = VenueRepository.find_by_id(&mut conn, id).await? else {
        return Ok(not_found_redirect(flash, "Venue"));
    };

    let fields = forms::venue::prefill(&venue);
    Ok(flash.render(StatusCode::OK, |messages| {
        views::venues::form_page(messages, FormTarget::Edit(id), &fields, &FieldErrors::default())
    }))
}

/// POST /venues/:venue_id/edit
///
/// Overwrites every field of the venue
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    mut flash: Flash,
    Path(venue_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let Some(id) = parse_id(&venue_id) else {
        return not_found_redirect(flash, "Venue");
    };
    let fields = SubmittedFields::new(pairs);
    let name = fields.text("name").to_string();

    let draft = match forms::venue::validate(&fields) {
        Ok(draft) => draft,
        Err(errors) => {
            warn!(venue_id = id, "Venue edit rejected with {} field error(s)", errors.len());
            flash.error(format!(
                "An error occurred. Venue {name} could not be updated. Please, fill all the fields correctly"
            ));
            return flash.render(StatusCode::UNPROCESSABLE_ENTITY, |messages| {
                views::venues::form_page(messages, FormTarget::Edit(id), &fields, &errors)
            });
        }
    };

    match update_venue(&state.db, id, &draft).await {
        Ok(()) => {
            info!(venue_id = id, "Venue updated: {}", draft.name);
            flash.success(format!("Venue {} was successfully updated!", draft.name));
            flash.redirect(&format!("/venues/{id}"))
        }
        Err(e) if e.is_not_found() => not_found_redirect(flash, "Venue"),
        Err(e) => {
            error!("Failed to update venue {}: {}", id, e);
            flash.error(format!("An error occurred. Venue {} could not be updated.", draft.name));
            flash.render(StatusCode::INTERNAL_SERVER_ERROR, |messages| {
                views::venues::form_page(messages, FormTarget::Edit(id), &fields, &FieldErrors::default())
            })
        }
    }
}

/// POST or DELETE /venues/:venue_id
///
/// Deletes the venue and, through the foreign key, its shows
pub async fn delete_venue(
    State(state): State<AppState>,
    mut flash: Flash,
    Path(venue_id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&venue_id) else {
        return not_found_redirect(flash, "Venue");
    };

    match remove_venue(&state.db, id).await {
        Ok(name) => {
            info!(venue_id = id, "Venue deleted: {}", name);
            flash.success(format!("Venue {name} was successfully deleted!"));
        }
        Err(e) if e.is_not_found() => flash.error("Venue not found"),
        Err(e) => {
            error!("Failed to delete venue {}: {}", id, e);
            flash.error("An error occurred. Venue could not be deleted.");
        }
    }
    flash.redirect("/")
}

async fn insert_venue(pool: &SqlitePool, draft: &VenueDraft) -> fyyur_common::Result<i64> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let outcome = VenueRepository.insert(uow.conn(), draft).await;
    uow.finish(outcome).await
}

async fn update_venue(pool: &SqlitePool, id: i64, draft: &VenueDraft) -> fyyur_common::Result<()> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let outcome = VenueRepository.update(uow.conn(), id, draft).await;
    uow.finish(outcome).await
}

/// Deletes the venue, returning its name
async fn remove_venue(pool: &SqlitePool, id: i64) -> fyyur_common::Result<String> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let outcome = match VenueRepository.find_by_id(uow.conn(), id).await {
        Ok(Some(venue)) => VenueRepository
            .delete(uow.conn(), id)
            .await
            .map(|()| venue.fields.name),
        Ok(None) => Err(fyyur_common::Error::NotFound { entity: VenueRepository::ENTITY, id }),
        Err(e) => Err(e),
    };
    uow.finish(outcome).await
}
