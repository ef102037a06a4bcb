//! Artist handlers

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
    ArtistDraft, ArtistFilter, ArtistRepository, Repository, ShowFilter, ShowRepository, UnitOfWork,
};
use sqlx::SqlitePool;
use tracing::{error, info, warn};

pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist_submission))
        .route("/artists/:artist_id", get(show_artist))
        .route("/artists/:artist_id/edit", get(edit_artist_form).post(edit_artist_submission))
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>, flash: Flash) -> AppResult<Response> {
    let mut conn = state.db.acquire().await?;
    let artists = ArtistRepository.find_by_filter(&mut conn, &ArtistFilter::All).await?;
    let shows = ShowRepository.find_by_filter(&mut conn, &ShowFilter::All).await?;

    let counts = display::artist_counts(&shows, &Utc::now());
    let summaries = display::artist_summaries(&artists, &counts);

    Ok(flash.render(StatusCode::OK, |messages| views::artists::list_page(messages, &summaries)))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    flash: Flash,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    let term = search_term(&pairs);

    let mut conn = state.db.acquire().await?;
    let artists = ArtistRepository
        .find_by_filter(&mut conn, &ArtistFilter::NameContains(term.clone()))
        .await?;
    let shows = ShowRepository.find_by_filter(&mut conn, &ShowFilter::All).await?;

    let counts = display::artist_counts(&shows, &Utc::now());
    let results = display::search_results(&term, display::artist_summaries(&artists, &counts));

    Ok(flash.render(StatusCode::OK, |messages| views::artists::search_page(messages, &results)))
}

/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    flash: Flash,
    Path(artist_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&artist_id) else {
        return Ok(not_found_redirect(flash, "Artist"));
    };

    let mut conn = state.db.acquire().await?;
    let Some(artist) = ArtistRepository.find_by_id(&mut conn, id).await? else {
        return Ok(not_found_redirect(flash, "Artist"));
    };
    let shows = ShowRepository.find_by_filter(&mut conn, &ShowFilter::ForArtist(id)).await?;

    let detail = display::artist_detail(artist, shows, &Utc::now());
    Ok(flash.render(StatusCode::OK, |messages| views::artists::detail_page(messages, &detail)))
}

/// GET /artists/create
pub async fn create_artist_form(flash: Flash) -> Response {
    flash.render(StatusCode::OK, |messages| {
        views::artists::form_page(messages, FormTarget::Create, &SubmittedFields::default(), &FieldErrors::default())
    })
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    mut flash: Flash,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = SubmittedFields::new(pairs);
    let name = fields.text("name").to_string();

    let draft = match forms::artist::validate(&fields) {
        Ok(draft) => draft,
        Err(errors) => {
            warn!("Artist form rejected with {} field error(s)", errors.len());
            flash.error(format!(
                "An error occurred. Artist {name} could not be listed. Please, fill all the fields correctly"
            ));
            return flash.render(StatusCode::UNPROCESSABLE_ENTITY, |messages| {
                views::artists::form_page(messages, FormTarget::Create, &fields, &errors)
            });
        }
    };

    match insert_artist(&state.db, &draft).await {
        Ok(id) => {
            info!(artist_id = id, "Artist listed: {}", draft.name);
            flash.success(format!("Artist {} was successfully listed!", draft.name));
            flash.redirect("/")
        }
        Err(e) => {
            error!("Failed to list artist '{}': {}", draft.name, e);
            flash.error(format!("An error occurred. Artist {} could not be listed.", draft.name));
            flash.render(StatusCode::INTERNAL_SERVER_ERROR, |messages| {
                views::artists::form_page(messages, FormTarget::Create, &fields, &FieldErrors::default())
            })
        }
    }
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    flash: Flash,
    Path(artist_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&artist_id) else {
        return Ok(not_found_redirect(flash, "Artist"));
    };

    let mut conn = state.db.acquire().await?;
    let Some(artist) = ArtistRepository.find_by_id(&mut conn, id).await? else {
        return Ok(not_found_redirect(flash, "Artist"));
    };

    let fields = forms::artist::prefill(&artist);
    Ok(flash.render(StatusCode::OK, |messages| {
        views::artists::form_page(messages, FormTarget::Edit(id), &fields, &FieldErrors::default())
    }))
}

/// POST /artists/:artist_id/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    mut flash: Flash,
    Path(artist_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let Some(id) = parse_id(&artist_id) else {
        return not_found_redirect(flash, "Artist");
    };
    let fields = SubmittedFields::new(pairs);
    let name = fields.text("name").to_string();

    let draft = match forms::artist::validate(&fields) {
        Ok(draft) => draft,
        Err(errors) => {
            warn!(artist_id = id, "Artist edit rejected with {} field error(s)", errors.len());
            flash.error(format!(
                "An error occurred. Artist {name} could not be updated. Please, fill all the fields correctly"
            ));
            return flash.render(StatusCode::UNPROCESSABLE_ENTITY, |messages| {
                views::artists::form_page(messages, FormTarget::Edit(id), &fields, &errors)
            });
        }
    };

    match update_artist(&state.db, id, &draft).await {
        Ok(()) => {
            info!(artist_id = id, "Artist updated: {}", draft.name);
            flash.success(format!("Artist {} was successfully updated!", draft.name));
            flash.redirect(&format!("/artists/{id}"))
        }
        Err(e) if e.is_not_found() => not_found_redirect(flash, "Artist"),
        Err(e) => {
            error!("Failed to update artist {}: {}", id, e);
            flash.error(format!("An error occurred. Artist {} could not be updated.", draft.name));
            flash.render(StatusCode::INTERNAL_SERVER_ERROR, |messages| {
                views::artists::form_page(messages, FormTarget::Edit(id), &fields, &FieldErrors::default())
            })
        }
    }
}

async fn insert_artist(pool: &SqlitePool, draft: &ArtistDraft) -> fyyur_common::Result<i64> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let outcome = ArtistRepository.insert(uow.conn(), draft).await;
    uow.finish(outcome).await
}

async fn update_artist(pool: &SqlitePool, id: i64, draft: &ArtistDraft) -> fyyur_common::Result<()> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let outcome = ArtistRepository.update(uow.conn(), id, draft).await;
    uow.finish(outcome).await
}
