//! Integration tests for fyyur-web pages
//!
//! Each test gets its own SQLite file in a temp directory and drives the
//! full router with `oneshot`, the same way a browser would: form posts,
//! 303 redirects and the flash cookie carried to the next page.

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use fyyur_common::db::{
    init_database, ArtistDraft, ArtistRepository, Repository, ShowDraft, ShowRepository, VenueDraft,
    VenueRepository,
};
use fyyur_web::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

const STORE_FAILURE: &str = "disk gone";

struct TestApp {
    _dir: TempDir,
    pool: SqlitePool,
    app: Router,
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Render the home page with a flash cookie from an earlier response
    async fn follow_flash(&self, response: &Response<Body>) -> String {
        let pair = flash_cookie_pair(response).expect("Response should set the flash cookie");
        let request = Request::builder()
            .uri("/")
            .header(header::COOKIE, pair)
            .body(Body::empty())
            .unwrap();
        body_text(self.send(request).await).await
    }

    /// Make every `event` (INSERT, UPDATE, DELETE) on `table` fail inside SQLite
    async fn fail_writes(&self, event: &str, table: &str) {
        sqlx::query(&format!(
            "CREATE TRIGGER fail_{table} BEFORE {event} ON {table} \
             BEGIN SELECT RAISE(ABORT, '{STORE_FAILURE}'); END"
        ))
        .execute(&self.pool)
        .await
        .unwrap();
    }

    async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

async fn setup() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&dir.path().join("fyyur.db")).await.unwrap();
    let app = build_router(AppState::new(pool.clone()));
    TestApp { _dir: dir, pool, app }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

fn flash_cookie_pair(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("fyyur_flash="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

fn venue_draft(name: &str, city: &str, state: &str) -> VenueDraft {
    VenueDraft {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        genres: vec!["Jazz".to_string()],
        ..Default::default()
    }
}

fn artist_draft(name: &str) -> ArtistDraft {
    ArtistDraft {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        ..Default::default()
    }
}

async fn seed_venue(pool: &SqlitePool, name: &str, city: &str, state: &str) -> i64 {
    let mut conn = pool.acquire().await.unwrap();
    VenueRepository
        .insert(&mut conn, &venue_draft(name, city, state))
        .await
        .unwrap()
}

async fn seed_artist(pool: &SqlitePool, name: &str) -> i64 {
    let mut conn = pool.acquire().await.unwrap();
    ArtistRepository.insert(&mut conn, &artist_draft(name)).await.unwrap()
}

async fn seed_show(pool: &SqlitePool, venue_id: i64, artist_id: i64, start_time: DateTime<Utc>) -> i64 {
    let mut conn = pool.acquire().await.unwrap();
    ShowRepository
        .insert(
            &mut conn,
            &ShowDraft {
                venue_id,
                artist_id,
                start_time,
            },
        )
        .await
        .unwrap()
}

const VALID_VENUE_FORM: &str = "name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street\
&phone=123-123-1234&genres=Jazz&genres=Reggae&facebook_link=https%3A%2F%2Fwww.facebook.com%2FTheMusicalHop\
&seeking_talent=y&seeking_description=Looking+for+local+artists";

const VALID_ARTIST_FORM: &str =
    "name=Guns+N+Petals&city=San+Francisco&state=CA&phone=326-123-5000&genres=Rock+n+Roll&seeking_venue=y";

// =============================================================================
// Ambient pages
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let t = setup().await;

    let response = t.send(get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "fyyur-web");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_number());
}

#[tokio::test]
async fn test_home_page() {
    let t = setup().await;

    let response = t.send(get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(flash_cookie_pair(&response).is_none());

    let body = body_text(response).await;
    assert!(body.contains(r#"href="/venues""#));
    assert!(body.contains(r#"href="/shows/create""#));
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let t = setup().await;

    let response = t.send(get("/no/such/page")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));
}

#[tokio::test]
async fn test_stylesheet_served() {
    let t = setup().await;

    let response = t.send(get("/static/fyyur.css")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "text/css");
}

// =============================================================================
// Venues
// =============================================================================

#[tokio::test]
async fn test_venues_grouped_by_area_with_upcoming_counts() {
    let t = setup().await;
    let hop = seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(&t.pool, "The Dueling Pianos Bar", "New York", "NY").await;
    seed_venue(&t.pool, "Park Square Live Music", "San Francisco", "CA").await;
    let artist = seed_artist(&t.pool, "Guns N Petals").await;
    seed_show(&t.pool, hop, artist, Utc::now() + Duration::days(3)).await;
    seed_show(&t.pool, hop, artist, Utc::now() - Duration::days(3)).await;

    let response = t.send(get("/venues")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    let sf = body.find("San Francisco, CA").expect("SF area heading");
    let ny = body.find("New York, NY").expect("NY area heading");
    assert!(sf < ny, "areas keep first-seen order");
    assert!(body.contains(&format!(
        r#"<a href="/venues/{hop}">The Musical Hop</a><span class="count">1 upcoming shows</span>"#
    )));
    assert!(body.contains("Park Square Live Music</a><span class=\"count\">0 upcoming shows"));
}

#[tokio::test]
async fn test_venue_detail_past_and_upcoming() {
    let t = setup().await;
    let venue = seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;
    let past_artist = seed_artist(&t.pool, "Guns N Petals").await;
    let next_artist = seed_artist(&t.pool, "Matt Quevedo").await;
    seed_show(&t.pool, venue, past_artist, Utc::now() - Duration::days(30)).await;
    seed_show(&t.pool, venue, next_artist, Utc::now() + Duration::days(10)).await;

    let response = t.send(get(&format!("/venues/{venue}"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    assert!(body.contains("1 Upcoming Shows"));
    assert!(body.contains("1 Past Shows"));
    let upcoming = body.find("Upcoming Shows").unwrap();
    let past = body.find("Past Shows").unwrap();
    let quevedo = body.find("Matt Quevedo").unwrap();
    let petals = body.find("Guns N Petals").unwrap();
    assert!(upcoming < quevedo && quevedo < past);
    assert!(past < petals);
}

#[tokio::test]
async fn test_venue_detail_not_found_redirects_home() {
    let t = setup().await;

    for uri in ["/venues/42", "/venues/not-a-number"] {
        let response = t.send(get(uri)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), "/");
        assert!(t.follow_flash(&response).await.contains("Venue not found"));
    }
}

#[tokio::test]
async fn test_search_venues() {
    let t = setup().await;
    seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(&t.pool, "The Dueling Pianos Bar", "New York", "NY").await;
    seed_venue(&t.pool, "Park Square Live Music & Coffee", "San Francisco", "CA").await;

    let body = body_text(t.send(form_post("/venues/search", "search_term=")).await).await;
    assert!(body.contains(r#"Number of search results for "": 3</h1>"#));

    let body = body_text(t.send(form_post("/venues/search", "search_term=hop")).await).await;
    assert!(body.contains(r#"Number of search results for "hop": 1</h1>"#));
    assert!(body.contains("The Musical Hop"));

    let body = body_text(t.send(form_post("/venues/search", "search_term=zzz")).await).await;
    assert!(body.contains(r#"Number of search results for "zzz": 0</h1>"#));
}

#[tokio::test]
async fn test_create_venue() {
    let t = setup().await;

    let response = t.send(get("/venues/create")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"action="/venues/create""#));

    let response = t.send(form_post("/venues/create", VALID_VENUE_FORM)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(t
        .follow_flash(&response)
        .await
        .contains("Venue The Musical Hop was successfully listed!"));

    let mut conn = t.pool.acquire().await.unwrap();
    let venue = VenueRepository.find_by_id(&mut conn, 1).await.unwrap().unwrap();
    assert_eq!(venue.fields.genres, vec!["Jazz", "Reggae"]);
    assert!(venue.fields.seeking_talent);
    assert_eq!(
        venue.fields.facebook_link.as_deref(),
        Some("https://www.facebook.com/TheMusicalHop")
    );
}

#[tokio::test]
async fn test_create_venue_invalid_form_is_not_written() {
    let t = setup().await;

    let response = t
        .send(form_post("/venues/create", "name=Half+Done&city=Nowhere&state=ZZ&phone=123"))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(response).await;
    assert!(body.contains("An error occurred. Venue Half Done could not be listed. Please, fill all the fields correctly"));
    assert!(body.contains(r#"value="Half Done""#), "submitted values are kept");
    assert!(body.contains("Not a valid choice."));
    assert_eq!(t.count("venues").await, 0);
}

#[tokio::test]
async fn test_edit_venue_overwrites_every_field() {
    let t = setup().await;
    let id = seed_venue(&t.pool, "Old Name", "Old City", "NY").await;

    let response = t.send(get(&format!("/venues/{id}/edit"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"value="Old Name""#));

    let response = t.send(form_post(&format!("/venues/{id}/edit"), VALID_VENUE_FORM)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/venues/{id}"));
    assert!(t
        .follow_flash(&response)
        .await
        .contains("Venue The Musical Hop was successfully updated!"));

    let mut conn = t.pool.acquire().await.unwrap();
    let venue = VenueRepository.find_by_id(&mut conn, id).await.unwrap().unwrap();
    assert_eq!(venue.fields.name, "The Musical Hop");
    assert_eq!(venue.fields.city, "San Francisco");
    assert_eq!(venue.fields.state, "CA");
    assert_eq!(venue.fields.phone.as_deref(), Some("123-123-1234"));
    assert_eq!(venue.fields.genres, vec!["Jazz", "Reggae"]);
    assert_eq!(venue.fields.seeking_description.as_deref(), Some("Looking for local artists"));
    drop(conn);

    let body = body_text(t.send(get(&format!("/venues/{id}"))).await).await;
    assert!(body.contains("<h1>The Musical Hop</h1>"));
    assert!(!body.contains("Old Name"));
}

#[tokio::test]
async fn test_edit_missing_venue_redirects_home() {
    let t = setup().await;

    let response = t.send(form_post("/venues/7/edit", VALID_VENUE_FORM)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(t.follow_flash(&response).await.contains("Venue not found"));
    assert_eq!(t.count("venues").await, 0);
}

#[tokio::test]
async fn test_delete_venue_then_detail_is_not_found() {
    let t = setup().await;
    let id = seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(&t.pool, "Guns N Petals").await;
    seed_show(&t.pool, id, artist, Utc::now() + Duration::days(1)).await;

    let response = t.send(form_post(&format!("/venues/{id}"), "")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(t
        .follow_flash(&response)
        .await
        .contains("Venue The Musical Hop was successfully deleted!"));
    assert_eq!(t.count("shows").await, 0, "shows are removed with their venue");

    let response = t.send(get(&format!("/venues/{id}"))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(t.follow_flash(&response).await.contains("Venue not found"));
}

#[tokio::test]
async fn test_delete_verb_and_missing_venue() {
    let t = setup().await;
    let id = seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/venues/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = t.send(request).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(t.count("venues").await, 0);

    let response = t.send(form_post(&format!("/venues/{id}"), "")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(t.follow_flash(&response).await.contains("Venue not found"));
}

// =============================================================================
// Artists
// =============================================================================

#[tokio::test]
async fn test_artist_list_and_search() {
    let t = setup().await;
    let petals = seed_artist(&t.pool, "Guns N Petals").await;
    seed_artist(&t.pool, "Matt Quevedo").await;
    seed_artist(&t.pool, "The Wild Sax Band").await;
    let venue = seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;
    seed_show(&t.pool, venue, petals, Utc::now() + Duration::days(2)).await;

    let body = body_text(t.send(get("/artists")).await).await;
    assert!(body.contains(&format!(
        r#"<a href="/artists/{petals}">Guns N Petals</a><span class="count">1 upcoming shows</span>"#
    )));
    assert!(body.contains("The Wild Sax Band"));

    let body = body_text(t.send(form_post("/artists/search", "search_term=A")).await).await;
    assert!(body.contains(r#"Number of search results for "A": 3</h1>"#));

    let body = body_text(t.send(form_post("/artists/search", "search_term=band")).await).await;
    assert!(body.contains(r#"Number of search results for "band": 1</h1>"#));
}

#[tokio::test]
async fn test_artist_detail() {
    let t = setup().await;
    let artist = seed_artist(&t.pool, "Guns N Petals").await;
    let venue = seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;
    seed_show(&t.pool, venue, artist, Utc::now() - Duration::days(1)).await;

    let body = body_text(t.send(get(&format!("/artists/{artist}"))).await).await;
    assert!(body.contains("<h1>Guns N Petals</h1>"));
    assert!(body.contains("0 Upcoming Shows"));
    assert!(body.contains("1 Past Shows"));
    assert!(body.contains(&format!(r#"href="/venues/{venue}""#)));

    let response = t.send(get("/artists/999")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(t.follow_flash(&response).await.contains("Artist not found"));
}

#[tokio::test]
async fn test_create_and_edit_artist() {
    let t = setup().await;

    let response = t.send(form_post("/artists/create", VALID_ARTIST_FORM)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(t
        .follow_flash(&response)
        .await
        .contains("Artist Guns N Petals was successfully listed!"));

    let edited = VALID_ARTIST_FORM.replace("Guns+N+Petals", "Guns+N+Roses").replace("&seeking_venue=y", "");
    let response = t.send(form_post("/artists/1/edit", &edited)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/artists/1");

    let mut conn = t.pool.acquire().await.unwrap();
    let artist = ArtistRepository.find_by_id(&mut conn, 1).await.unwrap().unwrap();
    assert_eq!(artist.fields.name, "Guns N Roses");
    assert!(!artist.fields.seeking_venue);
}

#[tokio::test]
async fn test_edit_artist_invalid_form() {
    let t = setup().await;
    let id = seed_artist(&t.pool, "Guns N Petals").await;

    let response = t
        .send(form_post(&format!("/artists/{id}/edit"), "name=Guns+N+Petals&city=&state=CA"))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response)
        .await
        .contains("An error occurred. Artist Guns N Petals could not be updated. Please, fill all the fields correctly"));

    let mut conn = t.pool.acquire().await.unwrap();
    let artist = ArtistRepository.find_by_id(&mut conn, id).await.unwrap().unwrap();
    assert_eq!(artist.fields.city, "San Francisco");
}

// =============================================================================
// Shows
// =============================================================================

#[tokio::test]
async fn test_create_show_with_missing_artist_is_rejected() {
    let t = setup().await;
    let venue = seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;

    let response = t
        .send(form_post(
            "/shows/create",
            &format!("artist_id=999&venue_id={venue}&start_time=2035-04-01+20%3A00%3A00"),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(response).await;
    assert!(body.contains("Artist does not exist"));
    assert!(!body.contains("Venue does not exist"));
    assert_eq!(t.count("shows").await, 0);
}

#[tokio::test]
async fn test_create_show_reports_every_missing_reference() {
    let t = setup().await;

    let response = t
        .send(form_post("/shows/create", "artist_id=5&venue_id=6&start_time=2035-04-01T20%3A00"))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(response).await;
    assert!(body.contains("Artist does not exist"));
    assert!(body.contains("Venue does not exist"));
}

#[tokio::test]
async fn test_create_show_and_list() {
    let t = setup().await;
    let venue = seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(&t.pool, "Guns N Petals").await;

    let response = t.send(get("/shows/create")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"name="start_time""#));

    let response = t
        .send(form_post(
            "/shows/create",
            &format!("artist_id={artist}&venue_id={venue}&start_time=2035-05-21+21%3A30%3A00"),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(t.follow_flash(&response).await.contains("Show was successfully listed!"));
    assert_eq!(t.count("shows").await, 1);

    let body = body_text(t.send(get("/shows")).await).await;
    assert!(body.contains("Monday May, 21, 2035 at 9:30PM"));
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_create_show_bad_fields() {
    let t = setup().await;

    let response = t
        .send(form_post("/shows/create", "artist_id=abc&venue_id=1&start_time=tomorrow"))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(response).await;
    assert!(body.contains("Check the fields!"));
    assert!(body.contains(r#"value="tomorrow""#));
}

// =============================================================================
// Store failures
// =============================================================================

#[tokio::test]
async fn test_create_venue_store_failure() {
    let t = setup().await;
    t.fail_writes("INSERT", "venues").await;

    let response = t.send(form_post("/venues/create", VALID_VENUE_FORM)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_text(response).await;
    assert!(body.contains("An error occurred. Venue The Musical Hop could not be listed."));
    assert!(body.contains(r#"value="The Musical Hop""#), "form is shown again");
    assert!(!body.contains(STORE_FAILURE));
    assert_eq!(t.count("venues").await, 0);
}

#[tokio::test]
async fn test_edit_venue_store_failure() {
    let t = setup().await;
    let id = seed_venue(&t.pool, "Old Name", "Old City", "NY").await;
    t.fail_writes("UPDATE", "venues").await;

    let response = t
        .send(form_post(&format!("/venues/{id}/edit"), VALID_VENUE_FORM))
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_text(response).await;
    assert!(body.contains("An error occurred. Venue The Musical Hop could not be updated."));
    assert!(!body.contains(STORE_FAILURE));

    let name: String = sqlx::query_scalar("SELECT name FROM venues WHERE id = ?")
        .bind(id)
        .fetch_one(&t.pool)
        .await
        .unwrap();
    assert_eq!(name, "Old Name");
}

#[tokio::test]
async fn test_edit_artist_store_failure() {
    let t = setup().await;
    let id = seed_artist(&t.pool, "Old Band").await;
    t.fail_writes("UPDATE", "artists").await;

    let response = t
        .send(form_post(&format!("/artists/{id}/edit"), VALID_ARTIST_FORM))
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_text(response).await;
    assert!(body.contains("An error occurred. Artist Guns N Petals could not be updated."));
    assert!(!body.contains(STORE_FAILURE));

    let name: String = sqlx::query_scalar("SELECT name FROM artists WHERE id = ?")
        .bind(id)
        .fetch_one(&t.pool)
        .await
        .unwrap();
    assert_eq!(name, "Old Band");
}

#[tokio::test]
async fn test_delete_venue_store_failure() {
    let t = setup().await;
    let venue = seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(&t.pool, "Guns N Petals").await;
    seed_show(&t.pool, venue, artist, Utc::now() + Duration::days(3)).await;
    t.fail_writes("DELETE", "venues").await;

    let response = t.send(form_post(&format!("/venues/{venue}"), "")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let home = t.follow_flash(&response).await;
    assert!(home.contains("An error occurred. Venue could not be deleted."));
    assert!(!home.contains(STORE_FAILURE));
    assert_eq!(t.count("venues").await, 1);
    assert_eq!(t.count("shows").await, 1);
}

#[tokio::test]
async fn test_create_show_store_failure() {
    let t = setup().await;
    let venue = seed_venue(&t.pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(&t.pool, "Guns N Petals").await;
    t.fail_writes("INSERT", "shows").await;

    let response = t
        .send(form_post(
            "/shows/create",
            &format!("artist_id={artist}&venue_id={venue}&start_time=2035-05-21+21%3A30%3A00"),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let home = t.follow_flash(&response).await;
    assert!(home.contains(&format!("An error occurred. Show for artist {artist} could not be listed.")));
    assert!(!home.contains(STORE_FAILURE));
    assert_eq!(t.count("shows").await, 0);
}

// =============================================================================
// Flash notices
// =============================================================================

#[tokio::test]
async fn test_flash_is_shown_once() {
    let t = setup().await;

    let response = t.send(get("/venues/12")).await;
    let pair = flash_cookie_pair(&response).unwrap();

    let request = Request::builder()
        .uri("/venues")
        .header(header::COOKIE, pair)
        .body(Body::empty())
        .unwrap();
    let response = t.send(request).await;

    let cleared = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cleared.starts_with("fyyur_flash=;"));
    assert!(body_text(response).await.contains("Venue not found"));
}
