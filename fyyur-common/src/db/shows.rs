//! Show persistence
//!
//! Reads return [`ShowListing`], the show joined with the names and images
//! of its venue and artist, since every page that lists shows needs them.

use super::models::{ShowDraft, ShowListing};
use super::repository::Repository;
use crate::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

/// Show selection criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFilter {
    All,
    ForVenue(i64),
    ForArtist(i64),
}

const SELECT_SHOW: &str = r#"
    SELECT s.id, s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
           s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
           s.start_time
    FROM shows s
    JOIN venues v ON v.id = s.venue_id
    JOIN artists a ON a.id = s.artist_id
"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShowRepository;

fn listing_from_row(row: &SqliteRow) -> Result<ShowListing> {
    Ok(ShowListing {
        id: row.try_get("id")?,
        venue_id: row.try_get("venue_id")?,
        venue_name: row.try_get("venue_name")?,
        venue_image_link: row.try_get("venue_image_link")?,
        artist_id: row.try_get("artist_id")?,
        artist_name: row.try_get("artist_name")?,
        artist_image_link: row.try_get("artist_image_link")?,
        start_time: row.try_get("start_time")?,
    })
}

impl Repository for ShowRepository {
    type Entity = ShowListing;
    type Draft = ShowDraft;
    type Filter = ShowFilter;

    const ENTITY: &'static str = "Show";

    async fn find_by_id(&self, conn: &mut SqliteConnection, id: i64) -> Result<Option<ShowListing>> {
        let row = sqlx::query(&format!("{SELECT_SHOW} WHERE s.id = ?"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        row.as_ref().map(listing_from_row).transpose()
    }

    async fn find_by_filter(&self, conn: &mut SqliteConnection, filter: &ShowFilter) -> Result<Vec<ShowListing>> {
        let rows = match *filter {
            ShowFilter::All => {
                sqlx::query(&format!("{SELECT_SHOW} ORDER BY s.start_time, s.id"))
                    .fetch_all(&mut *conn)
                    .await?
            }
            ShowFilter::ForVenue(venue_id) => {
                sqlx::query(&format!("{SELECT_SHOW} WHERE s.venue_id = ? ORDER BY s.start_time, s.id"))
                    .bind(venue_id)
                    .fetch_all(&mut *conn)
                    .await?
            }
            ShowFilter::ForArtist(artist_id) => {
                sqlx::query(&format!("{SELECT_SHOW} WHERE s.artist_id = ? ORDER BY s.start_time, s.id"))
                    .bind(artist_id)
                    .fetch_all(&mut *conn)
                    .await?
            }
        };

        rows.iter().map(listing_from_row).collect()
    }

    async fn insert(&self, conn: &mut SqliteConnection, draft: &ShowDraft) -> Result<i64> {
        let result = sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
            .bind(draft.venue_id)
            .bind(draft.artist_id)
            .bind(draft.start_time)
            .execute(&mut *conn)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, conn: &mut SqliteConnection, id: i64, draft: &ShowDraft) -> Result<()> {
        let result = sqlx::query("UPDATE shows SET venue_id = ?, artist_id = ?, start_time = ? WHERE id = ?")
            .bind(draft.venue_id)
            .bind(draft.artist_id)
            .bind(draft.start_time)
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound { entity: Self::ENTITY, id });
        }
        Ok(())
    }

    async fn delete(&self, conn: &mut SqliteConnection, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM shows WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound { entity: Self::ENTITY, id });
        }
        Ok(())
    }
}
