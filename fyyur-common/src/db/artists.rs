//! Artist persistence

use super::contains_pattern;
use super::models::{Artist, ArtistDraft};
use super::repository::Repository;
use crate::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{Row, SqliteConnection};

/// Artist selection criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistFilter {
    All,
    /// Case-insensitive substring match on name
    NameContains(String),
}

const SELECT_ARTIST: &str = r#"
    SELECT id, name, city, state, phone, image_link, facebook_link,
           website_link, genres, seeking_venue, seeking_description
    FROM artists
"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct ArtistRepository;

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let genres: Json<Vec<String>> = row.try_get("genres")?;
    Ok(Artist {
        id: row.try_get("id")?,
        fields: ArtistDraft {
            name: row.try_get("name")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            phone: row.try_get("phone")?,
            image_link: row.try_get("image_link")?,
            facebook_link: row.try_get("facebook_link")?,
            website_link: row.try_get("website_link")?,
            genres: genres.0,
            seeking_venue: row.try_get("seeking_venue")?,
            seeking_description: row.try_get("seeking_description")?,
        },
    })
}

impl Repository for ArtistRepository {
    type Entity = Artist;
    type Draft = ArtistDraft;
    type Filter = ArtistFilter;

    const ENTITY: &'static str = "Artist";

    async fn find_by_id(&self, conn: &mut SqliteConnection, id: i64) -> Result<Option<Artist>> {
        let row = sqlx::query(&format!("{SELECT_ARTIST} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        row.as_ref().map(artist_from_row).transpose()
    }

    async fn find_by_filter(&self, conn: &mut SqliteConnection, filter: &ArtistFilter) -> Result<Vec<Artist>> {
        let rows = match filter {
            ArtistFilter::All => {
                sqlx::query(&format!("{SELECT_ARTIST} ORDER BY id"))
                    .fetch_all(&mut *conn)
                    .await?
            }
            ArtistFilter::NameContains(term) => {
                sqlx::query(&format!("{SELECT_ARTIST} WHERE name LIKE ? ESCAPE '\\' ORDER BY id"))
                    .bind(contains_pattern(term))
                    .fetch_all(&mut *conn)
                    .await?
            }
        };

        rows.iter().map(artist_from_row).collect()
    }

    async fn insert(&self, conn: &mut SqliteConnection, draft: &ArtistDraft) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO artists (
                name, city, state, phone, image_link, facebook_link,
                website_link, genres, seeking_venue, seeking_description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.phone)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website_link)
        .bind(Json(&draft.genres))
        .bind(draft.seeking_venue)
        .bind(&draft.seeking_description)
        .execute(&mut *conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, conn: &mut SqliteConnection, id: i64, draft: &ArtistDraft) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE artists SET
                name = ?, city = ?, state = ?, phone = ?, image_link = ?,
                facebook_link = ?, website_link = ?, genres = ?,
                seeking_venue = ?, seeking_description = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.phone)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website_link)
        .bind(Json(&draft.genres))
        .bind(draft.seeking_venue)
        .bind(&draft.seeking_description)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound { entity: Self::ENTITY, id });
        }
        Ok(())
    }

    async fn delete(&self, conn: &mut SqliteConnection, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM artists WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound { entity: Self::ENTITY, id });
        }
        Ok(())
    }
}
