//! Venue persistence

use super::contains_pattern;
use super::models::{Venue, VenueDraft};
use super::repository::Repository;
use crate::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{Row, SqliteConnection};

/// Venue selection criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VenueFilter {
    All,
    /// Case-insensitive substring match on name
    NameContains(String),
    /// Exact city/state pair
    Area { city: String, state: String },
}

const SELECT_VENUE: &str = r#"
    SELECT id, name, city, state, address, phone, image_link, facebook_link,
           website_link, genres, seeking_talent, seeking_description
    FROM venues
"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct VenueRepository;

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let genres: Json<Vec<String>> = row.try_get("genres")?;
    Ok(Venue {
        id: row.try_get("id")?,
        fields: VenueDraft {
            name: row.try_get("name")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
            image_link: row.try_get("image_link")?,
            facebook_link: row.try_get("facebook_link")?,
            website_link: row.try_get("website_link")?,
            genres: genres.0,
            seeking_talent: row.try_get("seeking_talent")?,
            seeking_description: row.try_get("seeking_description")?,
        },
    })
}

impl Repository for VenueRepository {
    type Entity = Venue;
    type Draft = VenueDraft;
    type Filter = VenueFilter;

    const ENTITY: &'static str = "Venue";

    async fn find_by_id(&self, conn: &mut SqliteConnection, id: i64) -> Result<Option<Venue>> {
        let row = sqlx::query(&format!("{SELECT_VENUE} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        row.as_ref().map(venue_from_row).transpose()
    }

    async fn find_by_filter(&self, conn: &mut SqliteConnection, filter: &VenueFilter) -> Result<Vec<Venue>> {
        let rows = match filter {
            VenueFilter::All => {
                sqlx::query(&format!("{SELECT_VENUE} ORDER BY id"))
                    .fetch_all(&mut *conn)
                    .await?
            }
            VenueFilter::NameContains(term) => {
                sqlx::query(&format!("{SELECT_VENUE} WHERE name LIKE ? ESCAPE '\\' ORDER BY id"))
                    .bind(contains_pattern(term))
                    .fetch_all(&mut *conn)
                    .await?
            }
            VenueFilter::Area { city, state } => {
                sqlx::query(&format!("{SELECT_VENUE} WHERE city = ? AND state = ? ORDER BY id"))
                    .bind(city)
                    .bind(state)
                    .fetch_all(&mut *conn)
                    .await?
            }
        };

        rows.iter().map(venue_from_row).collect()
    }

    async fn insert(&self, conn: &mut SqliteConnection, draft: &VenueDraft) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO venues (
                name, city, state, address, phone, image_link, facebook_link,
                website_link, genres, seeking_talent, seeking_description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website_link)
        .bind(Json(&draft.genres))
        .bind(draft.seeking_talent)
        .bind(&draft.seeking_description)
        .execute(&mut *conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, conn: &mut SqliteConnection, id: i64, draft: &VenueDraft) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE venues SET
                name = ?, city = ?, state = ?, address = ?, phone = ?,
                image_link = ?, facebook_link = ?, website_link = ?, genres = ?,
                seeking_talent = ?, seeking_description = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website_link)
        .bind(Json(&draft.genres))
        .bind(draft.seeking_talent)
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
        let result = sqlx::query("DELETE FROM venues WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound { entity: Self::ENTITY, id });
        }
        Ok(())
    }
}
