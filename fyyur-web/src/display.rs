//! Page data assembled from stored rows
//!
//! Every view receives one of these structures; nothing here touches the
//! store, so the grouping and past/upcoming rules are checked in isolation.

use chrono::{DateTime, Utc};
use fyyur_common::db::{Artist, ShowListing, Venue};
use fyyur_common::schedule::{partition_by_start, upcoming_counts_by_owner};
use fyyur_common::{format_datetime, DateFormat};
use serde::Serialize;
use std::collections::HashMap;

/// Name plus upcoming-show count, used by lists and search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<Summary>,
}

/// One show as seen from a venue or artist page: the other party plus time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counterpart {
    pub id: i64,
    pub name: String,
    pub image_link: Option<String>,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<Counterpart>,
    pub upcoming_shows: Vec<Counterpart>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<Counterpart>,
    pub upcoming_shows: Vec<Counterpart>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Row of the shows list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Upcoming counts per venue id
pub fn venue_counts(shows: &[ShowListing], now: &DateTime<Utc>) -> HashMap<i64, usize> {
    upcoming_counts_by_owner(shows.iter().map(|s| (s.venue_id, &s.start_time)), now)
}

/// Upcoming counts per artist id
pub fn artist_counts(shows: &[ShowListing], now: &DateTime<Utc>) -> HashMap<i64, usize> {
    upcoming_counts_by_owner(shows.iter().map(|s| (s.artist_id, &s.start_time)), now)
}

fn summary(id: i64, name: &str, counts: &HashMap<i64, usize>) -> Summary {
    Summary {
        id,
        name: name.to_string(),
        num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
    }
}

pub fn venue_summaries(venues: &[Venue], counts: &HashMap<i64, usize>) -> Vec<Summary> {
    venues
        .iter()
        .map(|v| summary(v.id, &v.fields.name, counts))
        .collect()
}

pub fn artist_summaries(artists: &[Artist], counts: &HashMap<i64, usize>) -> Vec<Summary> {
    artists
        .iter()
        .map(|a| summary(a.id, &a.fields.name, counts))
        .collect()
}

/// Group venues by exact (city, state), areas in first-seen order
pub fn group_by_area(venues: &[Venue], counts: &HashMap<i64, usize>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();
    for venue in venues {
        let entry = summary(venue.id, &venue.fields.name, counts);
        match areas
            .iter_mut()
            .find(|area| area.city == venue.fields.city && area.state == venue.fields.state)
        {
            Some(area) => area.venues.push(entry),
            None => areas.push(Area {
                city: venue.fields.city.clone(),
                state: venue.fields.state.clone(),
                venues: vec![entry],
            }),
        }
    }
    areas
}

pub fn search_results(search_term: &str, data: Vec<Summary>) -> SearchResults {
    SearchResults {
        search_term: search_term.to_string(),
        count: data.len(),
        data,
    }
}

pub fn venue_detail(venue: Venue, shows: Vec<ShowListing>, now: &DateTime<Utc>) -> VenueDetail {
    let split = partition_by_start(shows, now, |s| s.start_time);
    let to_artist = |s: ShowListing| Counterpart {
        id: s.artist_id,
        name: s.artist_name,
        image_link: s.artist_image_link,
        start_time: format_datetime(&s.start_time, DateFormat::Medium),
    };
    let past_shows_count = split.past_count();
    let upcoming_shows_count = split.upcoming_count();
    let past_shows: Vec<Counterpart> = split.past.into_iter().map(to_artist).collect();
    let upcoming_shows: Vec<Counterpart> = split.upcoming.into_iter().map(to_artist).collect();

    VenueDetail {
        venue,
        past_shows_count,
        upcoming_shows_count,
        past_shows,
        upcoming_shows,
    }
}

pub fn artist_detail(artist: Artist, shows: Vec<ShowListing>, now: &DateTime<Utc>) -> ArtistDetail {
    let split = partition_by_start(shows, now, |s| s.start_time);
    let to_venue = |s: ShowListing| Counterpart {
        id: s.venue_id,
        name: s.venue_name,
        image_link: s.venue_image_link,
        start_time: format_datetime(&s.start_time, DateFormat::Medium),
    };
    let past_shows_count = split.past_count();
    let upcoming_shows_count = split.upcoming_count();
    let past_shows: Vec<Counterpart> = split.past.into_iter().map(to_venue).collect();
    let upcoming_shows: Vec<Counterpart> = split.upcoming.into_iter().map(to_venue).collect();

    ArtistDetail {
        artist,
        past_shows_count,
        upcoming_shows_count,
        past_shows,
        upcoming_shows,
    }
}

pub fn show_rows(shows: Vec<ShowListing>) -> Vec<ShowRow> {
    shows
        .into_iter()
        .map(|s| ShowRow {
            start_time: format_datetime(&s.start_time, DateFormat::Full),
            venue_id: s.venue_id,
            venue_name: s.venue_name,
            artist_id: s.artist_id,
            artist_name: s.artist_name,
            artist_image_link: s.artist_image_link,
        })
        .collect()
}
