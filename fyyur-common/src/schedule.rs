//! Past/upcoming classification of shows
//!
//! A show is upcoming when its start time is strictly after "now" at
//! request time. Classification is computed on every request and never
//! stored.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Strictly-after comparison; a show starting exactly now is past
pub fn is_upcoming(start_time: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    start_time > now
}

/// Upcoming-show count per owner id (venue or artist)
///
/// Owners with only past shows map to 0; owners with no shows are absent.
pub fn upcoming_counts_by_owner<'a, I>(shows: I, now: &DateTime<Utc>) -> HashMap<i64, usize>
where
    I: IntoIterator<Item = (i64, &'a DateTime<Utc>)>,
{
    let mut counts = HashMap::new();
    for (owner_id, start) in shows {
        let entry = counts.entry(owner_id).or_insert(0);
        if is_upcoming(start, now) {
            *entry += 1;
        }
    }
    counts
}

/// Shows split into past and upcoming, each keeping input order
#[derive(Debug, Clone, PartialEq)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Partitioned<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

/// Split `items` by comparing `start_of(item)` with `now`
pub fn partition_by_start<T, F>(items: Vec<T>, now: &DateTime<Utc>, start_of: F) -> Partitioned<T>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    let (upcoming, past) = items
        .into_iter()
        .partition(|item| is_upcoming(&start_of(item), now));
    Partitioned { past, upcoming }
}
