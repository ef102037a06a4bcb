//! Show form rules

use super::{FieldErrors, SubmittedFields};
use chrono::{DateTime, NaiveDateTime, Utc};
use fyyur_common::db::ShowDraft;

/// Naive layouts accepted for `start_time`, interpreted as UTC
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Layout used to pre-fill the start time input
pub const INPUT_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

pub fn validate(fields: &SubmittedFields) -> Result<ShowDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let artist_id = required_id(fields, &mut errors, "artist_id");
    let venue_id = required_id(fields, &mut errors, "venue_id");

    let raw_start = fields.text("start_time");
    let start_time = if raw_start.is_empty() {
        errors.add("start_time", "This field is required.");
        None
    } else {
        let parsed = parse_start_time(raw_start);
        if parsed.is_none() {
            errors.add("start_time", "Not a valid datetime value.");
        }
        parsed
    };

    match (artist_id, venue_id, start_time) {
        (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => Ok(ShowDraft {
            venue_id,
            artist_id,
            start_time,
        }),
        _ => Err(errors),
    }
}

fn required_id(fields: &SubmittedFields, errors: &mut FieldErrors, name: &'static str) -> Option<i64> {
    let raw = fields.text(name);
    if raw.is_empty() {
        errors.add(name, "This field is required.");
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(name, "Must be a positive whole number.");
            None
        }
    }
}

/// Parse a submitted start time; RFC 3339 keeps its offset, naive values are UTC
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.and_utc())
}
