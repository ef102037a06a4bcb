//! Human-readable date display
//!
//! Two named presets, English locale:
//! - `full`   → `Saturday June, 15, 2019 at 9:30PM`
//! - `medium` → `Sat 06, 15, 2019 9:30PM`
//!
//! Presentation only; stored timestamps are never rewritten.

use chrono::{DateTime, Utc};
use std::str::FromStr;

/// Named display preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    Full,
    #[default]
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

impl FromStr for DateFormat {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to `Medium`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "full" => DateFormat::Full,
            _ => DateFormat::Medium,
        })
    }
}

/// Render a stored timestamp with the given preset
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fyyur_common::{format_datetime, DateFormat};
///
/// let start = Utc.with_ymd_and_hms(2019, 6, 15, 21, 30, 0).unwrap();
/// assert_eq!(format_datetime(&start, DateFormat::Full), "Saturday June, 15, 2019 at 9:30PM");
/// assert_eq!(format_datetime(&start, DateFormat::Medium), "Sat 06, 15, 2019 9:30PM");
/// ```
pub fn format_datetime(value: &DateTime<Utc>, format: DateFormat) -> String {
    value.format(format.pattern()).to_string()
}
