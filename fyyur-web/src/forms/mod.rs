//! Submitted form fields and per-entity validation
//!
//! Validation is a pure function from the submitted field set to either a
//! normalized draft ready for the store or a list of field errors. The raw
//! field set is kept so a rejected form can be re-rendered with the values
//! the user typed.

pub mod artist;
pub mod choices;
pub mod show;
pub mod venue;

use once_cell::sync::Lazy;
use regex::Regex;
use url::{Host, Url};

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("valid phone regex"));

/// Raw `application/x-www-form-urlencoded` pairs, in submission order
///
/// Repeated keys (the `genres` multi-select) are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedFields {
    pairs: Vec<(String, String)>,
}

impl SubmittedFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        self.pairs.push((name.to_string(), value.into()));
    }

    /// First value for `name`, trimmed; empty string when absent
    pub fn text(&self, name: &str) -> &str {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .unwrap_or("")
    }

    /// Trimmed value, or `None` when absent or blank
    pub fn optional(&self, name: &str) -> Option<String> {
        let value = self.text(name);
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Every non-blank value submitted under `name`
    pub fn all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Checkbox semantics: present with any value other than an explicit "no"
    pub fn flag(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, value)| {
            key == name && !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "n" | "no" | "false" | "off" | "0")
        })
    }
}

/// Validation failures keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|(name, _)| *name == field)
    }

    /// `Ok(value)` when no error was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

pub(crate) const MAX_SHORT_TEXT: usize = 120;
pub(crate) const MAX_LINK: usize = 500;

/// Required single-line text with a length cap
pub(crate) fn required_text(fields: &SubmittedFields, errors: &mut FieldErrors, name: &'static str) -> String {
    let value = fields.text(name);
    if value.is_empty() {
        errors.add(name, "This field is required.");
    } else if value.chars().count() > MAX_SHORT_TEXT {
        errors.add(name, format!("Field cannot be longer than {MAX_SHORT_TEXT} characters."));
    }
    value.to_string()
}

/// Required value restricted to a fixed list
pub(crate) fn required_choice(
    fields: &SubmittedFields,
    errors: &mut FieldErrors,
    name: &'static str,
    allowed: &[&str],
) -> String {
    let value = fields.text(name);
    if value.is_empty() {
        errors.add(name, "This field is required.");
    } else if !allowed.contains(&value) {
        errors.add(name, "Not a valid choice.");
    }
    value.to_string()
}

/// At least one genre, each from the genre list; duplicates collapse
pub(crate) fn genres(fields: &SubmittedFields, errors: &mut FieldErrors) -> Vec<String> {
    let mut selected: Vec<String> = Vec::new();
    for genre in fields.all("genres") {
        if !choices::GENRES.contains(&genre) {
            errors.add("genres", format!("'{genre}' is not a valid choice."));
        } else if !selected.iter().any(|g| g == genre) {
            selected.push(genre.to_string());
        }
    }
    if fields.all("genres").is_empty() {
        errors.add("genres", "Select at least one genre.");
    }
    selected
}

/// Optional US phone number written as `xxx-xxx-xxxx`
pub(crate) fn optional_phone(fields: &SubmittedFields, errors: &mut FieldErrors) -> Option<String> {
    let phone = fields.optional("phone")?;
    if !is_valid_phone(&phone) {
        errors.add("phone", "Phone number must look like 555-555-5555.");
    }
    Some(phone)
}

fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Optional absolute http(s) URL
pub(crate) fn optional_url(fields: &SubmittedFields, errors: &mut FieldErrors, name: &'static str) -> Option<String> {
    let url = fields.optional(name)?;
    if url.len() > MAX_LINK || !is_valid_url(&url) {
        errors.add(name, "Invalid URL.");
    }
    Some(url)
}

fn is_valid_url(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    match url.host() {
        Some(Host::Domain(domain)) => domain.split('.').all(is_valid_label),
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
        None => false,
    }
}

/// One DNS label: letters, digits and inner hyphens
fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Optional free text with a length cap
pub(crate) fn optional_text(
    fields: &SubmittedFields,
    errors: &mut FieldErrors,
    name: &'static str,
    max: usize,
) -> Option<String> {
    let value = fields.optional(name)?;
    if value.chars().count() > max {
        errors.add(name, format!("Field cannot be longer than {max} characters."));
    }
    Some(value)
}
