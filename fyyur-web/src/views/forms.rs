//! Form widgets that re-display submitted values and field errors

use super::escape;
use crate::forms::{FieldErrors, SubmittedFields};
use std::fmt::Write as _;

/// Whether a form creates a new row or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(i64),
}

impl FormTarget {
    /// Form action for an entity collection such as `/venues`
    pub fn action(self, collection: &str) -> String {
        match self {
            FormTarget::Create => format!("{collection}/create"),
            FormTarget::Edit(id) => format!("{collection}/{id}/edit"),
        }
    }
}

fn errors_for(errors: &FieldErrors, name: &str) -> String {
    let mut html = String::new();
    for message in errors.for_field(name) {
        let _ = write!(html, r#"<div class="field-error">{}</div>"#, escape(message));
    }
    html
}

/// Single-line input (`text`, `url`, `tel`, `datetime-local`...)
pub fn input(kind: &str, name: &str, label: &str, fields: &SubmittedFields, errors: &FieldErrors) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="{kind}" id="{name}" name="{name}" value="{value}">
{errors}"#,
        value = escape(fields.text(name)),
        errors = errors_for(errors, name),
    )
}

pub fn textarea(name: &str, label: &str, fields: &SubmittedFields, errors: &FieldErrors) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<textarea id="{name}" name="{name}" rows="3">{value}</textarea>
{errors}"#,
        value = escape(fields.text(name)),
        errors = errors_for(errors, name),
    )
}

/// Single choice drop-down
pub fn select(name: &str, label: &str, options: &[&str], fields: &SubmittedFields, errors: &FieldErrors) -> String {
    let current = fields.text(name);
    let mut html = format!(r#"<label for="{name}">{label}</label><select id="{name}" name="{name}">"#);
    html.push_str(r#"<option value=""></option>"#);
    for option in options {
        let selected = if *option == current { " selected" } else { "" };
        let option = escape(option);
        let _ = write!(html, r#"<option value="{option}"{selected}>{option}</option>"#);
    }
    html.push_str("</select>");
    html.push_str(&errors_for(errors, name));
    html
}

/// Multiple choice list; each selection is submitted under the same name
pub fn multi_select(
    name: &str,
    label: &str,
    options: &[&str],
    fields: &SubmittedFields,
    errors: &FieldErrors,
) -> String {
    let chosen = fields.all(name);
    let mut html = format!(r#"<label for="{name}">{label}</label><select id="{name}" name="{name}" multiple size="8">"#);
    for option in options {
        let selected = if chosen.contains(option) { " selected" } else { "" };
        let option = escape(option);
        let _ = write!(html, r#"<option value="{option}"{selected}>{option}</option>"#);
    }
    html.push_str("</select>");
    html.push_str(&errors_for(errors, name));
    html
}

pub fn checkbox(name: &str, label: &str, fields: &SubmittedFields) -> String {
    let checked = if fields.flag(name) { " checked" } else { "" };
    format!(r#"<label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label>"#)
}
