//! Venue form rules

use super::{
    choices, genres, optional_phone, optional_text, optional_url, required_choice, required_text, FieldErrors,
    SubmittedFields, MAX_LINK,
};
use fyyur_common::db::{Venue, VenueDraft};

/// Validate a submitted venue form into a draft
pub fn validate(fields: &SubmittedFields) -> Result<VenueDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let draft = VenueDraft {
        name: required_text(fields, &mut errors, "name"),
        city: required_text(fields, &mut errors, "city"),
        state: required_choice(fields, &mut errors, "state", choices::STATES),
        address: required_text(fields, &mut errors, "address"),
        phone: optional_phone(fields, &mut errors),
        image_link: optional_url(fields, &mut errors, "image_link"),
        facebook_link: optional_url(fields, &mut errors, "facebook_link"),
        website_link: optional_url(fields, &mut errors, "website_link"),
        genres: genres(fields, &mut errors),
        seeking_talent: fields.flag("seeking_talent"),
        seeking_description: optional_text(fields, &mut errors, "seeking_description", MAX_LINK),
    };

    errors.into_result(draft)
}

/// Field set that pre-fills the edit form from a stored venue
pub fn prefill(venue: &Venue) -> SubmittedFields {
    let v = &venue.fields;
    let mut fields = SubmittedFields::default();
    fields.push("name", v.name.as_str());
    fields.push("city", v.city.as_str());
    fields.push("state", v.state.as_str());
    fields.push("address", v.address.as_str());
    fields.push("phone", v.phone.clone().unwrap_or_default());
    fields.push("image_link", v.image_link.clone().unwrap_or_default());
    fields.push("facebook_link", v.facebook_link.clone().unwrap_or_default());
    fields.push("website_link", v.website_link.clone().unwrap_or_default());
    for genre in &v.genres {
        fields.push("genres", genre.as_str());
    }
    if v.seeking_talent {
        fields.push("seeking_talent", "y");
    }
    fields.push("seeking_description", v.seeking_description.clone().unwrap_or_default());
    fields
}
