//! Artist form rules

use super::{
    choices, genres, optional_phone, optional_text, optional_url, required_choice, required_text, FieldErrors,
    SubmittedFields, MAX_LINK,
};
use fyyur_common::db::{Artist, ArtistDraft};

pub fn validate(fields: &SubmittedFields) -> Result<ArtistDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let draft = ArtistDraft {
        name: required_text(fields, &mut errors, "name"),
        city: required_text(fields, &mut errors, "city"),
        state: required_choice(fields, &mut errors, "state", choices::STATES),
        phone: optional_phone(fields, &mut errors),
        image_link: optional_url(fields, &mut errors, "image_link"),
        facebook_link: optional_url(fields, &mut errors, "facebook_link"),
        website_link: optional_url(fields, &mut errors, "website_link"),
        genres: genres(fields, &mut errors),
        seeking_venue: fields.flag("seeking_venue"),
        seeking_description: optional_text(fields, &mut errors, "seeking_description", MAX_LINK),
    };

    errors.into_result(draft)
}

pub fn prefill(artist: &Artist) -> SubmittedFields {
    let a = &artist.fields;
    let mut fields = SubmittedFields::default();
    fields.push("name", a.name.as_str());
    fields.push("city", a.city.as_str());
    fields.push("state", a.state.as_str());
    fields.push("phone", a.phone.clone().unwrap_or_default());
    fields.push("image_link", a.image_link.clone().unwrap_or_default());
    fields.push("facebook_link", a.facebook_link.clone().unwrap_or_default());
    fields.push("website_link", a.website_link.clone().unwrap_or_default());
    for genre in &a.genres {
        fields.push("genres", genre.as_str());
    }
    if a.seeking_venue {
        fields.push("seeking_venue", "y");
    }
    fields.push("seeking_description", a.seeking_description.clone().unwrap_or_default());
    fields
}
