//! Venue pages

use super::forms::{checkbox, input, multi_select, select, textarea, FormTarget};
use super::{escape, genre_tags, image, layout, optional_link, SearchBox};
use crate::display::{Area, Counterpart, SearchResults, Summary, VenueDetail};
use crate::flash::FlashMessage;
use crate::forms::choices::{GENRES, STATES};
use crate::forms::{FieldErrors, SubmittedFields};
use std::fmt::Write as _;

pub(crate) fn summary_list(collection: &str, items: &[Summary]) -> String {
    let mut html = String::from(r#"<ul class="items">"#);
    for item in items {
        let _ = write!(
            html,
            r#"<li><a href="{collection}/{id}">{name}</a><span class="count">{upcoming} upcoming shows</span></li>"#,
            id = item.id,
            name = escape(&item.name),
            upcoming = item.num_upcoming_shows,
        );
    }
    html.push_str("</ul>");
    html
}

pub(crate) fn search_body(collection: &str, results: &SearchResults) -> String {
    format!(
        r#"<h1>Number of search results for "{term}": {count}</h1>{list}"#,
        term = escape(&results.search_term),
        count = results.count,
        list = summary_list(collection, &results.data),
    )
}

pub(crate) fn show_cards(collection: &str, shows: &[Counterpart]) -> String {
    let mut html = String::new();
    for show in shows {
        let _ = write!(
            html,
            r#"<div class="show-card">{image}<div><a href="{collection}/{id}">{name}</a><br>{start}</div></div>"#,
            image = image(show.image_link.as_deref(), &show.name),
            id = show.id,
            name = escape(&show.name),
            start = escape(&show.start_time),
        );
    }
    html
}

pub fn list_page(messages: &[FlashMessage], areas: &[Area]) -> String {
    let mut content = String::from("<h1>Venues</h1>");
    if areas.is_empty() {
        content.push_str(r#"<p>No venues yet. <a href="/venues/create">List the first one.</a></p>"#);
    }
    for area in areas {
        let _ = write!(
            content,
            "<h2>{}, {}</h2>{}",
            escape(&area.city),
            escape(&area.state),
            summary_list("/venues", &area.venues)
        );
    }
    content.push_str(r#"<p><a href="/venues/create">List a new venue</a></p>"#);
    layout("Venues", messages, SearchBox::Venues, &content)
}

pub fn search_page(messages: &[FlashMessage], results: &SearchResults) -> String {
    layout("Venue Search", messages, SearchBox::Venues, &search_body("/venues", results))
}

pub fn detail_page(messages: &[FlashMessage], detail: &VenueDetail) -> String {
    let venue = &detail.venue;
    let v = &venue.fields;

    let seeking = if v.seeking_talent {
        format!(
            r#"<div class="seeking"><strong>Currently seeking talent</strong><p>{}</p></div>"#,
            escape(v.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };

    let content = format!(
        r#"<div class="detail">
<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<p>{address}<br>{city}, {state}</p>
<p>{phone}</p>
{website}{facebook}
{seeking}
{image}
<h2>{upcoming_count} Upcoming Shows</h2>
{upcoming}
<h2>{past_count} Past Shows</h2>
{past}
<p><a href="/venues/{id}/edit">Edit venue</a></p>
<form method="post" action="/venues/{id}">
    <button type="submit" class="danger">Delete venue</button>
</form>
</div>"#,
        name = escape(&v.name),
        id = venue.id,
        genres = genre_tags(&v.genres),
        address = escape(&v.address),
        city = escape(&v.city),
        state = escape(&v.state),
        phone = escape(v.phone.as_deref().unwrap_or("No phone")),
        website = optional_link("Website", v.website_link.as_deref()),
        facebook = optional_link("Facebook", v.facebook_link.as_deref()),
        image = image(v.image_link.as_deref(), &v.name),
        upcoming_count = detail.upcoming_shows_count,
        upcoming = show_cards("/artists", &detail.upcoming_shows),
        past_count = detail.past_shows_count,
        past = show_cards("/artists", &detail.past_shows),
    );

    layout(&v.name, messages, SearchBox::Venues, &content)
}

pub fn form_page(
    messages: &[FlashMessage],
    target: FormTarget,
    fields: &SubmittedFields,
    errors: &FieldErrors,
) -> String {
    let heading = match target {
        FormTarget::Create => "List a new venue".to_string(),
        FormTarget::Edit(_) => format!("Edit venue {}", escape(fields.text("name"))),
    };

    let content = format!(
        r#"<h1>{heading}</h1>
<form class="entity" method="post" action="{action}">
{name}{city}{state}{address}{phone}{image_link}{genres}{facebook}{website}
{seeking}{seeking_description}
<input type="submit" value="{submit}">
</form>"#,
        action = target.action("/venues"),
        name = input("text", "name", "Name", fields, errors),
        city = input("text", "city", "City", fields, errors),
        state = select("state", "State", STATES, fields, errors),
        address = input("text", "address", "Address", fields, errors),
        phone = input("tel", "phone", "Phone", fields, errors),
        image_link = input("url", "image_link", "Image Link", fields, errors),
        genres = multi_select("genres", "Genres", GENRES, fields, errors),
        facebook = input("url", "facebook_link", "Facebook Link", fields, errors),
        website = input("url", "website_link", "Website Link", fields, errors),
        seeking = checkbox("seeking_talent", "Looking for talent", fields),
        seeking_description = textarea("seeking_description", "Seeking Description", fields, errors),
        submit = if target == FormTarget::Create { "Create Venue" } else { "Save Changes" },
    );

    layout(
        if target == FormTarget::Create { "New Venue" } else { "Edit Venue" },
        messages,
        SearchBox::None,
        &content,
    )
}
