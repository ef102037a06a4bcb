//! Artist pages

use super::forms::{checkbox, input, multi_select, select, textarea, FormTarget};
use super::venues::{search_body, show_cards, summary_list};
use super::{escape, genre_tags, image, layout, optional_link, SearchBox};
use crate::display::{ArtistDetail, SearchResults, Summary};
use crate::flash::FlashMessage;
use crate::forms::choices::{GENRES, STATES};
use crate::forms::{FieldErrors, SubmittedFields};

pub fn list_page(messages: &[FlashMessage], artists: &[Summary]) -> String {
    let content = if artists.is_empty() {
        r#"<h1>Artists</h1><p>No artists yet. <a href="/artists/create">List the first one.</a></p>"#.to_string()
    } else {
        format!(
            r#"<h1>Artists</h1>{}<p><a href="/artists/create">List a new artist</a></p>"#,
            summary_list("/artists", artists)
        )
    };
    layout("Artists", messages, SearchBox::Artists, &content)
}

pub fn search_page(messages: &[FlashMessage], results: &SearchResults) -> String {
    layout("Artist Search", messages, SearchBox::Artists, &search_body("/artists", results))
}

pub fn detail_page(messages: &[FlashMessage], detail: &ArtistDetail) -> String {
    let artist = &detail.artist;
    let a = &artist.fields;

    let seeking = if a.seeking_venue {
        format!(
            r#"<div class="seeking"><strong>Currently seeking performance venues</strong><p>{}</p></div>"#,
            escape(a.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string()
    };

    let content = format!(
        r#"<div class="detail">
<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<p>{city}, {state}</p>
<p>{phone}</p>
{website}{facebook}
{seeking}
{image}
<h2>{upcoming_count} Upcoming Shows</h2>
{upcoming}
<h2>{past_count} Past Shows</h2>
{past}
<p><a href="/artists/{id}/edit">Edit artist</a></p>
</div>"#,
        name = escape(&a.name),
        id = artist.id,
        genres = genre_tags(&a.genres),
        city = escape(&a.city),
        state = escape(&a.state),
        phone = escape(a.phone.as_deref().unwrap_or("No phone")),
        website = optional_link("Website", a.website_link.as_deref()),
        facebook = optional_link("Facebook", a.facebook_link.as_deref()),
        image = image(a.image_link.as_deref(), &a.name),
        upcoming_count = detail.upcoming_shows_count,
        upcoming = show_cards("/venues", &detail.upcoming_shows),
        past_count = detail.past_shows_count,
        past = show_cards("/venues", &detail.past_shows),
    );

    layout(&a.name, messages, SearchBox::Artists, &content)
}

pub fn form_page(
    messages: &[FlashMessage],
    target: FormTarget,
    fields: &SubmittedFields,
    errors: &FieldErrors,
) -> String {
    let heading = match target {
        FormTarget::Create => "List a new artist".to_string(),
        FormTarget::Edit(_) => format!("Edit artist {}", escape(fields.text("name"))),
    };

    let content = format!(
        r#"<h1>{heading}</h1>
<form class="entity" method="post" action="{action}">
{name}{city}{state}{phone}{image_link}{genres}{facebook}{website}
{seeking}{seeking_description}
<input type="submit" value="{submit}">
</form>"#,
        action = target.action("/artists"),
        name = input("text", "name", "Name", fields, errors),
        city = input("text", "city", "City", fields, errors),
        state = select("state", "State", STATES, fields, errors),
        phone = input("tel", "phone", "Phone", fields, errors),
        image_link = input("url", "image_link", "Image Link", fields, errors),
        genres = multi_select("genres", "Genres", GENRES, fields, errors),
        facebook = input("url", "facebook_link", "Facebook Link", fields, errors),
        website = input("url", "website_link", "Website Link", fields, errors),
        seeking = checkbox("seeking_venue", "Looking for venues", fields),
        seeking_description = textarea("seeking_description", "Seeking Description", fields, errors),
        submit = if target == FormTarget::Create { "Create Artist" } else { "Save Changes" },
    );

    layout(
        if target == FormTarget::Create { "New Artist" } else { "Edit Artist" },
        messages,
        SearchBox::None,
        &content,
    )
}
