//! Show pages

use super::forms::input;
use super::{escape, image, layout, SearchBox};
use crate::display::ShowRow;
use crate::flash::FlashMessage;
use crate::forms::{FieldErrors, SubmittedFields};
use std::fmt::Write as _;

pub fn list_page(messages: &[FlashMessage], shows: &[ShowRow]) -> String {
    let mut content = String::from("<h1>Shows</h1>");
    if shows.is_empty() {
        content.push_str("<p>No shows booked yet.</p>");
    }
    for show in shows {
        let _ = write!(
            content,
            r#"<div class="show-card">{image}<div><strong>{start}</strong><br><a href="/artists/{artist_id}">{artist}</a> playing at <a href="/venues/{venue_id}">{venue}</a></div></div>"#,
            image = image(show.artist_image_link.as_deref(), &show.artist_name),
            start = escape(&show.start_time),
            artist_id = show.artist_id,
            artist = escape(&show.artist_name),
            venue_id = show.venue_id,
            venue = escape(&show.venue_name),
        );
    }
    content.push_str(r#"<p><a href="/shows/create">List a new show</a></p>"#);
    layout("Shows", messages, SearchBox::None, &content)
}

pub fn form_page(messages: &[FlashMessage], fields: &SubmittedFields, errors: &FieldErrors) -> String {
    let content = format!(
        r#"<h1>List a new show</h1>
<form class="entity" method="post" action="/shows/create">
{artist_id}{venue_id}{start_time}
<input type="submit" value="Create Show">
</form>"#,
        artist_id = input("text", "artist_id", "Artist ID", fields, errors),
        venue_id = input("text", "venue_id", "Venue ID", fields, errors),
        start_time = input("text", "start_time", "Start Time (YYYY-MM-DD HH:MM:SS, UTC)", fields, errors),
    );
    layout("New Show", messages, SearchBox::None, &content)
}
