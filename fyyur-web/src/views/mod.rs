//! HTML rendering
//!
//! Pages are plain `format!` templates around a shared layout. Every value
//! that came from a user or the store goes through [`escape`] first.

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod shows;
pub mod venues;

use crate::flash::{FlashLevel, FlashMessage};
use html_escape::encode_safe;
use std::fmt::Write as _;

/// Escape text for HTML element content and quoted attribute values
pub fn escape(text: &str) -> String {
    encode_safe(text).into_owned()
}

/// Which search box the header offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBox {
    None,
    Venues,
    Artists,
}

/// Full page: header navigation, pending flash notices, then `content`
pub fn layout(title: &str, messages: &[FlashMessage], search: SearchBox, content: &str) -> String {
    let search_form = match search {
        SearchBox::None => String::new(),
        SearchBox::Venues => search_form("/venues/search", "Find a venue"),
        SearchBox::Artists => search_form("/artists/search", "Find an artist"),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <link rel="stylesheet" href="/static/fyyur.css">
</head>
<body>
    <header>
        <a class="brand" href="/">🔥 Fyyur</a>
        <nav>
            <a href="/venues">Venues</a>
            <a href="/artists">Artists</a>
            <a href="/shows">Shows</a>
        </nav>
        {search_form}
    </header>
    <main>
        {flashes}
        {content}
    </main>
</body>
</html>
"#,
        title = escape(title),
        flashes = flash_block(messages),
    )
}

fn search_form(action: &str, placeholder: &str) -> String {
    format!(
        r#"<form class="search" method="post" action="{action}">
            <input type="search" name="search_term" placeholder="{placeholder}" aria-label="{placeholder}">
        </form>"#
    )
}

fn flash_block(messages: &[FlashMessage]) -> String {
    let mut html = String::new();
    for message in messages {
        let class = match message.level {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        };
        let _ = write!(html, r#"<div class="flash {class}">{}</div>"#, escape(&message.text));
    }
    html
}

/// Link, or nothing when the value is absent
pub(crate) fn optional_link(label: &str, href: Option<&str>) -> String {
    match href {
        Some(href) => format!(
            r#"<p><a href="{}" target="_blank" rel="noopener">{label}</a></p>"#,
            escape(href)
        ),
        None => String::new(),
    }
}

pub(crate) fn genre_tags(genres: &[String]) -> String {
    let mut html = String::from(r#"<div class="genres">"#);
    for genre in genres {
        let _ = write!(html, "<span>{}</span>", escape(genre));
    }
    html.push_str("</div>");
    html
}

pub(crate) fn image(src: Option<&str>, alt: &str) -> String {
    match src {
        Some(src) => format!(r#"<img src="{}" alt="{}">"#, escape(src), escape(alt)),
        None => String::new(),
    }
}
