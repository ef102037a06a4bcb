use super::{layout, SearchBox};
use crate::flash::FlashMessage;

pub fn page(messages: &[FlashMessage]) -> String {
    let content = r#"<h1>Fyyur</h1>
<p>Find live music venues and artists, and book shows between them.</p>
<ul class="items">
    <li><a href="/venues/create">List a new venue</a></li>
    <li><a href="/artists/create">List a new artist</a></li>
    <li><a href="/shows/create">List a new show</a></li>
</ul>"#;
    layout("Home", messages, SearchBox::None, content)
}
