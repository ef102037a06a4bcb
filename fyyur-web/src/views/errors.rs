//! 404 and 500 pages

use super::{layout, SearchBox};

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        &[],
        SearchBox::None,
        r#"<h1>404</h1><p>Sorry, the page you were looking for does not exist.</p><p><a href="/">Back home</a></p>"#,
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server Error",
        &[],
        SearchBox::None,
        r#"<h1>500</h1><p>Something went wrong on our end. Please try again later.</p><p><a href="/">Back home</a></p>"#,
    )
}
