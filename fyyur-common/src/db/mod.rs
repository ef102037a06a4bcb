//! Database models, schema initialization and repositories

pub mod artists;
pub mod init;
pub mod models;
pub mod repository;
pub mod shows;
pub mod venues;

pub use artists::{ArtistFilter, ArtistRepository};
pub use init::init_database;
pub use models::*;
pub use repository::{Repository, UnitOfWork};
pub use shows::{ShowFilter, ShowRepository};
pub use venues::{VenueFilter, VenueRepository};

/// Build a `LIKE ... ESCAPE '\'` pattern matching `term` as a literal substring
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
