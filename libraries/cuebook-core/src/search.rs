//! Substring search over catalog collections
//!
//! Pure filtering with no relevance ranking: matches keep the input order
//! and the input list is never mutated. An empty (or all-whitespace) term
//! matches everything.

use crate::types::{Recording, Song};

/// Implemented by catalog entities that can be matched against a
/// normalized (trimmed, lowercased) search term.
pub trait Searchable {
    /// Whether any searchable field contains `term`.
    ///
    /// `term` is guaranteed non-empty and lowercase. Absent optional
    /// fields simply never match.
    fn matches(&self, term: &str) -> bool;
}

/// Filter `items` by a case-insensitive substring search.
///
/// The term is trimmed and lowercased first; an empty normalized term
/// returns a clone of the whole input (same order, same length).
pub fn search<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches(&term))
        .cloned()
        .collect()
}

fn field_contains(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(term))
}

impl Searchable for Recording {
    /// A recording matches on its own title or performer, or on any
    /// contained track's title or performer.
    fn matches(&self, term: &str) -> bool {
        field_contains(self.title.as_deref(), term)
            || field_contains(self.performer.as_deref(), term)
            || self.tracks.iter().any(|track| {
                field_contains(track.title.as_deref(), term)
                    || field_contains(track.performer.as_deref(), term)
            })
    }
}

impl Searchable for Song {
    fn matches(&self, term: &str) -> bool {
        field_contains(self.title.as_deref(), term)
            || field_contains(self.artist.as_deref(), term)
            || field_contains(self.album.as_deref(), term)
            || field_contains(self.genre.as_deref(), term)
    }
}
