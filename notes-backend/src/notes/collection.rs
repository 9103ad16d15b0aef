//! In-memory mutations of a loaded note collection.
//!
//! Notes are addressed by position. An index is only meaningful against the
//! collection it was read from.

use chrono::{DateTime, Utc};

use super::Note;

/// Insert a new note at the front (newest first)
pub fn add_note(notes: &mut Vec<Note>, title: &str, content: &str, at: DateTime<Utc>) {
    notes.insert(0, Note::new(title, content, at));
}

/// Replace title and content of the note at `index`, keeping its creation time.
/// Returns false if the index is out of bounds.
pub fn update_note(
    notes: &mut [Note],
    index: usize,
    title: &str,
    content: &str,
    at: DateTime<Utc>,
) -> bool {
    match notes.get_mut(index) {
        Some(note) => {
            note.title = title.to_string();
            note.content = content.to_string();
            note.updated_at = Some(at);
            true
        }
        None => false,
    }
}

/// Remove the note at `index`, shifting later notes down
pub fn remove_note(notes: &mut Vec<Note>, index: usize) -> Option<Note> {
    if index < notes.len() {
        Some(notes.remove(index))
    } else {
        None
    }
}

/// Parse a path segment into an index. Anything that is not a non-negative integer is rejected.
pub fn parse_index(raw: &str) -> Option<usize> {
    raw.parse().ok()
}
