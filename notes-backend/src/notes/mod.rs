//! Notes system backed by a flat JSON file of title/content notes
//!
//! Each request loads the whole collection, optionally mutates it, and saves
//! it back. Notes are addressed by their position in the loaded sequence.

pub mod collection;
pub mod model;
pub mod store;

pub use model::{Note, NoteForm};
pub use store::{JsonFileStore, NoteRepository};
