//! Note persistence with whole-collection load and save
//!
//! The collection is always read and written as one unit. There is no locking:
//! two overlapping load/mutate/save cycles can lose one of the updates.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::Note;
use crate::error::StoreError;

/// Persistence boundary for the note collection
pub trait NoteRepository: Send + Sync {
    /// Load every note, newest first. Missing storage is initialized empty.
    fn load(&self) -> Result<Vec<Note>, StoreError>;

    /// Replace the stored collection with `notes`.
    fn save(&self, notes: &[Note]) -> Result<(), StoreError>;
}

/// Stores the collection as a pretty-printed JSON array in a single file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl NoteRepository for JsonFileStore {
    fn load(&self) -> Result<Vec<Note>, StoreError> {
        if !self.path.exists() {
            log::info!("[NOTES] Creating empty notes file at {}", self.path.display());
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        serde_json::from_str(&raw).map_err(|e| StoreError::json(&self.path, e))
    }

    fn save(&self, notes: &[Note]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(notes).map_err(|e| StoreError::json(&self.path, e))?;

        let dir = self.dir();
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        // Each save gets its own temp file beside the target, then renames over it
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        log::debug!("[NOTES] Saved {} notes to {}", notes.len(), self.path.display());
        Ok(())
    }
}

/// In-memory store for handler tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    notes: std::sync::Mutex<Vec<Note>>,
    saves: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: std::sync::Mutex::new(notes),
            saves: Default::default(),
        }
    }

    pub fn snapshot(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl NoteRepository for MemoryStore {
    fn load(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, notes: &[Note]) -> Result<(), StoreError> {
        *self.notes.lock().unwrap() = notes.to_vec();
        self.saves.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::model::now;
    use tempfile::tempdir;

    #[test]
    fn test_load_initializes_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("my-notes.json");
        let store = JsonFileStore::new(&path);

        assert!(!path.exists());
        let notes = store.load().expect("Failed to load");
        assert!(notes.is_empty());
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("notes.json"));

        let notes = vec![Note::new("A", "B", now()), Note::new("C", "D", now())];
        store.save(&notes).expect("Failed to save");

        let loaded = store.load().expect("Failed to load");
        assert_eq!(loaded, notes);
    }

    #[test]
    fn test_save_is_pretty_printed_camel_case() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let store = JsonFileStore::new(&path);

        store.save(&[Note::new("A", "B", now())]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n"));
        assert!(raw.contains("\"createdAt\""));
        assert!(!raw.contains("updatedAt"));
    }

    #[test]
    fn test_save_overwrites_and_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let store = JsonFileStore::new(&path);

        store.save(&[Note::new("old", "old", now())]).unwrap();
        store.save(&[]).unwrap();

        assert!(store.load().unwrap().is_empty());
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_concurrent_saves_never_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let store = JsonFileStore::new(&path);
        store.save(&[]).unwrap();

        let big: Vec<Note> = (0..50)
            .map(|i| Note::new(format!("note {}", i), "x".repeat(200), now()))
            .collect();
        let small = vec![Note::new("one", "single", now())];

        std::thread::scope(|s| {
            for worker in 0..4 {
                let store = &store;
                let notes = if worker % 2 == 0 { &big } else { &small };
                s.spawn(move || {
                    for _ in 0..100 {
                        store.save(notes).expect("Concurrent save failed");
                        let loaded = store.load().expect("Loaded a corrupt file");
                        assert!(loaded.len() == 50 || loaded.len() == 1);
                    }
                });
            }
        });

        let last = store.load().expect("Final load failed");
        assert!(last == big || last == small);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/data/notes.json");
        let store = JsonFileStore::new(&path);

        store.save(&[]).expect("Failed to save");
        assert!(path.exists());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "{ not a list").unwrap();

        let result = JsonFileStore::new(&path).load();
        assert!(matches!(result, Err(StoreError::Json { .. })));
    }
}
