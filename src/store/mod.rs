//! Journal entry storage.
//!
//! The whole journal lives in one JSON file. Every write replaces the file
//! through a temporary sibling and a rename, so a crash leaves either the
//! old or the new journal on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest title taken from entry content.
pub const MAX_TITLE_CHARS: usize = 60;

/// Errors from reading or writing the journal file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access journal {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("journal {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no journal entry with id {0}")]
    NotFound(u64),
}

/// A single journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub created: DateTime<Utc>,
    pub title: String,
    pub content: String,
}

impl Entry {
    /// Creation time in local time, e.g. `2024-03-01 09:30`.
    pub fn date_label(&self) -> String {
        self.created
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Journal {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

/// The journal file and its loaded entries.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    journal: Journal,
}

impl Store {
    /// Load the journal at `path`. A missing file is an empty journal.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let journal = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Journal::default(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        tracing::debug!(path = %path.display(), entries = journal.entries.len(), "journal opened");
        Ok(Self { path, journal })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, newest first.
    pub fn entries(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.journal.entries.iter().collect();
        entries.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        entries
    }

    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.journal.entries.iter().find(|e| e.id == id)
    }

    /// Add an entry created now and return its id.
    pub fn add(&mut self, title: &str, content: &str) -> Result<u64, StoreError> {
        self.add_at(title, content, Utc::now())
    }

    /// Add an entry with an explicit creation time.
    pub fn add_at(
        &mut self,
        title: &str,
        content: &str,
        created: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        let id = self.journal.next_id;
        self.journal.next_id += 1;
        self.journal.entries.push(Entry {
            id,
            created,
            title: title.to_string(),
            content: content.to_string(),
        });
        self.save()?;
        tracing::info!(id, "journal entry added");
        Ok(id)
    }

    /// Replace the content of an existing entry.
    pub fn update(&mut self, id: u64, content: &str) -> Result<(), StoreError> {
        let entry = self
            .journal
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        entry.content = content.to_string();
        self.save()?;
        tracing::info!(id, "journal entry updated");
        Ok(())
    }

    /// Remove an entry. Returns `false` if there was none with `id`.
    pub fn delete(&mut self, id: u64) -> Result<bool, StoreError> {
        let before = self.journal.entries.len();
        self.journal.entries.retain(|e| e.id != id);
        if self.journal.entries.len() == before {
            return Ok(false);
        }
        self.save()?;
        tracing::info!(id, "journal entry deleted");
        Ok(true)
    }

    fn save(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.journal).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

/// Tidy committed editor text for storage.
///
/// Trailing whitespace is removed from every line and trailing empty lines
/// are dropped. Returns `None` when nothing is left.
pub fn clean_content(text: &str) -> Option<String> {
    let mut lines: Vec<&str> = text.split('\n').map(str::trim_end).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Title for an entry: the first non-blank line with heading markers
/// stripped, cut to [`MAX_TITLE_CHARS`].
pub fn title_from_content(content: &str) -> String {
    let first = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default();
    let title = first.trim_start_matches('#').trim_start();
    let title = if title.is_empty() { "Untitled" } else { title };
    title.chars().take(MAX_TITLE_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn journal_path(dir: &TempDir) -> PathBuf {
        dir.path().join("nested").join("journal.json")
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(journal_path(&dir)).unwrap();
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_add_persists_and_reloads() {
        let dir = TempDir::new().unwrap();
        let path = journal_path(&dir);
        let mut store = Store::open(&path).unwrap();
        let id = store.add("First", "hello\nworld").unwrap();
        assert_eq!(id, 1);

        let reopened = Store::open(&path).unwrap();
        let entry = reopened.get(id).unwrap();
        assert_eq!(entry.title, "First");
        assert_eq!(entry.content, "hello\nworld");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::open(journal_path(&dir)).unwrap();
        let a = store.add("a", "a").unwrap();
        assert!(store.delete(a).unwrap());
        let b = store.add("b", "b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_entries_are_newest_first() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::open(journal_path(&dir)).unwrap();
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        store.add_at("old", "x", early).unwrap();
        store.add_at("new", "y", late).unwrap();
        let titles: Vec<&str> = store.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["new", "old"]);
    }

    #[test]
    fn test_update_changes_content() {
        let dir = TempDir::new().unwrap();
        let path = journal_path(&dir);
        let mut store = Store::open(&path).unwrap();
        let id = store.add("t", "before").unwrap();
        store.update(id, "after").unwrap();
        assert_eq!(Store::open(&path).unwrap().get(id).unwrap().content, "after");
    }

    #[test]
    fn test_update_missing_entry_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::open(journal_path(&dir)).unwrap();
        assert!(matches!(store.update(9, "x"), Err(StoreError::NotFound(9))));
    }

    #[test]
    fn test_delete_missing_entry_returns_false() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::open(journal_path(&dir)).unwrap();
        assert!(!store.delete(3).unwrap());
    }

    #[test]
    fn test_open_corrupt_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Store::open(&path), Err(StoreError::Json { .. })));
    }

    #[test]
    fn test_clean_content_strips_trailing_whitespace() {
        assert_eq!(
            clean_content("a  \n b\t\n\n  \n").as_deref(),
            Some("a\n b")
        );
    }

    #[test]
    fn test_clean_content_empty_is_none() {
        assert_eq!(clean_content(""), None);
        assert_eq!(clean_content("   \n\n "), None);
    }

    #[test]
    fn test_title_from_content() {
        assert_eq!(title_from_content("\n## Morning walk\nrain"), "Morning walk");
        assert_eq!(title_from_content("plain first line"), "plain first line");
        assert_eq!(title_from_content("#"), "Untitled");
        assert_eq!(title_from_content(&"x".repeat(100)).len(), MAX_TITLE_CHARS);
    }
}
