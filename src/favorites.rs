//! Favorites store for saved city/country pairs
//!
//! Provides a `FavoritesStore` that keeps an ordered, deduplicated list of
//! favorite cities and persists it as a JSON file, degrading gracefully when
//! the file is missing or malformed.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the persisted list inside the data directory
const FAVORITES_FILE: &str = "favorites.json";

/// A saved city/country pair for one-click re-query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// City name, stored trimmed and title-cased
    pub city: String,
    /// Country display name exactly as selected
    pub country: String,
}

/// Uppercases the first letter of each run of word characters
///
/// The remainder of each word is left as typed, and surrounding whitespace
/// is preserved. This is the rule the city input applies live on every
/// edit, so a stored favorite always matches what the field showed when it
/// was saved.
pub fn title_case_words(raw: &str) -> String {
    let mut cased = String::with_capacity(raw.len());
    let mut at_word_start = true;

    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                cased.extend(ch.to_uppercase());
            } else {
                cased.push(ch);
            }
            at_word_start = false;
        } else {
            cased.push(ch);
            at_word_start = true;
        }
    }

    cased
}

/// Normalizes a city name for storage and deduplication
///
/// Trimming plus [`title_case_words`].
pub fn normalize_city(raw: &str) -> String {
    title_case_words(raw.trim())
}

/// Manages the favorites list and its backing file
///
/// The list is loaded once at construction and written back synchronously on
/// every mutation, so a fresh store over the same directory observes every
/// completed `add` or `remove`. When no platform data directory can be
/// resolved the store still works for the session, it just cannot persist.
#[derive(Debug)]
pub struct FavoritesStore {
    /// Backing file, `None` when persistence is unavailable
    path: Option<PathBuf>,
    /// Current entries in insertion order
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    /// Creates a store over the XDG-compliant data directory
    ///
    /// Uses `~/.local/share/clima/favorites.json` on Linux, or the
    /// equivalent platform path elsewhere.
    pub fn new() -> Self {
        let path = ProjectDirs::from("", "", "clima")
            .map(|dirs| dirs.data_dir().join(FAVORITES_FILE));
        Self::open(path)
    }

    /// Creates a store over a custom directory
    ///
    /// Useful for testing or when a specific location is needed.
    pub fn with_dir(dir: &Path) -> Self {
        Self::open(Some(dir.join(FAVORITES_FILE)))
    }

    fn open(path: Option<PathBuf>) -> Self {
        let entries = path.as_deref().map(load_entries).unwrap_or_default();
        Self { path, entries }
    }

    /// Current entries in insertion order, which is also display order
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Number of saved favorites
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a city/country pair to the list
    ///
    /// The city is normalized first. Returns `Ok(false)` without touching
    /// the list when either field is empty or the normalized pair is
    /// already present; otherwise appends to the end, persists the full
    /// list, and returns `Ok(true)`.
    ///
    /// # Errors
    /// Returns an error only when the list changed but writing it to disk
    /// failed; the in-memory list keeps the new entry in that case.
    pub fn add(&mut self, city: &str, country: &str) -> io::Result<bool> {
        let city = normalize_city(city);
        if city.is_empty() || country.trim().is_empty() {
            return Ok(false);
        }

        let exists = self
            .entries
            .iter()
            .any(|entry| entry.city == city && entry.country == country);
        if exists {
            return Ok(false);
        }

        self.entries.push(FavoriteEntry {
            city,
            country: country.to_string(),
        });
        self.persist()?;
        Ok(true)
    }

    /// Removes the entry at the given position
    ///
    /// An out-of-range index is a silent no-op and does not rewrite the
    /// file.
    ///
    /// # Errors
    /// Returns an error when the rewritten list cannot be written to disk.
    pub fn remove(&mut self, index: usize) -> io::Result<()> {
        if index >= self.entries.len() {
            return Ok(());
        }

        self.entries.remove(index);
        self.persist()
    }

    /// Writes the full list to the backing file
    fn persist(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(path, json)
    }
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the persisted list, returning an empty list when the file is
/// missing, unreadable, or does not match the expected schema
fn load_entries(path: &Path) -> Vec<FavoriteEntry> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };

    serde_json::from_str(&content).unwrap_or_default()
}
