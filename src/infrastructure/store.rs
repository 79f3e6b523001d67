//! Habit store: the persisted, append-only log for one user

use crate::domain::entry::is_valid_habit;
use crate::domain::HabitEntry;
use crate::error::{HabitError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, info_span, warn};

/// Owns one user's habit entries and the file they are persisted to.
///
/// The file is rewritten in full after every [`record`](HabitStore::record).
/// It is not locked; running two sessions against the same file is
/// unsupported and the last writer wins.
#[derive(Debug)]
pub struct HabitStore {
    user_name: String,
    storage_path: Option<PathBuf>,
    entries: Vec<HabitEntry>,
}

impl HabitStore {
    /// Create a store for `user_name`, loading any existing log.
    ///
    /// With `storage_path` set to `None` the log is kept in memory only.
    /// A missing, corrupt or unreadable file yields an empty log.
    pub fn new(user_name: impl Into<String>, storage_path: Option<PathBuf>) -> Self {
        let mut store = HabitStore {
            user_name: user_name.into(),
            storage_path,
            entries: Vec::new(),
        };

        match store.load() {
            Ok(entries) => {
                info!(
                    user = %store.user_name,
                    entries = entries.len(),
                    "loaded habit log"
                );
                store.entries = entries;
            }
            Err(err) if err.is_recoverable_load() => {
                info!(user = %store.user_name, reason = %err, "starting with an empty habit log");
            }
            Err(err) => {
                warn!(user = %store.user_name, error = %err, "could not read habit log, starting empty");
            }
        }

        store
    }

    /// Create a store that never touches the file system
    pub fn in_memory(user_name: impl Into<String>) -> Self {
        Self::new(user_name, None)
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn storage_path(&self) -> Option<&Path> {
        self.storage_path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a habit stamped with the current time and persist the log.
    ///
    /// Casing is stored as given. Blank names are refused and return None.
    /// A failed save is logged and the entry stays in memory.
    pub fn record(&mut self, habit: &str) -> Option<&HabitEntry> {
        let span = info_span!("record", user = %self.user_name, habit = %habit);
        let _guard = span.enter();

        if !is_valid_habit(habit) {
            warn!("refusing to record a blank habit");
            return None;
        }
        info!("logging habit");

        let index = self.entries.len();
        self.entries.push(HabitEntry::now(habit));

        match self.save() {
            Ok(()) => info!(entries = self.entries.len(), "habit logged"),
            Err(err) => error!(error = %err, "failed to persist habit log, entry kept in memory only"),
        }

        self.entries.get(index)
    }

    /// Entries in insertion order, or None when nothing has been logged
    pub fn history(&self) -> Option<&[HabitEntry]> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.as_slice())
        }
    }

    /// Replace the storage file with the full log.
    ///
    /// The document goes to a sibling `.tmp` file first and is renamed over
    /// the storage file, so an interrupted save leaves the old log in place.
    pub fn save(&self) -> Result<()> {
        let Some(path) = self.storage_path.as_deref() else {
            debug!("persistence disabled, skipping save");
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents =
            serde_json::to_string_pretty(&self.entries).map_err(std::io::Error::from)?;
        contents.push('\n');

        let staging = staging_path(path);
        if let Err(err) = fs::write(&staging, contents).and_then(|()| fs::rename(&staging, path)) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }

        debug!(path = %path.display(), entries = self.entries.len(), "saved habit log");
        Ok(())
    }

    /// Read the storage file into an ordered entry list
    pub fn load(&self) -> Result<Vec<HabitEntry>> {
        let Some(path) = self.storage_path.as_deref() else {
            return Ok(Vec::new());
        };

        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HabitError::NotFound(path.to_path_buf())
            } else {
                HabitError::Io(e)
            }
        })?;

        serde_json::from_str(&contents).map_err(|e| HabitError::CorruptData {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
