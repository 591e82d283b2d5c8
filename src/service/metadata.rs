//! Command metadata store for detailed help records.
//!
//! This module provides the `CommandMetadataStore`, which loads every command help
//! record from a directory once during startup and then serves lookups from memory.
//! The store is never mutated after `load` returns, so it can be shared across all
//! concurrent invocations behind an `Arc` without locking.

use std::{
    collections::HashMap,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::metadata::{MetadataError, StartupLoadError},
    model::command::CommandRecord,
};

/// File extension of command record files.
const RECORD_EXTENSION: &str = "json";

/// Read-only mapping from command name to help record.
#[derive(Debug, Default)]
pub struct CommandMetadataStore {
    records: HashMap<String, CommandRecord>,
}

impl CommandMetadataStore {
    /// Loads every command record in a directory.
    ///
    /// Enumerates the directory once. Each regular file with a `.json` extension is
    /// parsed into a `CommandRecord` keyed by the file name without its extension
    /// (case-sensitive). Files with any other extension and subdirectories are ignored.
    ///
    /// Loading is fail-fast: the first unreadable, unparsable or invalid record aborts
    /// the whole load, so the bot never starts serving with partial metadata.
    ///
    /// # Arguments
    /// - `dir` - Directory containing the record files
    ///
    /// # Returns
    /// - `Ok(CommandMetadataStore)` - Store holding every record in the directory
    /// - `Err(StartupLoadError::ReadDirectory)` - Directory missing or unreadable
    /// - `Err(StartupLoadError::ReadRecord)` - A record file could not be read
    /// - `Err(StartupLoadError::ParseRecord)` - A record file is not a valid record
    /// - `Err(StartupLoadError::InvalidRecord)` - A record has an empty title or description
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, StartupLoadError> {
        let dir = dir.as_ref();
        let read_dir_err = |source| StartupLoadError::ReadDirectory {
            path: dir.to_path_buf(),
            source,
        };

        let mut records = HashMap::new();

        for entry in fs::read_dir(dir).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let path = entry.path();

            let Some(name) = record_name(&path) else {
                continue;
            };

            // Follows symlinks, so a linked record file still counts
            if !path.is_file() {
                continue;
            }

            let record = read_record(&path)?;
            tracing::debug!("Loaded help record for '{}' from {}", name, path.display());
            records.insert(name, record);
        }

        Ok(Self { records })
    }

    /// Looks up the help record for a command.
    ///
    /// # Arguments
    /// - `name` - Command name (case-sensitive)
    ///
    /// # Returns
    /// - `Ok(&CommandRecord)` - The loaded record
    /// - `Err(MetadataError::NotFound)` - No record was loaded under that name
    pub fn get(&self, name: &str) -> Result<&CommandRecord, MetadataError> {
        self.records
            .get(name)
            .ok_or_else(|| MetadataError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names of all loaded records, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Derives the command name from a record path.
///
/// Returns `None` when the path does not carry the record extension.
fn record_name(path: &Path) -> Option<String> {
    if path.extension() != Some(OsStr::new(RECORD_EXTENSION)) {
        return None;
    }

    path.file_stem()
        .and_then(OsStr::to_str)
        .map(str::to_string)
}

/// Reads, parses and validates a single record file.
fn read_record(path: &Path) -> Result<CommandRecord, StartupLoadError> {
    let to_path = || -> PathBuf { path.to_path_buf() };

    let contents = fs::read_to_string(path).map_err(|source| StartupLoadError::ReadRecord {
        path: to_path(),
        source,
    })?;

    let record: CommandRecord =
        serde_json::from_str(&contents).map_err(|source| StartupLoadError::ParseRecord {
            path: to_path(),
            source,
        })?;

    if record.title.trim().is_empty() {
        return Err(StartupLoadError::InvalidRecord {
            path: to_path(),
            reason: "title must not be empty".to_string(),
        });
    }

    if record.description.trim().is_empty() {
        return Err(StartupLoadError::InvalidRecord {
            path: to_path(),
            reason: "description must not be empty".to_string(),
        });
    }

    Ok(record)
}

#[cfg(test)]
mod test;
