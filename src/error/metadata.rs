use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading command help records at startup.
///
/// Any variant aborts the whole load. The bot never serves with a partially
/// populated metadata store.
#[derive(Error, Debug)]
pub enum StartupLoadError {
    /// The record directory itself could not be listed.
    #[error("Failed to read command data directory '{}': {source}", path.display())]
    ReadDirectory {
        /// Directory that was being enumerated
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A record file was found but its contents could not be read.
    #[error("Failed to read command record '{}': {source}", path.display())]
    ReadRecord {
        /// Record file that failed to read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A record file does not deserialize into a command record.
    #[error("Failed to parse command record '{}': {source}", path.display())]
    ParseRecord {
        /// Record file that failed to parse
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A record file parsed but violates a record invariant.
    #[error("Invalid command record '{}': {reason}", path.display())]
    InvalidRecord {
        /// Record file holding the invalid record
        path: PathBuf,
        /// Which invariant was violated
        reason: String,
    },
}

/// Lookup failure against the loaded metadata store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MetadataError {
    /// No record was loaded for the requested command name.
    #[error("No command record loaded for '{0}'")]
    NotFound(String),
}
