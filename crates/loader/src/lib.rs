//! # Vanguard Data Loader
//!
//! Reads the prepared event log from its configured location into an
//! in-memory [`EventTable`]. The loader performs no transformation: rows
//! are deserialized against the fixed schema and handed to the pure
//! filtering and analytics layers as-is.

use configuration::Settings;
use core_types::{EventRecord, EventTable};

pub mod error;

pub use error::LoaderError;

/// Loads the raw event table from the path resolved by `Settings`.
///
/// Fails with [`LoaderError::MissingSource`] when the file does not exist
/// and [`LoaderError::Malformed`] when any row cannot be deserialized
/// against the event schema.
pub fn load(settings: &Settings) -> Result<EventTable, LoaderError> {
    let path = settings.events_path();
    if !path.exists() {
        return Err(LoaderError::MissingSource(path));
    }

    let mut reader = csv::Reader::from_path(&path)?;
    let mut records: Vec<EventRecord> = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    tracing::info!(rows = records.len(), path = %path.display(), "event log loaded");

    Ok(EventTable::new(records))
}
