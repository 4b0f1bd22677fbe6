use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The root configuration structure for the analytics core.
///
/// Both values are required; there are no baked-in defaults. They are read
/// from `VANGUARD_DATA_DIR` and `VANGUARD_EVENTS_FILE`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// The base directory holding the prepared data files.
    pub data_dir: String,
    /// The file name of the final event log within `data_dir`.
    pub events_file: String,
}

impl Settings {
    /// The full path of the event log, resolved from the two configured parts.
    pub fn events_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.events_file)
    }

    /// Rejects configurations that deserialized but are unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "data_dir must not be empty".to_string(),
            ));
        }
        if self.events_file.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "events_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
