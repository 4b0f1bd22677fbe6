use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Event log not found at '{0}'")]
    MissingSource(PathBuf),

    #[error("Failed to parse the event log as tabular data: {0}")]
    Malformed(#[from] csv::Error),
}
