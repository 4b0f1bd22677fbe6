use crate::structs::DATE_TIME_FORMAT;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Malformed timestamp '{value}': expected format {DATE_TIME_FORMAT}")]
    MalformedTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
