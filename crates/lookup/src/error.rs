use core_types::DATE_TIME_FORMAT;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Malformed timestamp '{value}' on a matched record: expected format {DATE_TIME_FORMAT}")]
    MalformedTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
