use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unknown {kind} category: '{value}'")]
    UnknownCategory { kind: &'static str, value: String },
}
