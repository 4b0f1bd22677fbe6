pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{FunnelStage, Gender, ProcessStep, Variation};
pub use error::CoreError;
pub use structs::{DATE_TIME_FORMAT, EventRecord, EventTable};
