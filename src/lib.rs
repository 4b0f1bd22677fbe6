//! # Vanguard Funnel Analytics
//!
//! The analytics core behind the Vanguard A/B test dashboard. It loads the
//! prepared client interaction log, derives filtered views of it, and
//! computes the experiment's funnel metrics as plain structured records.
//! Rendering those records (charts, cards, widget wiring) belongs to an
//! external presentation layer that consumes this crate.
//!
//! ## Pipeline
//!
//! 1. [`configuration::load_settings`] resolves the data location from the
//!    environment (no defaults baked in).
//! 2. [`loader::load`] reads the event log into an immutable
//!    [`EventTable`].
//! 3. [`filtering::apply`] derives a view from request-scoped
//!    [`FilterParams`]; the source table is never mutated.
//! 4. [`MetricsEngine`] computes the five funnel metrics over the view,
//!    and [`lookup::lookup`] projects a searched client's summary from the
//!    unfiltered table.
//!
//! Every step is synchronous and side-effect free past loading, so a
//! single loaded snapshot can serve any number of concurrent
//! filter-and-compute requests without locking.
//!
//! ```no_run
//! use vanguard::{AgeRange, FilterParams, MetricsEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     vanguard::init_tracing();
//!     let settings = vanguard::load_settings()?;
//!     let table = vanguard::load(&settings)?;
//!
//!     let view = vanguard::apply(&table, &FilterParams::for_age_range(AgeRange::new(18, 65)));
//!     let engine = MetricsEngine::new();
//!     let summary = engine.summary(&view);
//!     println!("clients in view: {}", summary.clients);
//!     Ok(())
//! }
//! ```

/// Installs the process-wide `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Call once at startup before loading data. Repeated calls are no-ops, so
/// it is also safe from test harnesses that share a process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// Re-export the pipeline stages to provide a clean public API.
pub use analytics::{
    BounceReport, ConfirmationReport, DropRateReport, ErrorRateReport, MetricsEngine,
    NavigationReport, StageRates, StageTimes, SummaryReport,
};
pub use configuration::{ConfigError, Settings, load_settings};
pub use core_types::{
    CoreError, DATE_TIME_FORMAT, EventRecord, EventTable, FunnelStage, Gender, ProcessStep,
    Variation,
};
pub use filtering::{AgeRange, FilterError, FilterParams, GenderFilter, VariationFilter, apply};
pub use loader::{LoaderError, load};
pub use lookup::{ClientSummary, LookupError, lookup};
