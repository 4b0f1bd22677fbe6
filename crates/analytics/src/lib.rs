//! # Vanguard Metrics Engine
//!
//! This crate computes the five A/B funnel metrics of the experiment
//! dashboard: summary statistics, confirmation rate, drop rate, bounce
//! rate, navigation time, and the session-ordering error rate.
//!
//! ## Architectural Principles
//!
//! - **Pure logic crate:** it has no knowledge of files, environments, or
//!   rendering. It depends only on `core-types` and operates on whatever
//!   (filtered) table it is handed.
//! - **Stateless calculation:** the `MetricsEngine` holds no state. Every
//!   metric is an independent, synchronous, total function over a
//!   read-only table, so one undefined metric never blocks another and
//!   concurrent callers can share a single loaded snapshot.
//! - **Absent over bogus:** a rate that cannot be computed for lack of
//!   data is an explicit `None` in its report, never `NaN`, `inf`, a
//!   sentinel zero, or an error. The presentation layer decides how to
//!   render absence ("not enough data").
//!
//! ## Public API
//!
//! - `MetricsEngine`: the struct that contains the calculation logic.
//! - `report`: the plain structured records handed to the presentation
//!   layer (`SummaryReport`, `ConfirmationReport`, `DropRateReport`,
//!   `BounceReport`, `NavigationReport`, `ErrorRateReport`).

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::MetricsEngine;
pub use report::{
    BounceReport, ConfirmationReport, DropRateReport, ErrorRateReport, NavigationReport,
    StageRates, StageTimes, SummaryReport,
};
