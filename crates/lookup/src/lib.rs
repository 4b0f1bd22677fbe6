//! # Vanguard Individual Lookup
//!
//! Projects a single client's event rows into a per-client summary record
//! for the dashboard's search box. Runs against the unfiltered table: the
//! client-ID path is independent of the aggregate filter state.

use core_types::{DATE_TIME_FORMAT, EventRecord, EventTable, Gender, ProcessStep, Variation};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod error;

pub use error::LookupError;

/// Everything the dashboard shows about one searched client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub client_id: u64,
    /// Occurrences of each funnel step across the client's rows, in funnel
    /// order. The counts sum to the number of matched rows.
    pub step_counts: BTreeMap<ProcessStep, usize>,
    /// All rows of one client share one cohort assignment.
    pub variation: Variation,
    pub age: u32,
    pub tenure_years: u32,
    pub gender: Gender,
    /// Mean balance across the matched rows.
    pub average_balance: Decimal,
    /// The most recent `date_time` among the matched rows.
    pub last_access: NaiveDateTime,
}

/// Projects the rows of `client_id` into a [`ClientSummary`].
///
/// An unknown client is `Ok(None)`, which the caller renders as a "no
/// client" message. A malformed timestamp on any matched record is a
/// [`LookupError`], surfaced rather than silently dropped.
pub fn lookup(table: &EventTable, client_id: u64) -> Result<Option<ClientSummary>, LookupError> {
    let rows: Vec<&EventRecord> = table.iter().filter(|r| r.client_id == client_id).collect();
    let Some(first) = rows.first() else {
        tracing::debug!(client_id, "no rows matched the searched client");
        return Ok(None);
    };

    let mut step_counts: BTreeMap<ProcessStep, usize> = BTreeMap::new();
    for row in &rows {
        *step_counts.entry(row.process_step).or_insert(0) += 1;
    }

    let balance_sum: Decimal = rows.iter().map(|r| r.bal).sum();

    // Every matched timestamp must parse, not just the latest one.
    let mut last_access = parse_timestamp(first)?;
    for row in rows.iter().skip(1) {
        let parsed = parse_timestamp(row)?;
        if parsed > last_access {
            last_access = parsed;
        }
    }

    Ok(Some(ClientSummary {
        client_id,
        step_counts,
        variation: first.variation,
        age: first.clnt_age,
        tenure_years: first.clnt_tenure_yr,
        gender: first.gendr,
        average_balance: balance_sum / Decimal::from(rows.len() as u64),
        last_access,
    }))
}

fn parse_timestamp(record: &EventRecord) -> Result<NaiveDateTime, LookupError> {
    NaiveDateTime::parse_from_str(&record.date_time, DATE_TIME_FORMAT).map_err(|source| {
        LookupError::MalformedTimestamp {
            value: record.date_time.clone(),
            source,
        }
    })
}
