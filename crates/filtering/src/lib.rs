//! # Vanguard Filter Engine
//!
//! Applies the dashboard's filter state (age range, cohort, gender, client
//! ID) to a loaded [`EventTable`], producing a derived table for the
//! metrics engine. The source table is never mutated; every call derives a
//! fresh view, so filtering is idempotent and safe to repeat.
//!
//! Category strings arriving from the presentation layer are validated at
//! this boundary: an unrecognized variation or gender label is a typed
//! [`FilterError`], never a silent no-op.

use core_types::EventTable;

pub mod error;
pub mod params;

// Re-export the core types to provide a clean public API.
pub use error::FilterError;
pub use params::{AgeRange, FilterParams, GenderFilter, VariationFilter};

/// Applies all configured predicates conjunctively, returning the derived
/// table. No rows matching is an empty table, not an error; the metrics
/// engine handles the empty case explicitly.
pub fn apply(table: &EventTable, params: &FilterParams) -> EventTable {
    let records = table
        .iter()
        .filter(|record| params.retains(record))
        .cloned()
        .collect::<Vec<_>>();

    tracing::debug!(input = table.len(), retained = records.len(), "filter applied");

    EventTable::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{EventRecord, Gender, ProcessStep, Variation};
    use rust_decimal_macros::dec;

    fn record(client_id: u64, age: u32, variation: Variation, gender: Gender) -> EventRecord {
        EventRecord {
            visit_id: format!("v{client_id}"),
            client_id,
            process_step: ProcessStep::Start,
            date_time: "2024-03-01 10:00:00".into(),
            variation,
            clnt_age: age,
            clnt_tenure_yr: 5,
            gendr: gender,
            bal: dec!(1000),
            process_start: 1,
            process_confirm: 0,
            start_to_step1: 0,
            start_to_dropoff: 0,
            step1_to_step2: 0,
            step1_to_dropoff: 0,
            step2_to_step3: 0,
            step2_to_dropoff: 0,
            step3_to_confirm: 0,
            step3_to_dropoff: 0,
            start_time: dec!(0),
            step1_time: dec!(0),
            step2_time: dec!(0),
            step3_time: dec!(0),
        }
    }

    fn sample_table() -> EventTable {
        EventTable::new(vec![
            record(1, 25, Variation::Control, Gender::Male),
            record(2, 40, Variation::Test, Gender::Female),
            record(3, 55, Variation::Test, Gender::Unknown),
            record(4, 70, Variation::Control, Gender::Female),
        ])
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let table = sample_table();
        let filtered = apply(&table, &FilterParams::for_age_range(AgeRange::new(25, 55)));
        let ids: Vec<u64> = filtered.iter().map(|r| r.client_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn filters_compose_conjunctively() {
        let table = sample_table();
        let params = FilterParams {
            age_range: AgeRange::new(0, 120),
            variation: VariationFilter::Test,
            gender: GenderFilter::Female,
            client_id: None,
        };
        let filtered = apply(&table, &params);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].client_id, 2);
    }

    #[test]
    fn client_id_filter_is_exact_match() {
        let table = sample_table();
        let params = FilterParams {
            client_id: Some(3),
            ..FilterParams::for_age_range(AgeRange::new(0, 120))
        };
        let filtered = apply(&table, &params);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].client_id, 3);
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let table = sample_table();
        for (min, max) in [(0, 120), (30, 60), (80, 90)] {
            let params = FilterParams::for_age_range(AgeRange::new(min, max));
            let once = apply(&table, &params);
            let twice = apply(&once, &params);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn no_match_is_an_empty_table_not_an_error() {
        let table = sample_table();
        let filtered = apply(&table, &FilterParams::for_age_range(AgeRange::new(90, 99)));
        assert!(filtered.is_empty());
    }

    #[test]
    fn all_selections_are_no_ops() {
        let table = sample_table();
        let params = FilterParams {
            age_range: AgeRange::new(0, 120),
            variation: VariationFilter::All,
            gender: GenderFilter::All,
            client_id: None,
        };
        assert_eq!(apply(&table, &params), table);
    }

    #[test]
    fn unknown_category_strings_are_rejected() {
        let err = "Everybody".parse::<GenderFilter>().unwrap_err();
        assert!(matches!(err, FilterError::UnknownCategory { kind: "gender", .. }));

        let err = "control".parse::<VariationFilter>().unwrap_err();
        assert!(matches!(err, FilterError::UnknownCategory { kind: "variation", .. }));

        assert_eq!("Control".parse::<VariationFilter>().unwrap(), VariationFilter::Control);
        assert_eq!("Unknown".parse::<GenderFilter>().unwrap(), GenderFilter::Unknown);
    }
}
