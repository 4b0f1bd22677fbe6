use crate::enums::{FunnelStage, Gender, ProcessStep, Variation};
use crate::error::CoreError;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The timestamp layout produced by the upstream ETL.
///
/// The format is fixed-width, so lexical order of the raw strings is also
/// chronological order.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single client-visit-step event from the interaction log.
///
/// The field renames follow the raw column names of the log; the
/// transition counter and stage duration columns are precomputed upstream
/// and arrive ready to aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique per session; not globally unique across clients.
    pub visit_id: String,
    pub client_id: u64,
    pub process_step: ProcessStep,
    /// Raw timestamp string; parse on demand via [`EventRecord::timestamp`].
    pub date_time: String,
    #[serde(rename = "Variation")]
    pub variation: Variation,
    pub clnt_age: u32,
    pub clnt_tenure_yr: u32,
    pub gendr: Gender,
    /// Account balance at the time of the event.
    pub bal: Decimal,
    /// Start indicator bucket (0 or 1) used by the confirmation-rate metric.
    pub process_start: u8,
    /// Confirm indicator bucket (0 or 1) used by the confirmation-rate metric.
    pub process_confirm: u8,
    #[serde(rename = "process_start-step1")]
    pub start_to_step1: u32,
    #[serde(rename = "process_start-dropoff")]
    pub start_to_dropoff: u32,
    #[serde(rename = "process_step1-step2")]
    pub step1_to_step2: u32,
    #[serde(rename = "process_step1-dropoff")]
    pub step1_to_dropoff: u32,
    #[serde(rename = "process_step2-step3")]
    pub step2_to_step3: u32,
    #[serde(rename = "process_step2-dropoff")]
    pub step2_to_dropoff: u32,
    #[serde(rename = "process_step3-confirm")]
    pub step3_to_confirm: u32,
    #[serde(rename = "process_step3-dropoff")]
    pub step3_to_dropoff: u32,
    /// Minutes spent in the start stage.
    pub start_time: Decimal,
    pub step1_time: Decimal,
    pub step2_time: Decimal,
    pub step3_time: Decimal,
}

impl EventRecord {
    /// How many times this row's session advanced through the given transition.
    pub fn advances(&self, stage: FunnelStage) -> u32 {
        match stage {
            FunnelStage::StartToStep1 => self.start_to_step1,
            FunnelStage::Step1ToStep2 => self.step1_to_step2,
            FunnelStage::Step2ToStep3 => self.step2_to_step3,
            FunnelStage::Step3ToConfirm => self.step3_to_confirm,
        }
    }

    /// How many times this row's session dropped off at the given transition.
    pub fn dropoffs(&self, stage: FunnelStage) -> u32 {
        match stage {
            FunnelStage::StartToStep1 => self.start_to_dropoff,
            FunnelStage::Step1ToStep2 => self.step1_to_dropoff,
            FunnelStage::Step2ToStep3 => self.step2_to_dropoff,
            FunnelStage::Step3ToConfirm => self.step3_to_dropoff,
        }
    }

    /// Minutes spent in the stage that originates the given transition.
    pub fn stage_time(&self, stage: FunnelStage) -> Decimal {
        match stage {
            FunnelStage::StartToStep1 => self.start_time,
            FunnelStage::Step1ToStep2 => self.step1_time,
            FunnelStage::Step2ToStep3 => self.step2_time,
            FunnelStage::Step3ToConfirm => self.step3_time,
        }
    }

    /// Parses the raw `date_time` with the fixed [`DATE_TIME_FORMAT`].
    pub fn timestamp(&self) -> Result<NaiveDateTime, CoreError> {
        NaiveDateTime::parse_from_str(&self.date_time, DATE_TIME_FORMAT)
            .map_err(|source| CoreError::MalformedTimestamp {
                value: self.date_time.clone(),
                source,
            })
    }
}

/// An immutable, in-memory view of the event log.
///
/// Loaded once per session; filtering derives new tables and never mutates
/// the source, so any table can safely back multiple metric computations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTable {
    records: Vec<EventRecord>,
}

impl EventTable {
    pub fn new(records: Vec<EventRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(date_time: &str) -> EventRecord {
        EventRecord {
            visit_id: "visit_1".into(),
            client_id: 9001,
            process_step: ProcessStep::Start,
            date_time: date_time.into(),
            variation: Variation::Control,
            clnt_age: 41,
            clnt_tenure_yr: 6,
            gendr: Gender::Female,
            bal: dec!(12000.50),
            process_start: 1,
            process_confirm: 0,
            start_to_step1: 1,
            start_to_dropoff: 0,
            step1_to_step2: 0,
            step1_to_dropoff: 0,
            step2_to_step3: 0,
            step2_to_dropoff: 0,
            step3_to_confirm: 0,
            step3_to_dropoff: 0,
            start_time: dec!(1.5),
            step1_time: dec!(0),
            step2_time: dec!(0),
            step3_time: dec!(0),
        }
    }

    #[test]
    fn timestamp_parses_fixed_format() {
        let ts = record("2024-03-05 09:15:00").timestamp().unwrap();
        assert_eq!(ts.to_string(), "2024-03-05 09:15:00");
    }

    #[test]
    fn timestamp_rejects_malformed_value() {
        let err = record("05/03/2024 09:15").timestamp().unwrap_err();
        assert!(err.to_string().contains("05/03/2024"));
    }

    #[test]
    fn stage_accessors_select_the_right_columns() {
        let mut r = record("2024-03-05 09:15:00");
        r.step2_to_step3 = 3;
        r.step2_to_dropoff = 2;
        r.step2_time = dec!(7.25);
        assert_eq!(r.advances(FunnelStage::Step2ToStep3), 3);
        assert_eq!(r.dropoffs(FunnelStage::Step2ToStep3), 2);
        assert_eq!(r.stage_time(FunnelStage::Step2ToStep3), dec!(7.25));
    }
}
