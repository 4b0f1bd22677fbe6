use core_types::{FunnelStage, Variation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate demographics of the (filtered) table.
///
/// Every mean and percentage is `Option<>` because the table may be empty;
/// an absent value means "not enough data", never zero. Percentages are
/// shares of *distinct clients*, not of event rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Distinct `client_id` count.
    pub clients: usize,
    pub average_age: Option<Decimal>,
    pub average_tenure: Option<Decimal>,
    pub pct_male: Option<Decimal>,
    pub pct_female: Option<Decimal>,
    pub pct_unknown: Option<Decimal>,
    pub pct_control: Option<Decimal>,
    pub pct_test: Option<Decimal>,
}

impl SummaryReport {
    /// The report for an empty table: zero clients, everything undefined.
    pub fn empty() -> Self {
        Self {
            clients: 0,
            average_age: None,
            average_tenure: None,
            pct_male: None,
            pct_female: None,
            pct_unknown: None,
            pct_control: None,
            pct_test: None,
        }
    }
}

/// Per-group confirmation rates, each in [0, 1] when defined.
///
/// A group is `None` when it lacks the two distinct indicator buckets the
/// rate is derived from (or has zero started sessions); such groups are
/// omitted from rendering rather than shown as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationReport {
    pub control: Option<Decimal>,
    pub test: Option<Decimal>,
}

impl ConfirmationReport {
    /// The groups with a defined rate, in presentation order. Empty means
    /// the caller should render a "no data" state instead of a chart.
    pub fn defined(&self) -> Vec<(Variation, Decimal)> {
        [(Variation::Control, self.control), (Variation::Test, self.test)]
            .into_iter()
            .filter_map(|(group, rate)| rate.map(|r| (group, r)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.control.is_none() && self.test.is_none()
    }
}

/// Drop rates for one funnel transition, as percentages in [0, 100].
/// `None` means the group recorded no traffic at this transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRates {
    pub stage: FunnelStage,
    pub control: Option<Decimal>,
    pub test: Option<Decimal>,
}

/// Per-group drop rates across all four funnel transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropRateReport {
    /// One entry per transition, in funnel order.
    pub stages: Vec<StageRates>,
}

/// Average navigation minutes per completed transition for one stage.
///
/// `overall` is the cross-group average of the defined group values; it is
/// `None` only when both groups are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    pub stage: FunnelStage,
    pub control: Option<Decimal>,
    pub test: Option<Decimal>,
    pub overall: Option<Decimal>,
}

/// Per-group average navigation time across all four funnel transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationReport {
    /// One entry per transition, in funnel order.
    pub stages: Vec<StageTimes>,
}

/// Per-group bounce rates, as percentages in [0, 100].
///
/// A group with zero starting sessions is `None`: "no sessions" is
/// distinguishable from "0% bounce" at the data level, and the rendering
/// choice is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BounceReport {
    pub control: Option<Decimal>,
    pub test: Option<Decimal>,
}

/// The session-ordering-violation rate over the whole (filtered) table.
///
/// An "error" here is an event whose funnel-step ordinal is lower than its
/// predecessor's within the same session, i.e. the session appears to
/// regress to an earlier step. It is not a literal application error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRateReport {
    pub flagged_events: usize,
    pub total_events: usize,
    /// `flagged_events / total_events`; `None` for an empty table.
    pub rate: Option<Decimal>,
}
