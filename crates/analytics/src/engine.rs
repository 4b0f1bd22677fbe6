use crate::report::{
    BounceReport, ConfirmationReport, DropRateReport, ErrorRateReport, NavigationReport,
    StageRates, StageTimes, SummaryReport,
};
use core_types::{EventRecord, EventTable, FunnelStage, Gender, ProcessStep, Variation};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A stateless calculator deriving funnel metrics from a (filtered) event table.
///
/// Every method is a total function: lack of data never panics and never
/// becomes an error, it becomes an absent (`None`) value in the report.
/// The five metrics are independent; one undefined group or stage never
/// prevents computing the others.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client count, demographic means, and distinct-client shares per
    /// gender code and per variation.
    pub fn summary(&self, table: &EventTable) -> SummaryReport {
        let clients = distinct_clients(table.records(), |_| true);
        if clients == 0 {
            tracing::debug!("summary over empty table, all fields undefined");
            return SummaryReport::empty();
        }

        let rows = Decimal::from(table.len() as u64);
        let age_sum: u64 = table.iter().map(|r| u64::from(r.clnt_age)).sum();
        let tenure_sum: u64 = table.iter().map(|r| u64::from(r.clnt_tenure_yr)).sum();

        // Multiply before dividing so exact shares (e.g. 25%) stay exact.
        let share = |count: usize| {
            Some(Decimal::from(count as u64) * Decimal::ONE_HUNDRED / Decimal::from(clients as u64))
        };

        SummaryReport {
            clients,
            average_age: Some(Decimal::from(age_sum) / rows),
            average_tenure: Some(Decimal::from(tenure_sum) / rows),
            pct_male: share(distinct_clients(table.records(), |r| r.gendr == Gender::Male)),
            pct_female: share(distinct_clients(table.records(), |r| r.gendr == Gender::Female)),
            pct_unknown: share(distinct_clients(table.records(), |r| r.gendr == Gender::Unknown)),
            pct_control: share(distinct_clients(table.records(), |r| {
                r.variation == Variation::Control
            })),
            pct_test: share(distinct_clients(table.records(), |r| {
                r.variation == Variation::Test
            })),
        }
    }

    /// Confirmed sessions over started sessions, per group, each in [0, 1]
    /// when defined.
    pub fn confirmation_rate(&self, table: &EventTable) -> ConfirmationReport {
        ConfirmationReport {
            control: group_confirmation_rate(table.records(), Variation::Control),
            test: group_confirmation_rate(table.records(), Variation::Test),
        }
    }

    /// Percentage of sessions that dropped off rather than advanced, per
    /// group and per funnel transition, from the precomputed transition
    /// counters. A transition with no recorded traffic is absent rather
    /// than `NaN` or zero.
    pub fn drop_rate(&self, table: &EventTable) -> DropRateReport {
        let stages = FunnelStage::ALL
            .iter()
            .map(|&stage| StageRates {
                stage,
                control: group_drop_rate(table.records(), Variation::Control, stage),
                test: group_drop_rate(table.records(), Variation::Test, stage),
            })
            .collect();
        DropRateReport { stages }
    }

    /// Percentage of starting sessions that never progressed past a single
    /// distinct step, per group.
    pub fn bounce_rate(&self, table: &EventTable) -> BounceReport {
        BounceReport {
            control: group_bounce_rate(table.records(), Variation::Control),
            test: group_bounce_rate(table.records(), Variation::Test),
        }
    }

    /// Average minutes per completed transition, per group and per stage,
    /// plus a cross-group overall average per stage.
    pub fn navigation_time(&self, table: &EventTable) -> NavigationReport {
        let stages = FunnelStage::ALL
            .iter()
            .map(|&stage| {
                let control = group_stage_time(table.records(), Variation::Control, stage);
                let test = group_stage_time(table.records(), Variation::Test, stage);
                let overall = match (control, test) {
                    (Some(c), Some(t)) => Some((c + t) / Decimal::TWO),
                    (Some(c), None) => Some(c),
                    (None, Some(t)) => Some(t),
                    (None, None) => None,
                };
                StageTimes { stage, control, test, overall }
            })
            .collect();
        NavigationReport { stages }
    }

    /// The fraction of all events that regress to an earlier funnel step
    /// within their session, ordered by timestamp. Computed globally, not
    /// per group.
    pub fn error_rate(&self, table: &EventTable) -> ErrorRateReport {
        let total_events = table.len();
        if total_events == 0 {
            return ErrorRateReport { flagged_events: 0, total_events: 0, rate: None };
        }

        let mut sessions: HashMap<&str, Vec<(&str, u8)>> = HashMap::new();
        for record in table.iter() {
            sessions
                .entry(record.visit_id.as_str())
                .or_default()
                .push((record.date_time.as_str(), record.process_step.ordinal()));
        }

        let mut flagged_events = 0;
        for events in sessions.values_mut() {
            // The fixed timestamp format sorts chronologically as a string.
            events.sort_by(|a, b| a.0.cmp(b.0));
            flagged_events += events
                .windows(2)
                .filter(|pair| pair[1].1 < pair[0].1)
                .count();
        }

        ErrorRateReport {
            flagged_events,
            total_events,
            rate: Some(
                Decimal::from(flagged_events as u64) / Decimal::from(total_events as u64),
            ),
        }
    }
}

/// Distinct `client_id` count among records matching the predicate.
fn distinct_clients(records: &[EventRecord], predicate: impl Fn(&EventRecord) -> bool) -> usize {
    records
        .iter()
        .filter(|r| predicate(r))
        .map(|r| r.client_id)
        .collect::<HashSet<_>>()
        .len()
}

fn group_confirmation_rate(records: &[EventRecord], group: Variation) -> Option<Decimal> {
    let rows: Vec<&EventRecord> = records.iter().filter(|r| r.variation == group).collect();
    if rows.is_empty() {
        return None;
    }

    let started = indicator_bucket_count(&rows, |r| r.process_start)?;
    let confirmed = indicator_bucket_count(&rows, |r| r.process_confirm)?;
    if started == 0 {
        tracing::debug!(?group, "confirmation rate undefined, zero started sessions");
        return None;
    }

    Some(Decimal::from(confirmed as u64) / Decimal::from(started as u64))
}

/// Distinct `visit_id` count of the second indicator bucket, taking buckets
/// in ascending indicator order. Fewer than two distinct buckets means the
/// group never recorded both sides of the indicator, so the count (and any
/// rate derived from it) is undefined.
fn indicator_bucket_count(
    rows: &[&EventRecord],
    indicator: impl Fn(&EventRecord) -> u8,
) -> Option<usize> {
    let mut buckets: BTreeMap<u8, HashSet<&str>> = BTreeMap::new();
    for record in rows {
        buckets
            .entry(indicator(record))
            .or_default()
            .insert(record.visit_id.as_str());
    }
    if buckets.len() < 2 {
        return None;
    }
    buckets.values().nth(1).map(|visits| visits.len())
}

fn group_drop_rate(
    records: &[EventRecord],
    group: Variation,
    stage: FunnelStage,
) -> Option<Decimal> {
    let mut dropoffs: u64 = 0;
    let mut advances: u64 = 0;
    for record in records.iter().filter(|r| r.variation == group) {
        dropoffs += u64::from(record.dropoffs(stage));
        advances += u64::from(record.advances(stage));
    }

    let denominator = dropoffs + advances;
    if denominator == 0 {
        return None;
    }
    Some(Decimal::ONE_HUNDRED * Decimal::from(dropoffs) / Decimal::from(denominator))
}

fn group_bounce_rate(records: &[EventRecord], group: Variation) -> Option<Decimal> {
    let mut starting: HashSet<&str> = HashSet::new();
    let mut steps_by_visit: HashMap<&str, HashSet<ProcessStep>> = HashMap::new();

    for record in records.iter().filter(|r| r.variation == group) {
        steps_by_visit
            .entry(record.visit_id.as_str())
            .or_default()
            .insert(record.process_step);
        if record.process_step == ProcessStep::Start {
            starting.insert(record.visit_id.as_str());
        }
    }

    if starting.is_empty() {
        return None;
    }

    let bouncing = starting
        .iter()
        .filter(|visit| steps_by_visit[*visit].len() == 1)
        .count();

    Some(
        Decimal::ONE_HUNDRED * Decimal::from(bouncing as u64)
            / Decimal::from(starting.len() as u64),
    )
}

fn group_stage_time(
    records: &[EventRecord],
    group: Variation,
    stage: FunnelStage,
) -> Option<Decimal> {
    let mut minutes = Decimal::ZERO;
    let mut transitions: u64 = 0;
    for record in records.iter().filter(|r| r.variation == group) {
        minutes += record.stage_time(stage);
        transitions += u64::from(record.advances(stage));
    }

    if transitions == 0 {
        return None;
    }
    Some(minutes / Decimal::from(transitions))
}
