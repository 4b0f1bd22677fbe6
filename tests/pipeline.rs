//! Full-pipeline test: load a real file from disk, filter it, compute
//! metrics, and look up an individual client, the exact call sequence the
//! dashboard performs per interaction.

use rust_decimal_macros::dec;
use std::io::Write;
use vanguard::{
    AgeRange, FilterParams, MetricsEngine, ProcessStep, Settings, Variation, VariationFilter,
};

const HEADER: &str = "visit_id,client_id,process_step,date_time,Variation,clnt_age,clnt_tenure_yr,gendr,bal,process_start,process_confirm,process_start-step1,process_start-dropoff,process_step1-step2,process_step1-dropoff,process_step2-step3,process_step2-dropoff,process_step3-confirm,process_step3-dropoff,start_time,step1_time,step2_time,step3_time";

const ROWS: &[&str] = &[
    // Client 1001 (Control, visit c1): start -> step_1 -> confirm.
    "c1,1001,start,2024-03-01 09:00:00,Control,34,7,M,10000.00,1,0,1,0,0,0,0,0,0,0,2.0,0,0,0",
    "c1,1001,step_1,2024-03-01 09:02:00,Control,34,7,M,10000.00,0,0,0,0,1,0,0,0,0,0,0,3.0,0,0",
    "c1,1001,confirm,2024-03-01 09:05:00,Control,34,7,M,11000.00,0,1,0,0,0,0,0,0,0,0,0,0,0,0",
    // Client 2002 (Test, visit t1): bounces at start.
    "t1,2002,start,2024-03-02 14:00:00,Test,58,21,F,52000.00,1,0,0,1,0,0,0,0,0,0,4.5,0,0,0",
    "t1,2002,start,2024-03-02 14:06:00,Test,58,21,F,52000.00,1,0,0,0,0,0,0,0,0,0,0,0,0,0",
];

fn write_fixture() -> (tempfile::TempDir, Settings) {
    let dir = tempfile::tempdir().unwrap();
    let mut file = std::fs::File::create(dir.path().join("events.csv")).unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in ROWS {
        writeln!(file, "{row}").unwrap();
    }
    let settings = Settings {
        data_dir: dir.path().to_string_lossy().into_owned(),
        events_file: "events.csv".to_string(),
    };
    (dir, settings)
}

#[test]
fn init_tracing_is_idempotent() {
    vanguard::init_tracing();
    vanguard::init_tracing();
}

#[test]
fn load_filter_compute_and_lookup() {
    vanguard::init_tracing();
    let (_dir, settings) = write_fixture();
    let table = vanguard::load(&settings).unwrap();
    assert_eq!(table.len(), 5);

    let engine = MetricsEngine::new();

    // Aggregate metrics over the unfiltered snapshot.
    let summary = engine.summary(&table);
    assert_eq!(summary.clients, 2);
    assert_eq!(summary.pct_control, Some(dec!(50)));
    assert_eq!(summary.pct_test, Some(dec!(50)));
    assert_eq!(summary.pct_male, Some(dec!(50)));

    let confirmation = engine.confirmation_rate(&table);
    assert_eq!(confirmation.control, Some(dec!(1)));
    // Test group never recorded both indicator buckets for confirm.
    assert_eq!(confirmation.test, None);

    let bounce = engine.bounce_rate(&table);
    assert_eq!(bounce.control, Some(dec!(0)));
    assert_eq!(bounce.test, Some(dec!(100)));

    let drops = engine.drop_rate(&table);
    assert_eq!(drops.stages[0].control, Some(dec!(0)));
    assert_eq!(drops.stages[0].test, Some(dec!(100)));

    let navigation = engine.navigation_time(&table);
    assert_eq!(navigation.stages[0].control, Some(dec!(2)));
    assert_eq!(navigation.stages[0].test, None);
    assert_eq!(navigation.stages[0].overall, Some(dec!(2)));

    assert_eq!(engine.error_rate(&table).flagged_events, 0);

    // A narrowed view, as driven by the dashboard's cohort dropdown.
    let view = vanguard::apply(
        &table,
        &FilterParams {
            age_range: AgeRange::new(18, 65),
            variation: VariationFilter::Test,
            gender: Default::default(),
            client_id: None,
        },
    );
    assert_eq!(view.len(), 2);
    assert_eq!(engine.summary(&view).clients, 1);

    // The search path runs against the unfiltered table.
    let client = vanguard::lookup(&table, 1001).unwrap().unwrap();
    assert_eq!(client.variation, Variation::Control);
    assert_eq!(client.step_counts[&ProcessStep::Start], 1);
    assert_eq!(client.step_counts.values().sum::<usize>(), 3);
    assert_eq!(client.average_balance.round_dp(2), dec!(10333.33));
    assert_eq!(client.last_access.to_string(), "2024-03-01 09:05:00");

    assert!(vanguard::lookup(&table, 555).unwrap().is_none());
}
