use serde::{Deserialize, Serialize};

/// One step of the digital process funnel.
///
/// The declaration order is the funnel order. The numeric position of each
/// step is exposed through [`ProcessStep::ordinal`] so that out-of-order
/// detection never relies on an inline lookup table; adding a funnel step
/// means extending this enumeration and its ordinal mapping in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProcessStep {
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "step_1")]
    Step1,
    #[serde(rename = "step_2")]
    Step2,
    #[serde(rename = "step_3")]
    Step3,
    #[serde(rename = "confirm")]
    Confirm,
}

impl ProcessStep {
    /// All steps in funnel order.
    pub const ALL: [ProcessStep; 5] = [
        ProcessStep::Start,
        ProcessStep::Step1,
        ProcessStep::Step2,
        ProcessStep::Step3,
        ProcessStep::Confirm,
    ];

    /// The explicit step ordinal: start=0, step_1=1, step_2=2, step_3=3, confirm=4.
    ///
    /// A session whose events regress to a lower ordinal is flagged by the
    /// error-rate metric.
    pub const fn ordinal(self) -> u8 {
        match self {
            ProcessStep::Start => 0,
            ProcessStep::Step1 => 1,
            ProcessStep::Step2 => 2,
            ProcessStep::Step3 => 3,
            ProcessStep::Confirm => 4,
        }
    }

    /// The raw code used in the event log.
    pub const fn code(self) -> &'static str {
        match self {
            ProcessStep::Start => "start",
            ProcessStep::Step1 => "step_1",
            ProcessStep::Step2 => "step_2",
            ProcessStep::Step3 => "step_3",
            ProcessStep::Confirm => "confirm",
        }
    }
}

/// The A/B cohort a session was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variation {
    Control,
    Test,
}

impl Variation {
    /// Both cohorts, in the order reports present them.
    pub const ALL: [Variation; 2] = [Variation::Control, Variation::Test];
}

/// The gender code recorded for a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "U")]
    Unknown,
}

impl Gender {
    /// The single-letter code used in the event log.
    pub const fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "U",
        }
    }
}

/// One transition between consecutive funnel steps.
///
/// The upstream ETL precomputes, per event row, how many times the session
/// advanced through or dropped off at each of these transitions, and how
/// much time was spent in the originating stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunnelStage {
    StartToStep1,
    Step1ToStep2,
    Step2ToStep3,
    Step3ToConfirm,
}

impl FunnelStage {
    /// All four transitions in funnel order.
    pub const ALL: [FunnelStage; 4] = [
        FunnelStage::StartToStep1,
        FunnelStage::Step1ToStep2,
        FunnelStage::Step2ToStep3,
        FunnelStage::Step3ToConfirm,
    ];

    /// A human-readable label for chart axes.
    pub const fn label(self) -> &'static str {
        match self {
            FunnelStage::StartToStep1 => "Start-Step1",
            FunnelStage::Step1ToStep2 => "Step1-Step2",
            FunnelStage::Step2ToStep3 => "Step2-Step3",
            FunnelStage::Step3ToConfirm => "Step3-Confirm",
        }
    }
}
