use crate::error::FilterError;
use core_types::{EventRecord, Gender, Variation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inclusive bounds on `clnt_age`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: u32) -> bool {
        self.min <= age && age <= self.max
    }
}

/// The cohort selection offered by the dashboard's group dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariationFilter {
    #[default]
    All,
    Control,
    Test,
}

impl VariationFilter {
    pub fn matches(&self, variation: Variation) -> bool {
        match self {
            VariationFilter::All => true,
            VariationFilter::Control => variation == Variation::Control,
            VariationFilter::Test => variation == Variation::Test,
        }
    }
}

impl FromStr for VariationFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(VariationFilter::All),
            "Control" => Ok(VariationFilter::Control),
            "Test" => Ok(VariationFilter::Test),
            other => Err(FilterError::UnknownCategory {
                kind: "variation",
                value: other.to_string(),
            }),
        }
    }
}

/// The gender selection offered by the dashboard, mapped to the categorical
/// codes used in the event log (M, F, U).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
    Unknown,
}

impl GenderFilter {
    pub fn matches(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
            GenderFilter::Unknown => gender == Gender::Unknown,
        }
    }
}

impl FromStr for GenderFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(GenderFilter::All),
            "Male" => Ok(GenderFilter::Male),
            "Female" => Ok(GenderFilter::Female),
            "Unknown" => Ok(GenderFilter::Unknown),
            other => Err(FilterError::UnknownCategory {
                kind: "gender",
                value: other.to_string(),
            }),
        }
    }
}

/// One request's worth of filter state, passed explicitly into the engine.
///
/// There is deliberately no process-wide "current filter": every call
/// carries its own parameters, so concurrent callers can share one loaded
/// table without coordination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub age_range: AgeRange,
    pub variation: VariationFilter,
    pub gender: GenderFilter,
    /// Exact-match client filter used by the individual lookup path; not
    /// combined with aggregate statistics.
    pub client_id: Option<u64>,
}

impl FilterParams {
    /// A filter that retains every row within the given age bounds.
    pub fn for_age_range(age_range: AgeRange) -> Self {
        Self {
            age_range,
            variation: VariationFilter::All,
            gender: GenderFilter::All,
            client_id: None,
        }
    }

    /// Whether a record survives every configured predicate.
    pub fn retains(&self, record: &EventRecord) -> bool {
        if !self.age_range.contains(record.clnt_age) {
            return false;
        }
        if !self.variation.matches(record.variation) {
            return false;
        }
        if !self.gender.matches(record.gendr) {
            return false;
        }
        if let Some(client_id) = self.client_id {
            if record.client_id != client_id {
                return false;
            }
        }
        true
    }
}
