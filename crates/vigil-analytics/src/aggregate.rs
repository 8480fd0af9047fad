//! Category counts over a result set

use std::collections::BTreeMap;

use vigil_api::{AgeGroup, DemographicsResult, Emotion, Ethnicity, Gender};

/// Aggregated per-category counts for one result set.
///
/// Every member of each enumeration is present as a key, zero counts
/// included, so consumers can render "0%" categories without
/// special-casing missing keys. Map iteration follows enum declaration
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analytics {
    pub total: u64,
    pub gender: BTreeMap<Gender, u64>,
    pub age: BTreeMap<AgeGroup, u64>,
    pub emotion: BTreeMap<Emotion, u64>,
    pub ethnicity: BTreeMap<Ethnicity, u64>,
}

impl Analytics {
    /// Zero counts for every category.
    pub fn empty() -> Self {
        Self {
            total: 0,
            gender: Gender::ALL.iter().map(|g| (*g, 0)).collect(),
            age: AgeGroup::ALL.iter().map(|a| (*a, 0)).collect(),
            emotion: Emotion::ALL.iter().map(|e| (*e, 0)).collect(),
            ethnicity: Ethnicity::ALL.iter().map(|e| (*e, 0)).collect(),
        }
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Aggregate detection records into per-category counts.
///
/// Single pass over the records; `total` equals the record count.
pub fn aggregate(records: &[DemographicsResult]) -> Analytics {
    let mut analytics = Analytics::empty();
    analytics.total = records.len() as u64;

    for record in records {
        *analytics.gender.entry(record.gender).or_insert(0) += 1;
        *analytics.age.entry(record.age).or_insert(0) += 1;
        *analytics.emotion.entry(record.emotion).or_insert(0) += 1;
        *analytics.ethnicity.entry(record.ethnicity).or_insert(0) += 1;
    }

    analytics
}
