//! Day-bucketed time series

use std::collections::BTreeMap;

use serde::Serialize;
use vigil_api::{DemographicsResult, Gender};

/// Detections for one UTC calendar day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub total: u64,
    pub male: u64,
    pub female: u64,
}

#[derive(Default)]
struct DayCounts {
    total: u64,
    male: u64,
    female: u64,
}

/// Bucket records by the UTC calendar date the detection occurred.
///
/// `total` counts every record in the bucket; only the male/female split
/// is broken out for the default series chart. Output is sorted
/// ascending by date (ISO dates order lexicographically).
pub fn time_series(records: &[DemographicsResult]) -> Vec<TimeSeriesPoint> {
    let mut buckets: BTreeMap<String, DayCounts> = BTreeMap::new();

    for record in records {
        let date = record.timestamp.date_naive().to_string();
        let bucket = buckets.entry(date).or_default();
        bucket.total += 1;
        match record.gender {
            Gender::Male => bucket.male += 1,
            Gender::Female => bucket.female += 1,
        }
    }

    buckets
        .into_iter()
        .map(|(date, counts)| TimeSeriesPoint {
            date,
            total: counts.total,
            male: counts.male,
            female: counts.female,
        })
        .collect()
}
