//! Chart-ready series from count maps

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;

/// One labeled slice of a pie or bar chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: u64,
}

/// Chart points for a count map, named by each key's wire value.
///
/// Zero-count categories are dropped: they render as clutter, not data.
/// Output order follows the map's iteration order, so maps keyed by the
/// demographic enums come out in declaration order.
pub fn chart_data<K>(counts: &BTreeMap<K, u64>) -> Vec<ChartPoint>
where
    K: Ord + Display,
{
    chart_data_with(counts, |key| key.to_string())
}

/// Like [`chart_data`], with a caller-supplied label per key.
pub fn chart_data_with<K, F>(counts: &BTreeMap<K, u64>, mut label: F) -> Vec<ChartPoint>
where
    K: Ord,
    F: FnMut(&K) -> String,
{
    counts
        .iter()
        .filter(|(_, value)| **value > 0)
        .map(|(key, value)| ChartPoint {
            name: label(key),
            value: *value,
        })
        .collect()
}
