// Confidence summaries

use vigil_api::DemographicsResult;

/// Mean detection confidence across a result set, as a percentage
/// rounded to one decimal place. Empty input yields 0.
///
/// Records whose confidence was absent decoded as 0 and stay in the
/// divisor; a sparse field drags the average down rather than hiding.
pub fn average_confidence(records: &[DemographicsResult]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let sum: f64 = records.iter().map(|r| r.confidence).sum();
    let mean = sum / records.len() as f64;
    (mean * 1000.0).round() / 10.0
}
