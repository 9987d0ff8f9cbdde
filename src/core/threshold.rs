/// Fraction of the gap between a current score and its historical average
/// that shifts the baseline threshold.
const ADJUSTMENT_RATE: f64 = 0.1;

/// Adjust a baseline clinical-score threshold against the user's history.
///
/// A current score below the historical average means the user is trending
/// better than their own baseline, so the threshold rises and a
/// specialization need becomes harder to flag. A score above the average
/// lowers the threshold by the symmetric amount. Equal scores leave the
/// baseline untouched.
///
/// Users with no history get an average of 0, so any positive current
/// score runs the same formula and shifts the threshold. That behavior is
/// kept as-is rather than special-cased for first-time users.
#[inline]
pub fn adjust_threshold(current: f64, historical_average: f64, baseline: f64) -> f64 {
    if current < historical_average {
        baseline + (historical_average - current) * ADJUSTMENT_RATE
    } else if current > historical_average {
        baseline - (current - historical_average) * ADJUSTMENT_RATE
    } else {
        baseline
    }
}
