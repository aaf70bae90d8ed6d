/// Percentile helpers.
///
/// - Empty input => `None` (or `NaN` for the unsorted convenience wrapper).
/// - `percentile <= 0` => first element.
/// - `percentile >= 100` => last element.
/// - Otherwise we compute a position within `[0, len-1]` and interpolate
///   linearly between the two neighbouring values.

/// Returns the percentile value from a slice that is already sorted in
/// ascending order.
pub fn value_sorted(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    let last = sorted_values.len().checked_sub(1)?;

    if percentile <= 0.0 {
        return sorted_values.first().copied();
    }
    if percentile >= 100.0 {
        return sorted_values.get(last).copied();
    }

    let position = (percentile / 100.0) * last as f64;
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(last);
    let fraction = position - lower as f64;
    let low = sorted_values[lower];
    let high = sorted_values[upper];
    if fraction == 0.0 {
        return Some(low);
    }
    Some(low + (high - low) * fraction)
}

/// Sorts a copy of `values` and returns the interpolated percentile.
pub fn percentile(values: &[f64], percentile: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    value_sorted(&sorted, percentile).unwrap_or(f64::NAN)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
