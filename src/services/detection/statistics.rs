// Descriptive statistics used by the heuristic signals

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
///
/// Returns `None` when fewer than two values are available, leaving the
/// fallback to the caller since each signal uses a different one.
///
/// Identical values give exactly 0. Otherwise the corrected two-pass sum is
/// used, which cancels the rounding error of the first-pass mean.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    if values.iter().all(|v| *v == values[0]) {
        return Some(0.0);
    }

    let n = values.len() as f64;
    let m = mean(values);
    let (sum_sq, sum) = values.iter().fold((0.0, 0.0), |(sq, s), v| {
        let d = v - m;
        (sq + d * d, s + d)
    });
    let variance = ((sum_sq - sum * sum / n) / (n - 1.0)).max(0.0);
    Some(variance.sqrt())
}

/// Clamp a raw score into the 0..=100 range.
#[inline]
pub fn clamp_score(x: f64) -> f64 {
    0.0_f64.max(100.0_f64.min(x))
}

/// Truncate a clamped score toward zero for reporting.
#[inline]
pub fn truncate_score(x: f64) -> u8 {
    clamp_score(x).trunc() as u8
}
