//! Drawdown calculation over portfolio value series.

/// Calculate the drawdown curve from a portfolio value series.
///
/// Tracks a running peak; drawdown at each point is
/// `(peak - value) / peak` when the peak is positive, expressed on the
/// 0-100 percent scale.
pub fn drawdown_curve(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return vec![];
    }

    let mut curve = vec![0.0; n];
    let mut peak = values[0];

    for i in 0..n {
        if values[i] > peak {
            peak = values[i];
        }
        if peak > 0.0 {
            curve[i] = (peak - values[i]) / peak * 100.0;
        }
    }

    curve
}

/// Maximum drawdown of a portfolio value series as a 0-100 percent.
///
/// Returns 0 for series shorter than two points.
pub fn max_drawdown(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    drawdown_curve(values).iter().fold(0.0f64, |a, &b| a.max(b))
}
