//! Risk-adjusted return ratios.

/// Trading days per year used for annualization.
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Simplified annualized Sharpe ratio over a portfolio value series.
///
/// Computes simple day-over-day percentage returns, then
/// `mean / std * sqrt(252)`. No risk-free-rate subtraction. Returns 0
/// when there are fewer than two returns or the standard deviation is
/// zero, never NaN.
pub fn sharpe_ratio(values: &[f64]) -> f64 {
    let returns = daily_returns(values);
    if returns.len() < 2 {
        return 0.0;
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev > 0.0 {
        mean / std_dev * TRADING_DAYS_PER_YEAR.sqrt()
    } else {
        0.0
    }
}

/// Simple day-over-day returns of a value series.
///
/// A zero or negative previous value contributes a zero return rather
/// than a division blowup.
pub fn daily_returns(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return vec![];
    }
    values
        .windows(2)
        .map(|w| if w[0] > 0.0 { (w[1] - w[0]) / w[0] } else { 0.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_series_is_zero() {
        assert!((sharpe_ratio(&[]) - 0.0).abs() < 1e-10);
        assert!((sharpe_ratio(&[100.0]) - 0.0).abs() < 1e-10);
        assert!((sharpe_ratio(&[100.0, 101.0]) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_constant_series_is_zero_not_nan() {
        let values = vec![1000.0; 50];
        let sharpe = sharpe_ratio(&values);
        assert!(!sharpe.is_nan());
        assert!((sharpe - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_positive_for_steady_gains() {
        // Alternating +2% and +1% days: positive mean, non-zero std.
        let mut values = vec![100.0];
        for i in 0..20 {
            let rate = if i % 2 == 0 { 1.02 } else { 1.01 };
            let last = *values.last().unwrap();
            values.push(last * rate);
        }
        assert!(sharpe_ratio(&values) > 0.0);
    }

    #[test]
    fn test_negative_for_steady_losses() {
        let mut values = vec![100.0];
        for i in 0..20 {
            let rate = if i % 2 == 0 { 0.98 } else { 0.99 };
            let last = *values.last().unwrap();
            values.push(last * rate);
        }
        assert!(sharpe_ratio(&values) < 0.0);
    }

    #[test]
    fn test_daily_returns() {
        let returns = daily_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.1).abs() < 1e-10);
        assert!((returns[1] + 0.1).abs() < 1e-10);
    }
}
