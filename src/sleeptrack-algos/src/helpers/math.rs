pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Rounds to two decimal places, ties to even.
pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}
