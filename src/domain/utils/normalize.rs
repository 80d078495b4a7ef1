/// Min-max scales `values` into [0, 1].
///
/// A constant sequence maps to all zeros. Empty input gives empty output.
pub fn normalize_qos(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    values
        .iter()
        .map(|value| if range > 0.0 { (value - min) / range } else { 0.0 })
        .collect()
}
