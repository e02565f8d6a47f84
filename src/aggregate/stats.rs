//! Group statistics over per-person proportions.

/// Median of `values`, sorting them in place.
///
/// Odd counts return the middle element; even counts return the mean of
/// the two central elements. An empty slice returns `0.0`.
///
/// # Examples
///
/// ```
/// use u_cinerank::aggregate::median;
///
/// assert_eq!(median(&mut [0.6, 0.2, 0.4]), 0.4);
/// assert_eq!(median(&mut []), 0.0);
/// ```
pub fn median(values: &mut [f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Arithmetic mean of `values`, or `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
