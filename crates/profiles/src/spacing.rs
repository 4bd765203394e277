//! Radial cell-boundary lists for hand-built grids.

/// `count` evenly spaced values from `start` to `stop`, both inclusive.
pub fn lin_list(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// `count` exponentially spaced values from `start` to `stop`, both
/// inclusive, where consecutive interval widths grow by the factor `base`.
///
/// With `base == 1` the spacing degenerates to linear.
pub fn exp_list(start: f64, stop: f64, count: usize, base: f64) -> Vec<f64> {
    if count < 2 || (base - 1.0).abs() < 1e-12 {
        return lin_list(start, stop, count);
    }
    let intervals = (count - 1) as i32;
    // First interval width so the geometric series sums to the full span
    let first = (stop - start) * (base - 1.0) / (base.powi(intervals) - 1.0);
    (0..count)
        .map(|i| start + first * (base.powi(i as i32) - 1.0) / (base - 1.0))
        .collect()
}
