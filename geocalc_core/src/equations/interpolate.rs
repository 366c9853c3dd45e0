//! # Table Interpolation
//!
//! Piecewise-linear lookup in digitized design charts.
//!
//! Chart abscissae must be strictly increasing. Queries below the first point
//! return the first ordinate and queries above the last point return the last
//! ordinate, so a chart never extrapolates.

/// Linear interpolation of `x` in the table `(xs, ys)`.
///
/// # Panics
/// Never. Empty or mismatched tables return NaN.
///
/// # Example
/// ```rust
/// use geocalc_core::equations::interpolate::interp;
///
/// let xs = [0.0, 10.0];
/// let ys = [1.0, 2.0];
/// assert!((interp(5.0, &xs, &ys) - 1.5).abs() < 1e-12);
/// assert_eq!(interp(-3.0, &xs, &ys), 1.0);
/// assert_eq!(interp(30.0, &xs, &ys), 2.0);
/// ```
pub fn interp(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    if xs.is_empty() || xs.len() != ys.len() || x.is_nan() {
        return f64::NAN;
    }

    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }

    // First index whose abscissa is greater than x; always in 1..=last here
    let upper = xs.partition_point(|&xi| xi <= x);
    let (x0, x1) = (xs[upper - 1], xs[upper]);
    let (y0, y1) = (ys[upper - 1], ys[upper]);
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Interpolation in log10 space on both axes (power-law charts).
pub fn interp_log_log(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    if x <= 0.0 {
        return f64::NAN;
    }
    let log_xs: Vec<f64> = xs.iter().map(|v| v.log10()).collect();
    let log_ys: Vec<f64> = ys.iter().map(|v| v.log10()).collect();
    10f64.powf(interp(x.log10(), &log_xs, &log_ys))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_interior_points() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [0.0, 10.0, 30.0];
        assert!((interp(0.5, &xs, &ys) - 5.0).abs() < EPSILON);
        assert!((interp(2.0, &xs, &ys) - 20.0).abs() < EPSILON);
    }

    #[test]
    fn test_exact_nodes() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [4.0, 5.0, 6.0];
        assert_eq!(interp(1.0, &xs, &ys), 5.0);
        assert_eq!(interp(3.0, &xs, &ys), 6.0);
    }

    #[test]
    fn test_clamps_outside_table() {
        let xs = [1.0, 2.0];
        let ys = [10.0, 20.0];
        assert_eq!(interp(0.0, &xs, &ys), 10.0);
        assert_eq!(interp(5.0, &xs, &ys), 20.0);
    }

    #[test]
    fn test_degenerate_tables() {
        assert!(interp(1.0, &[], &[]).is_nan());
        assert!(interp(1.0, &[1.0, 2.0], &[1.0]).is_nan());
        assert!(interp(f64::NAN, &[1.0, 2.0], &[1.0, 2.0]).is_nan());
        assert_eq!(interp(7.0, &[1.0], &[3.0]), 3.0);
    }

    #[test]
    fn test_log_log() {
        // y = x^2 is a straight line in log-log space
        let y = interp_log_log(10.0, &[1.0, 100.0], &[1.0, 10_000.0]);
        assert!((y - 100.0).abs() < 1e-9, "y = {}", y);
        assert!(interp_log_log(0.0, &[1.0, 100.0], &[1.0, 10_000.0]).is_nan());
    }
}
