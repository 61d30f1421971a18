//! Descriptive statistics kernels.
//!
//! Numerically stable building blocks for the continuous summarizer:
//! Kahan compensated summation for the mean, Welford's online algorithm
//! for the sample variance, and R-7 linear interpolation for quantiles
//! (the default method in R, NumPy, and Excel).
//!
//! Every function returns `None` rather than panicking when the
//! statistic is undefined: empty input, NaN input, or (for the sample
//! variance) fewer than two observations.

/// Computes the arithmetic mean using Kahan compensated summation.
///
/// Returns `None` if `data` is empty or contains NaN.
///
/// ```
/// use tabsum::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for &x in data {
        let y = x - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    Some(sum / data.len() as f64)
}

/// Computes the sample variance (Bessel's correction, denominator n − 1)
/// using Welford's online algorithm.
///
/// Returns `None` if `data.len() < 2` or `data` contains NaN. A single
/// observation therefore has an undefined variance, matching the
/// descriptive-statistics convention of pandas' `describe`.
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut count = 0usize;
    let mut running_mean = 0.0;
    let mut m2 = 0.0;
    for &x in data {
        count += 1;
        let delta = x - running_mean;
        running_mean += delta / count as f64;
        m2 += delta * (x - running_mean);
    }
    Some(m2 / (count - 1) as f64)
}

/// Computes the sample standard deviation.
///
/// ```
/// use tabsum::stats::std_dev;
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((sd - 1.5811388300841898).abs() < 1e-12);
/// assert_eq!(std_dev(&[42.0]), None);
/// ```
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Returns the minimum value, or `None` if `data` is empty or has NaN.
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Returns the maximum value, or `None` if `data` is empty or has NaN.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

/// Computes the `p`-th quantile (`p` in `[0, 1]`) with R-7 linear
/// interpolation, without mutating the input.
///
/// For sorted data `x[0..n]`: `h = (n − 1)p`, `j = ⌊h⌋`, `g = h − j`,
/// result `(1 − g)·x[j] + g·x[j+1]`.
///
/// Returns `None` if `data` is empty, contains NaN, or `p` is out of
/// range.
///
/// ```
/// use tabsum::stats::quantile;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(quantile(&data, 0.25), Some(2.0));
/// assert_eq!(quantile(&data, 0.5), Some(3.0));
/// assert_eq!(quantile(&data, 0.75), Some(4.0));
/// ```
pub fn quantile(data: &[f64], p: f64) -> Option<f64> {
    if data.is_empty() || !(0.0..=1.0).contains(&p) || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("NaN filtered above"));
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - j as f64;
    if j + 1 < n {
        Some((1.0 - g) * sorted[j] + g * sorted[j + 1])
    } else {
        Some(sorted[n - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[5.0]), Some(5.0));
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, f64::NAN]), None);
    }

    #[test]
    fn variance_matches_reference() {
        // pandas: [2,4,4,4,5,5,7,9].var() == 4.571428571428571
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(close(variance(&v).unwrap(), 4.571428571428571));
    }

    #[test]
    fn variance_undefined_below_two_observations() {
        assert_eq!(variance(&[]), None);
        assert_eq!(variance(&[3.0]), None);
    }

    #[test]
    fn std_dev_of_one_to_five() {
        assert!(close(
            std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(),
            1.5811388300841898
        ));
    }

    #[test]
    fn min_max_basic() {
        let v = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(min(&v), Some(1.0));
        assert_eq!(max(&v), Some(5.0));
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[f64::NAN]), None);
    }

    #[test]
    fn quantile_endpoints_and_interpolation() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&v, 0.0), Some(1.0));
        assert_eq!(quantile(&v, 1.0), Some(5.0));
        assert_eq!(quantile(&v, 0.5), Some(3.0));
        // four points: p25 interpolates between the first two
        let w = [1.0, 2.0, 3.0, 4.0];
        assert!(close(quantile(&w, 0.25).unwrap(), 1.75));
        assert!(close(quantile(&w, 0.5).unwrap(), 2.5));
    }

    #[test]
    fn quantile_single_value() {
        assert_eq!(quantile(&[7.0], 0.25), Some(7.0));
        assert_eq!(quantile(&[7.0], 0.75), Some(7.0));
    }

    #[test]
    fn quantile_rejects_bad_input() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[1.0], 1.5), None);
        assert_eq!(quantile(&[1.0, f64::NAN], 0.5), None);
    }
}
