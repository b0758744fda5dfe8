//! Window Statistics
//!
//! Sums use Neumaier compensation and the mean is refined with one pass over
//! the residuals, so a window of identical readings averages to exactly that
//! reading. Threshold comparisons are inclusive and depend on it.

/// Arithmetic mean, 0.0 when there are no values
pub fn mean<'a, I>(values: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
    I::IntoIter: Clone,
{
    refined_mean(values.into_iter().copied())
}

/// Root mean square: sqrt(mean(x²)), 0.0 when there are no values
pub fn rms<'a, I>(values: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
    I::IntoIter: Clone,
{
    refined_mean(values.into_iter().map(|v| v * v)).sqrt()
}

/// Neumaier-compensated sum and count.
///
/// Once the running sum stops being finite the compensation term is
/// meaningless, so the plain sum (±Inf or NaN) is returned.
fn compensated_sum(values: impl Iterator<Item = f64>) -> (f64, usize) {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    let mut count = 0;

    for v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            compensation += (sum - t) + v;
        } else {
            compensation += (v - t) + sum;
        }
        sum = t;
        count += 1;
    }

    if sum.is_finite() {
        (sum + compensation, count)
    } else {
        (sum, count)
    }
}

fn refined_mean(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let (sum, count) = compensated_sum(values.clone());
    if count == 0 {
        return 0.0;
    }

    let n = count as f64;
    let estimate = sum / n;
    if !estimate.is_finite() {
        return estimate;
    }

    let (residual, _) = compensated_sum(values.map(|v| v - estimate));
    estimate + residual / n
}
