//! Trapezoidal area under a curve

use crate::error::{Error, Result};

/// Area under the curve `y(x)` by the trapezoidal rule
///
/// `x` must be monotonic; a decreasing `x` yields the same positive area
/// as its reversal.
///
/// ```
/// use evaluar::eval::auc;
///
/// let area = auc(&[0.0, 0.5, 1.0], &[0.0, 1.0, 1.0]).unwrap();
/// assert!((area - 0.75).abs() < 1e-12);
/// ```
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::length_mismatch("curve coordinates", x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(Error::InvalidParameter(format!(
            "at least 2 points are needed to compute an area, got {}",
            x.len()
        )));
    }

    let increasing = x.windows(2).all(|w| w[1] >= w[0]);
    let decreasing = x.windows(2).all(|w| w[1] <= w[0]);
    let direction = match (increasing, decreasing) {
        (true, _) => 1.0,
        (false, true) => -1.0,
        (false, false) => {
            return Err(Error::InvalidParameter(
                "x is neither increasing nor decreasing".into(),
            ))
        }
    };

    let area: f64 = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum();
    Ok(direction * area)
}
