//! Logistic regression
//!
//! Binary problems use a single sigmoid output trained on binary
//! cross-entropy; problems with more classes use a softmax over one weight
//! column per class (multinomial cross-entropy). Both are fitted with
//! full-batch gradient descent and an optional L2 penalty.

use super::{check_training_data, Classifier};
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Logistic regression classifier
///
/// # Example
/// ```
/// use evaluar::model::{Classifier, LogisticRegression};
/// use ndarray::array;
///
/// let x = array![[0.0], [0.5], [2.5], [3.0]];
/// let y = vec![0, 0, 1, 1];
///
/// let mut model = LogisticRegression::new().with_learning_rate(0.5);
/// model.fit(&x, &y).unwrap();
/// assert_eq!(model.predict(&x).unwrap(), y);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// `n_features × n_outputs` (1 output for binary, `n_classes` otherwise)
    weights: Option<Array2<f64>>,
    intercept: Option<Array1<f64>>,
    n_classes: Option<usize>,
    learning_rate: f64,
    max_iter: usize,
    tol: f64,
    l2: f64,
    fit_intercept: bool,
    n_iter: usize,
    #[serde(default)]
    converged: bool,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            weights: None,
            intercept: None,
            n_classes: None,
            learning_rate: 0.1,
            max_iter: 1000,
            tol: 1e-6,
            l2: 0.0,
            fit_intercept: true,
            n_iter: 0,
            converged: false,
        }
    }

    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Stop once every gradient component is below `tol` in magnitude
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// L2 penalty strength (0 disables regularisation)
    pub fn with_l2(mut self, l2: f64) -> Self {
        self.l2 = l2;
        self
    }

    pub fn with_fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Gradient-descent iterations used by the last `fit`
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Whether the last `fit` stopped on the gradient tolerance
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Fitted weights, `n_features × n_outputs`
    pub fn coefficients(&self) -> Option<&Array2<f64>> {
        self.weights.as_ref()
    }

    pub fn intercept(&self) -> Option<&Array1<f64>> {
        self.intercept.as_ref()
    }

    fn check_hyperparameters(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "learning_rate must be > 0, got {}",
                self.learning_rate
            )));
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter("max_iter must be > 0".into()));
        }
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "tol must be > 0, got {}",
                self.tol
            )));
        }
        if !(self.l2.is_finite() && self.l2 >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "l2 must be >= 0, got {}",
                self.l2
            )));
        }
        Ok(())
    }

    /// Raw linear outputs (logits). Binary models return a single column.
    pub fn decision_function(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let (weights, intercept) = match (&self.weights, &self.intercept) {
            (Some(w), Some(b)) => (w, b),
            _ => {
                return Err(Error::NotFitted(
                    "LogisticRegression: call fit() first".into(),
                ))
            }
        };
        if x.ncols() != weights.nrows() {
            return Err(Error::ShapeMismatch {
                expected: format!("{} features", weights.nrows()),
                actual: format!("{} features", x.ncols()),
            });
        }
        Ok(x.dot(weights) + intercept)
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// Numerically stable sigmoid: σ(z) = 1 / (1 + e^(-z))
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Row-wise softmax with max subtraction
fn softmax_rows(mut logits: Array2<f64>) -> Array2<f64> {
    for mut row in logits.rows_mut() {
        let max = row.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row.mapv_inplace(|v| v / sum);
    }
    logits
}

fn activate(logits: Array2<f64>, binary: bool) -> Array2<f64> {
    if binary {
        logits.mapv(sigmoid)
    } else {
        softmax_rows(logits)
    }
}

impl Classifier for LogisticRegression {
    fn fit(&mut self, x: &Array2<f64>, y: &[usize]) -> Result<()> {
        self.check_hyperparameters()?;
        let n_classes = check_training_data(x, y)?;

        let binary = n_classes == 2;
        let outputs = if binary { 1 } else { n_classes };
        let (n_samples, n_features) = x.dim();
        let n = n_samples as f64;

        let mut targets = Array2::<f64>::zeros((n_samples, outputs));
        for (i, &label) in y.iter().enumerate() {
            if binary {
                targets[[i, 0]] = label as f64;
            } else {
                targets[[i, label]] = 1.0;
            }
        }

        let mut weights = Array2::<f64>::zeros((n_features, outputs));
        let mut intercept = Array1::<f64>::zeros(outputs);
        self.n_iter = 0;
        self.converged = false;

        for iter in 0..self.max_iter {
            let probs = activate(x.dot(&weights) + &intercept, binary);
            let error = probs - &targets;

            let grad_w = x.t().dot(&error) / n + &(&weights * self.l2);
            let grad_b = error.sum_axis(Axis(0)) / n;

            weights.scaled_add(-self.learning_rate, &grad_w);
            if self.fit_intercept {
                intercept.scaled_add(-self.learning_rate, &grad_b);
            }
            self.n_iter = iter + 1;

            let mut max_grad = grad_w.iter().fold(0.0_f64, |m, g| m.max(g.abs()));
            if self.fit_intercept {
                max_grad = grad_b.iter().fold(max_grad, |m, g| m.max(g.abs()));
            }
            if max_grad < self.tol {
                self.converged = true;
                break;
            }
        }

        self.weights = Some(weights);
        self.intercept = Some(intercept);
        self.n_classes = Some(n_classes);
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let logits = self.decision_function(x)?;
        if logits.ncols() == 1 {
            let mut proba = Array2::<f64>::zeros((logits.nrows(), 2));
            for (i, &z) in logits.column(0).iter().enumerate() {
                let p = sigmoid(z);
                proba[[i, 0]] = 1.0 - p;
                proba[[i, 1]] = p;
            }
            Ok(proba)
        } else {
            Ok(softmax_rows(logits))
        }
    }

    fn n_classes(&self) -> Option<usize> {
        self.n_classes
    }

    fn name(&self) -> &str {
        "LogisticRegression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{make_classification, train_test_split, ClassificationSpec};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_sigmoid() {
        assert_abs_diff_eq!(sigmoid(0.0), 0.5, epsilon = 1e-12);
        assert!(sigmoid(50.0) > 0.999_999);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!(sigmoid(-800.0).is_finite());
    }

    #[test]
    fn test_softmax_rows_sum_to_one() {
        let p = softmax_rows(array![[1.0, 2.0, 3.0], [1000.0, 1000.0, 0.0]]);
        for row in p.rows() {
            assert_abs_diff_eq!(row.sum(), 1.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(p[[1, 0]], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unfitted_model_errors() {
        let model = LogisticRegression::new();
        let x = Array2::zeros((2, 2));
        assert!(matches!(model.predict_proba(&x), Err(Error::NotFitted(_))));
    }

    #[test]
    fn test_feature_count_checked() {
        let mut model = LogisticRegression::new();
        let x = array![[0.0, 0.0], [1.0, 1.0], [0.0, 1.0], [1.0, 0.0]];
        model.fit(&x, &[0, 1, 1, 0]).unwrap();
        let wrong = Array2::zeros((1, 3));
        assert!(matches!(
            model.predict(&wrong),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_binary_fit_separable() {
        let spec = ClassificationSpec {
            n_samples: 400,
            class_sep: 2.0,
            ..Default::default()
        };
        let data = make_classification(&spec).unwrap();
        let (train, test) = train_test_split(&data, 0.25, true, 0).unwrap();

        let mut model = LogisticRegression::new().with_max_iter(2000);
        model.fit(train.features(), train.labels()).unwrap();

        let acc = model.score(test.features(), test.labels()).unwrap();
        assert!(acc >= 0.9, "accuracy {acc}");
        assert_eq!(model.n_classes(), Some(2));
        assert_eq!(model.coefficients().unwrap().dim(), (4, 1));
        assert!(model.n_iter() > 0);
    }

    #[test]
    fn test_binary_proba_columns_sum_to_one() {
        let x = array![[0.0], [1.0], [2.0], [3.0]];
        let mut model = LogisticRegression::new();
        model.fit(&x, &[0, 0, 1, 1]).unwrap();
        let proba = model.predict_proba(&x).unwrap();
        assert_eq!(proba.dim(), (4, 2));
        for row in proba.rows() {
            assert_abs_diff_eq!(row.sum(), 1.0, epsilon = 1e-12);
        }
        // Probability of class 1 increases with x
        assert!(proba[[3, 1]] > proba[[0, 1]]);
    }

    #[test]
    fn test_multiclass_fit() {
        let spec = ClassificationSpec {
            n_samples: 300,
            n_features: 3,
            n_informative: 2,
            n_classes: 3,
            class_sep: 2.5,
            ..Default::default()
        };
        let data = make_classification(&spec).unwrap();
        let mut model = LogisticRegression::new().with_max_iter(1500);
        model.fit(data.features(), data.labels()).unwrap();

        let proba = model.predict_proba(data.features()).unwrap();
        assert_eq!(proba.dim(), (300, 3));
        let acc = model.score(data.features(), data.labels()).unwrap();
        assert!(acc >= 0.85, "accuracy {acc}");
    }

    #[test]
    fn test_l2_shrinks_weights() {
        let data = make_classification(&ClassificationSpec {
            n_samples: 200,
            class_sep: 2.0,
            ..Default::default()
        })
        .unwrap();
        let mut plain = LogisticRegression::new().with_max_iter(500);
        let mut ridge = LogisticRegression::new().with_max_iter(500).with_l2(1.0);
        plain.fit(data.features(), data.labels()).unwrap();
        ridge.fit(data.features(), data.labels()).unwrap();

        let norm = |m: &LogisticRegression| {
            m.coefficients()
                .unwrap()
                .iter()
                .map(|w| w * w)
                .sum::<f64>()
        };
        assert!(norm(&ridge) < norm(&plain));
    }

    #[test]
    fn test_no_intercept_keeps_zero_bias() {
        let x = array![[-1.0], [-2.0], [1.0], [2.0]];
        let mut model = LogisticRegression::new().with_fit_intercept(false);
        model.fit(&x, &[0, 0, 1, 1]).unwrap();
        assert_eq!(model.intercept().unwrap()[0], 0.0);
    }

    #[test]
    fn test_bad_hyperparameters() {
        let x = array![[0.0], [1.0]];
        let y = [0, 1];
        assert!(LogisticRegression::new()
            .with_learning_rate(0.0)
            .fit(&x, &y)
            .is_err());
        assert!(LogisticRegression::new().with_max_iter(0).fit(&x, &y).is_err());
        assert!(LogisticRegression::new().with_l2(-1.0).fit(&x, &y).is_err());
        assert!(LogisticRegression::new()
            .with_tolerance(0.0)
            .fit(&x, &y)
            .is_err());
    }

    #[test]
    fn test_tolerance_stops_early() {
        let x = array![[0.0], [1.0]];
        let mut model = LogisticRegression::new()
            .with_max_iter(10_000)
            .with_tolerance(0.1);
        model.fit(&x, &[0, 1]).unwrap();
        assert!(model.n_iter() < 10_000);
        assert!(model.converged());
    }

    #[test]
    fn test_converged_on_last_iteration() {
        let x = array![[0.0], [1.0]];
        let mut model = LogisticRegression::new().with_max_iter(1).with_tolerance(10.0);
        model.fit(&x, &[0, 1]).unwrap();
        assert_eq!(model.n_iter(), 1);
        assert!(model.converged());

        let mut model = LogisticRegression::new().with_max_iter(1).with_tolerance(1e-12);
        model.fit(&x, &[0, 1]).unwrap();
        assert_eq!(model.n_iter(), 1);
        assert!(!model.converged());
    }
}
