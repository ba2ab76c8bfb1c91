//! Classifiers used by the evaluation lessons
//!
//! - [`LogisticRegression`]: sigmoid (binary) or softmax (multi-class)
//!   regression trained with batch gradient descent
//! - [`DummyClassifier`]: label-blind baselines (majority, prior, uniform,
//!   stratified) that show how accuracy misleads on imbalanced data

mod dummy;
mod logistic;

pub use dummy::{DummyClassifier, DummyStrategy};
pub use logistic::LogisticRegression;

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1};

/// Supervised classifier over dense `f64` features
pub trait Classifier {
    /// Fit on `x` (`n_samples × n_features`) and labels `y` in `0..n_classes`
    fn fit(&mut self, x: &Array2<f64>, y: &[usize]) -> Result<()>;

    /// Class probabilities, `n_samples × n_classes`
    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>>;

    /// Predicted labels (argmax of [`Classifier::predict_proba`], ties go to
    /// the lower class)
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<usize>> {
        let proba = self.predict_proba(x)?;
        Ok(proba.rows().into_iter().map(argmax).collect())
    }

    /// Number of classes seen during `fit`
    fn n_classes(&self) -> Option<usize>;

    /// Short display name
    fn name(&self) -> &str;

    /// Mean accuracy on `(x, y)`
    fn score(&self, x: &Array2<f64>, y: &[usize]) -> Result<f64> {
        let pred = self.predict(x)?;
        crate::eval::classification::accuracy(&pred, y)
    }
}

pub(crate) fn argmax(row: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    for (i, &v) in row.iter().enumerate() {
        if v > row[best] {
            best = i;
        }
    }
    best
}

/// Validate a training pair and return the number of classes (`max(y) + 1`)
pub(crate) fn check_training_data(x: &Array2<f64>, y: &[usize]) -> Result<usize> {
    if y.is_empty() {
        return Err(Error::EmptyInput("cannot fit with zero samples".into()));
    }
    if x.nrows() != y.len() {
        return Err(Error::length_mismatch("labels", x.nrows(), y.len()));
    }
    let n_classes = y.iter().max().map_or(0, |&m| m + 1);
    let distinct = {
        let mut seen = vec![false; n_classes];
        for &label in y {
            seen[label] = true;
        }
        seen.iter().filter(|&&s| s).count()
    };
    if distinct < 2 {
        return Err(Error::InvalidParameter(
            "training labels must contain at least 2 classes".into(),
        ));
    }
    Ok(n_classes)
}
