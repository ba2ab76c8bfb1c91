//! Baseline classifiers that ignore the features

use super::{check_training_data, Classifier};
use crate::error::{Error, Result};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How a [`DummyClassifier`] predicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DummyStrategy {
    /// Always predict the majority class (probability 1 for it)
    #[default]
    MostFrequent,
    /// Predict the majority class, report training priors as probabilities
    Prior,
    /// Predict uniformly at random
    Uniform,
    /// Sample labels from the training priors
    Stratified,
}

/// Feature-blind baseline classifier
#[derive(Debug, Clone)]
pub struct DummyClassifier {
    strategy: DummyStrategy,
    seed: u64,
    priors: Option<Vec<f64>>,
}

impl DummyClassifier {
    pub fn new(strategy: DummyStrategy) -> Self {
        Self {
            strategy,
            seed: 0,
            priors: None,
        }
    }

    /// Seed for the `Uniform` and `Stratified` strategies
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn strategy(&self) -> DummyStrategy {
        self.strategy
    }

    /// Class frequencies seen during `fit`
    pub fn priors(&self) -> Option<&[f64]> {
        self.priors.as_deref()
    }

    fn fitted_priors(&self) -> Result<&[f64]> {
        self.priors
            .as_deref()
            .ok_or_else(|| Error::NotFitted("DummyClassifier: call fit() first".into()))
    }

    fn majority(priors: &[f64]) -> usize {
        let mut best = 0;
        for (i, &p) in priors.iter().enumerate() {
            if p > priors[best] {
                best = i;
            }
        }
        best
    }

    /// Draw one class from a discrete distribution
    fn sample(priors: &[f64], rng: &mut StdRng) -> usize {
        let u: f64 = rng.random();
        let mut acc = 0.0;
        for (i, &p) in priors.iter().enumerate() {
            acc += p;
            if u < acc {
                return i;
            }
        }
        priors.len() - 1
    }
}

impl Classifier for DummyClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &[usize]) -> Result<()> {
        let n_classes = check_training_data(x, y)?;
        let mut counts = vec![0usize; n_classes];
        for &label in y {
            counts[label] += 1;
        }
        let n = y.len() as f64;
        self.priors = Some(counts.iter().map(|&c| c as f64 / n).collect());
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let priors = self.fitted_priors()?;
        let k = priors.len();
        let n = x.nrows();
        let mut proba = Array2::<f64>::zeros((n, k));

        match self.strategy {
            DummyStrategy::MostFrequent => {
                let top = Self::majority(priors);
                proba.column_mut(top).fill(1.0);
            }
            DummyStrategy::Prior => {
                for mut row in proba.rows_mut() {
                    for (cell, &p) in row.iter_mut().zip(priors) {
                        *cell = p;
                    }
                }
            }
            DummyStrategy::Uniform => proba.fill(1.0 / k as f64),
            DummyStrategy::Stratified => {
                let mut rng = StdRng::seed_from_u64(self.seed);
                for i in 0..n {
                    proba[[i, Self::sample(priors, &mut rng)]] = 1.0;
                }
            }
        }
        Ok(proba)
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<usize>> {
        let priors = self.fitted_priors()?;
        let n = x.nrows();
        match self.strategy {
            DummyStrategy::MostFrequent | DummyStrategy::Prior => {
                Ok(vec![Self::majority(priors); n])
            }
            DummyStrategy::Uniform => {
                let mut rng = StdRng::seed_from_u64(self.seed);
                Ok((0..n).map(|_| rng.random_range(0..priors.len())).collect())
            }
            DummyStrategy::Stratified => {
                let proba = self.predict_proba(x)?;
                Ok(proba.rows().into_iter().map(super::argmax).collect())
            }
        }
    }

    fn n_classes(&self) -> Option<usize> {
        self.priors.as_ref().map(Vec::len)
    }

    fn name(&self) -> &str {
        match self.strategy {
            DummyStrategy::MostFrequent => "Dummy(most_frequent)",
            DummyStrategy::Prior => "Dummy(prior)",
            DummyStrategy::Uniform => "Dummy(uniform)",
            DummyStrategy::Stratified => "Dummy(stratified)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn imbalanced() -> (Array2<f64>, Vec<usize>) {
        let y: Vec<usize> = (0..100).map(|i| usize::from(i % 10 == 0)).collect();
        (Array2::zeros((100, 2)), y)
    }

    #[test]
    fn test_most_frequent_accuracy_on_imbalanced() {
        let (x, y) = imbalanced();
        let mut model = DummyClassifier::new(DummyStrategy::MostFrequent);
        model.fit(&x, &y).unwrap();
        assert_eq!(model.predict(&x).unwrap(), vec![0; 100]);
        assert_abs_diff_eq!(model.score(&x, &y).unwrap(), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_prior_probabilities() {
        let (x, y) = imbalanced();
        let mut model = DummyClassifier::new(DummyStrategy::Prior);
        model.fit(&x, &y).unwrap();
        let proba = model.predict_proba(&x).unwrap();
        assert_abs_diff_eq!(proba[[0, 0]], 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(proba[[42, 1]], 0.1, epsilon = 1e-12);
        assert_eq!(model.priors().unwrap().len(), 2);
    }

    #[test]
    fn test_uniform_is_seeded() {
        let (x, y) = imbalanced();
        let mut model = DummyClassifier::new(DummyStrategy::Uniform).with_seed(5);
        model.fit(&x, &y).unwrap();
        let a = model.predict(&x).unwrap();
        let b = model.predict(&x).unwrap();
        assert_eq!(a, b);
        assert!(a.contains(&0) && a.contains(&1));
        let proba = model.predict_proba(&x).unwrap();
        assert_abs_diff_eq!(proba[[3, 1]], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_stratified_matches_priors_roughly() {
        let y: Vec<usize> = (0..2000).map(|i| usize::from(i % 4 == 0)).collect();
        let x = Array2::zeros((2000, 1));
        let mut model = DummyClassifier::new(DummyStrategy::Stratified).with_seed(1);
        model.fit(&x, &y).unwrap();
        let pred = model.predict(&x).unwrap();
        let ones = pred.iter().filter(|&&p| p == 1).count() as f64 / 2000.0;
        assert!((ones - 0.25).abs() < 0.05, "positive rate {ones}");
    }

    #[test]
    fn test_unfitted() {
        let model = DummyClassifier::new(DummyStrategy::Prior);
        assert!(model.predict(&Array2::zeros((1, 1))).is_err());
        assert_eq!(model.n_classes(), None);
    }
}
