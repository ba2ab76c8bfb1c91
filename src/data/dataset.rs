//! Labelled feature matrix

use crate::error::{Error, Result};
use ndarray::{Array2, Axis};
use serde::Serialize;

/// Feature matrix with one class label per row
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    labels: Vec<usize>,
    n_classes: usize,
}

impl Dataset {
    /// Create a dataset, checking that rows and labels line up and that every
    /// label lies in `0..n_classes`
    pub fn new(features: Array2<f64>, labels: Vec<usize>, n_classes: usize) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(Error::length_mismatch(
                "labels",
                features.nrows(),
                labels.len(),
            ));
        }
        if n_classes == 0 {
            return Err(Error::InvalidParameter("n_classes must be > 0".into()));
        }
        if let Some(&bad) = labels.iter().find(|&&l| l >= n_classes) {
            return Err(Error::InvalidParameter(format!(
                "label {bad} out of range for {n_classes} classes"
            )));
        }
        Ok(Self {
            features,
            labels,
            n_classes,
        })
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Number of samples per class, indexed by class
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.n_classes];
        for &label in &self.labels {
            counts[label] += 1;
        }
        counts
    }

    /// Rows at `indices`, in that order
    ///
    /// # Panics
    /// Panics if an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: self.features.select(Axis(0), indices),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
            n_classes: self.n_classes,
        }
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            n_samples: self.n_samples(),
            n_features: self.n_features(),
            n_classes: self.n_classes,
            class_counts: self.class_counts(),
        }
    }
}

/// Shape and class balance of a dataset, as reported by experiments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub n_samples: usize,
    pub n_features: usize,
    pub n_classes: usize,
    pub class_counts: Vec<usize>,
}
