//! Synthetic classification data
//!
//! Each class is a unit-variance Gaussian cloud centred on a vertex of a
//! hypercube with side `2 * class_sep` in the informative subspace; the
//! remaining features are pure noise. Class proportions and label noise are
//! configurable so the same generator covers balanced, imbalanced and noisy
//! lessons.

use super::dataset::Dataset;
use crate::error::{Error, Result};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters for [`make_classification`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSpec {
    /// Total number of samples
    #[serde(default = "default_n_samples")]
    pub n_samples: usize,

    /// Total number of features
    #[serde(default = "default_n_features")]
    pub n_features: usize,

    /// Features that carry class signal (the rest are noise)
    #[serde(default = "default_n_informative")]
    pub n_informative: usize,

    /// Number of classes
    #[serde(default = "default_n_classes")]
    pub n_classes: usize,

    /// Half the hypercube side; larger values separate classes further
    #[serde(default = "default_class_sep")]
    pub class_sep: f64,

    /// Optional class proportions (length `n_classes`, summing to 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,

    /// Fraction of labels replaced with a random class
    #[serde(default)]
    pub flip_y: f64,

    /// RNG seed
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_n_samples() -> usize {
    1000
}

fn default_n_features() -> usize {
    4
}

fn default_n_informative() -> usize {
    2
}

fn default_n_classes() -> usize {
    2
}

fn default_class_sep() -> f64 {
    1.0
}

fn default_seed() -> u64 {
    42
}

impl Default for ClassificationSpec {
    fn default() -> Self {
        Self {
            n_samples: default_n_samples(),
            n_features: default_n_features(),
            n_informative: default_n_informative(),
            n_classes: default_n_classes(),
            class_sep: default_class_sep(),
            weights: None,
            flip_y: 0.0,
            seed: default_seed(),
        }
    }
}

impl ClassificationSpec {
    /// Check parameter ranges
    pub fn check(&self) -> Result<()> {
        if self.n_classes < 2 {
            return Err(Error::InvalidParameter(format!(
                "n_classes must be >= 2, got {}",
                self.n_classes
            )));
        }
        if self.n_features == 0 {
            return Err(Error::InvalidParameter("n_features must be >= 1".into()));
        }
        if self.n_informative == 0 || self.n_informative > self.n_features {
            return Err(Error::InvalidParameter(format!(
                "n_informative must be in 1..={}, got {}",
                self.n_features, self.n_informative
            )));
        }
        if self.n_samples < self.n_classes {
            return Err(Error::InvalidParameter(format!(
                "n_samples ({}) must be >= n_classes ({})",
                self.n_samples, self.n_classes
            )));
        }
        if !(self.class_sep.is_finite() && self.class_sep > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "class_sep must be > 0, got {}",
                self.class_sep
            )));
        }
        if !(0.0..1.0).contains(&self.flip_y) {
            return Err(Error::InvalidParameter(format!(
                "flip_y must be in [0, 1), got {}",
                self.flip_y
            )));
        }
        if let Some(weights) = &self.weights {
            if weights.len() != self.n_classes {
                return Err(Error::length_mismatch(
                    "weights",
                    self.n_classes,
                    weights.len(),
                ));
            }
            if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(Error::InvalidParameter(
                    "weights must be finite and non-negative".into(),
                ));
            }
            let sum: f64 = weights.iter().sum();
            if (sum - 1.0).abs() > 1e-6 {
                return Err(Error::InvalidParameter(format!(
                    "weights must sum to 1, got {sum}"
                )));
            }
        }
        Ok(())
    }

    /// Number of samples drawn for each class
    pub fn class_sizes(&self) -> Vec<usize> {
        let n = self.n_samples;
        let k = self.n_classes;
        let uniform = vec![1.0 / k as f64; k];
        let weights = self.weights.as_deref().unwrap_or(&uniform);

        let mut sizes: Vec<usize> = weights
            .iter()
            .map(|w| (w * n as f64).floor() as usize)
            .collect();

        // Every class shows up at least once
        for size in &mut sizes {
            if *size == 0 {
                *size = 1;
            }
        }

        let mut total: usize = sizes.iter().sum();
        if total < n {
            sizes[k - 1] += n - total;
        }
        while total > n {
            let (largest, _) = sizes
                .iter()
                .enumerate()
                .max_by_key(|(_, &s)| s)
                .unwrap_or((0, &0));
            sizes[largest] -= 1;
            total -= 1;
        }
        sizes
    }
}

/// Draw one sample from N(0, 1) with the Box-Muller transform
pub(crate) fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-12);
    let u2: f64 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Centroid of `class` in the informative subspace
fn centroid<R: Rng>(class: usize, spec: &ClassificationSpec, rng: &mut R) -> Vec<f64> {
    let dims = spec.n_informative;
    let n_vertices = if dims >= usize::BITS as usize - 1 {
        usize::MAX
    } else {
        1usize << dims
    };
    let vertex = class % n_vertices;

    let mut c: Vec<f64> = (0..dims)
        .map(|j| {
            let bit = j < usize::BITS as usize && (vertex >> j) & 1 == 1;
            if bit {
                spec.class_sep
            } else {
                -spec.class_sep
            }
        })
        .collect();

    // More classes than vertices: share a vertex but nudge apart
    if class >= n_vertices {
        for v in &mut c {
            *v += (rng.random::<f64>() - 0.5) * spec.class_sep;
        }
    }
    c
}

/// Generate a random classification problem
///
/// # Example
/// ```
/// use evaluar::data::{make_classification, ClassificationSpec};
///
/// let spec = ClassificationSpec {
///     n_samples: 100,
///     weights: Some(vec![0.8, 0.2]),
///     ..Default::default()
/// };
/// let data = make_classification(&spec).unwrap();
/// assert_eq!(data.n_samples(), 100);
/// assert_eq!(data.class_counts(), vec![80, 20]);
/// ```
pub fn make_classification(spec: &ClassificationSpec) -> Result<Dataset> {
    spec.check()?;

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let sizes = spec.class_sizes();
    let n = spec.n_samples;
    let d = spec.n_features;

    let mut features = Array2::<f64>::zeros((n, d));
    let mut labels = Vec::with_capacity(n);

    let mut row = 0;
    for (class, &size) in sizes.iter().enumerate() {
        let center = centroid(class, spec, &mut rng);
        for _ in 0..size {
            for j in 0..d {
                let offset = if j < spec.n_informative { center[j] } else { 0.0 };
                features[[row, j]] = offset + standard_normal(&mut rng);
            }
            labels.push(class);
            row += 1;
        }
    }

    if spec.flip_y > 0.0 {
        for label in &mut labels {
            if rng.random::<f64>() < spec.flip_y {
                *label = rng.random_range(0..spec.n_classes);
            }
        }
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);

    let data = Dataset::new(features, labels, spec.n_classes)?;
    Ok(data.select(&order))
}
