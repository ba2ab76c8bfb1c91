//! K-Fold cross-validation splitters

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};

/// Train/test index pairs, one per fold
pub type Folds = Vec<(Vec<usize>, Vec<usize>)>;

fn check_n_splits(n_splits: usize) -> Result<usize> {
    if n_splits < 2 {
        return Err(Error::InvalidParameter(format!(
            "n_splits must be at least 2, got {n_splits}"
        )));
    }
    Ok(n_splits)
}

fn folds_from_assignment(fold_of: &[usize], n_splits: usize) -> Folds {
    (0..n_splits)
        .map(|k| {
            let (test, train): (Vec<usize>, Vec<usize>) =
                (0..fold_of.len()).partition(|&i| fold_of[i] == k);
            (train, test)
        })
        .collect()
}

/// K-Fold cross-validation splitter
#[derive(Clone, Debug)]
pub struct KFold {
    n_splits: usize,
    shuffle: bool,
    seed: u64,
}

impl KFold {
    /// Create a new KFold splitter; `n_splits` must be at least 2
    pub fn new(n_splits: usize) -> Result<Self> {
        Ok(Self {
            n_splits: check_n_splits(n_splits)?,
            shuffle: true,
            seed: 42,
        })
    }

    /// Set random seed for shuffling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Disable shuffling
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Generate train/test indices for each fold
    ///
    /// The first `n_samples % n_splits` folds get one extra sample.
    pub fn split(&self, n_samples: usize) -> Folds {
        let mut indices: Vec<usize> = (0..n_samples).collect();

        if self.shuffle {
            indices.shuffle(&mut StdRng::seed_from_u64(self.seed));
        }

        let fold_size = n_samples / self.n_splits;
        let remainder = n_samples % self.n_splits;

        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0;

        for i in 0..self.n_splits {
            let extra = usize::from(i < remainder);
            let end = start + fold_size + extra;

            let test_indices: Vec<usize> = indices[start..end].to_vec();
            let train_indices: Vec<usize> = indices[..start]
                .iter()
                .chain(indices[end..].iter())
                .copied()
                .collect();

            folds.push((train_indices, test_indices));
            start = end;
        }

        folds
    }
}

/// K-Fold splitter that deals each class round-robin over the folds
#[derive(Clone, Debug)]
pub struct StratifiedKFold {
    n_splits: usize,
    shuffle: bool,
    seed: u64,
}

impl StratifiedKFold {
    pub fn new(n_splits: usize) -> Result<Self> {
        Ok(Self {
            n_splits: check_n_splits(n_splits)?,
            shuffle: true,
            seed: 42,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Generate train/test indices for each fold
    ///
    /// Each class is spread evenly; the dealing position carries over between
    /// classes so fold sizes differ by at most one.
    pub fn split(&self, y: &[usize]) -> Folds {
        let n_classes = y.iter().max().map_or(0, |&m| m + 1);
        let mut by_class: Vec<Vec<usize>> = vec![Vec::new(); n_classes];
        for (i, &label) in y.iter().enumerate() {
            by_class[label].push(i);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut fold_of = vec![0; y.len()];
        let mut next = 0;
        for members in &mut by_class {
            if self.shuffle {
                members.shuffle(&mut rng);
            }
            for &i in members.iter() {
                fold_of[i] = next % self.n_splits;
                next += 1;
            }
        }

        folds_from_assignment(&fold_of, self.n_splits)
    }
}
