//! Train/test splitting

use super::dataset::Dataset;
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split a dataset into `(train, test)`
///
/// Without `stratify`, a seeded permutation is cut so that the test part holds
/// `ceil(n * test_size)` samples. With `stratify`, each class contributes
/// `round(n_c * test_size)` samples to test, and every class with at least
/// two samples keeps one on each side.
pub fn train_test_split(
    data: &Dataset,
    test_size: f64,
    stratify: bool,
    seed: u64,
) -> Result<(Dataset, Dataset)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "test_size must be in (0, 1), got {test_size}"
        )));
    }
    let n = data.n_samples();
    if n < 2 {
        return Err(Error::EmptyInput(
            "need at least 2 samples to split".into(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);

    let (mut train_idx, mut test_idx) = if stratify {
        stratified_indices(data, test_size, &mut rng)
    } else {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rng);
        let n_test = ((n as f64 * test_size).ceil() as usize).clamp(1, n - 1);
        let train = order.split_off(n_test);
        (train, order)
    };

    if train_idx.is_empty() || test_idx.is_empty() {
        return Err(Error::InvalidParameter(format!(
            "test_size {test_size} leaves an empty split for {n} samples"
        )));
    }

    train_idx.shuffle(&mut rng);
    test_idx.shuffle(&mut rng);

    Ok((data.select(&train_idx), data.select(&test_idx)))
}

fn stratified_indices(
    data: &Dataset,
    test_size: f64,
    rng: &mut StdRng,
) -> (Vec<usize>, Vec<usize>) {
    let mut per_class: Vec<Vec<usize>> = vec![Vec::new(); data.n_classes()];
    for (i, &label) in data.labels().iter().enumerate() {
        per_class[label].push(i);
    }

    let mut train = Vec::with_capacity(data.n_samples());
    let mut test = Vec::new();

    for mut members in per_class {
        let count = members.len();
        if count == 0 {
            continue;
        }
        members.shuffle(rng);
        let n_test = if count >= 2 {
            ((count as f64 * test_size).round() as usize).clamp(1, count - 1)
        } else {
            0
        };
        test.extend_from_slice(&members[..n_test]);
        train.extend_from_slice(&members[n_test..]);
    }

    (train, test)
}
