//! Datasets for classification experiments
//!
//! - `dataset`: feature matrix + label vector container
//! - `synthetic`: Gaussian-cluster generator with imbalance and label noise
//! - `split`: seeded train/test splitting, optionally stratified
//! - `predictions`: externally produced labels and scores read from CSV

mod dataset;
mod predictions;
mod split;
mod synthetic;

pub use dataset::{Dataset, DatasetSummary};
pub use predictions::{load_predictions, read_predictions, Predictions};
pub use split::train_test_split;
pub use synthetic::{make_classification, ClassificationSpec};
