//! Labels and scores produced outside this crate, read from CSV

use crate::error::{Error, Result};
use serde::Deserialize;
use std::io;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Row {
    y_true: usize,
    y_pred: usize,
    #[serde(default)]
    score: Option<f64>,
}

/// Ground truth, predicted labels and optional positive-class scores
#[derive(Debug, Clone, PartialEq)]
pub struct Predictions {
    pub y_true: Vec<usize>,
    pub y_pred: Vec<usize>,
    /// Present when the file has a `score` column
    pub scores: Option<Vec<f64>>,
}

impl Predictions {
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_true.is_empty()
    }

    /// Largest label in either column plus one
    pub fn n_classes(&self) -> usize {
        self.y_true
            .iter()
            .chain(&self.y_pred)
            .max()
            .map_or(0, |&m| m + 1)
    }
}

/// Read a `y_true,y_pred[,score]` CSV with a header row
///
/// A `score` column must be filled on every row or on none.
pub fn read_predictions<R: io::Read>(reader: R) -> Result<Predictions> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let has_score = reader.headers()?.iter().any(|h| h == "score");

    let mut y_true = Vec::new();
    let mut y_pred = Vec::new();
    let mut scores = Vec::new();
    for (i, row) in reader.deserialize::<Row>().enumerate() {
        let row = row?;
        y_true.push(row.y_true);
        y_pred.push(row.y_pred);
        if has_score {
            let score = row.score.ok_or_else(|| {
                Error::InvalidParameter(format!("row {} has no score", i + 1))
            })?;
            scores.push(score);
        }
    }

    if y_true.is_empty() {
        return Err(Error::EmptyInput("CSV file has no rows".into()));
    }
    Ok(Predictions {
        y_true,
        y_pred,
        scores: has_score.then_some(scores),
    })
}

/// Load predictions from a CSV file
pub fn load_predictions<P: AsRef<Path>>(path: P) -> Result<Predictions> {
    let file = std::fs::File::open(path.as_ref())?;
    read_predictions(io::BufReader::new(file))
}
