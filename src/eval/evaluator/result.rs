//! Evaluation result structure

use super::metric::Metric;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

fn scores_by_name<S: Serializer>(
    scores: &HashMap<Metric, f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let named: BTreeMap<String, f64> = scores.iter().map(|(m, s)| (m.to_string(), *s)).collect();
    named.serialize(serializer)
}

/// Model evaluation results
#[derive(Clone, Debug, Serialize)]
pub struct EvalResult {
    /// Name of the model
    pub model_name: String,
    #[serde(serialize_with = "scores_by_name")]
    scores: HashMap<Metric, f64>,
    /// Cross-validation scores per fold (if CV enabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_scores: Option<Vec<f64>>,
    /// Mean CV score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_mean: Option<f64>,
    /// CV score standard deviation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_std: Option<f64>,
    /// Evaluation time in milliseconds
    pub inference_time_ms: f64,
    #[serde(skip)]
    order: Vec<Metric>,
}

impl EvalResult {
    /// Create new eval result
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            scores: HashMap::new(),
            cv_scores: None,
            cv_mean: None,
            cv_std: None,
            inference_time_ms: 0.0,
            order: Vec::new(),
        }
    }

    /// Get score for a specific metric
    pub fn get_score(&self, metric: Metric) -> Option<f64> {
        self.scores.get(&metric).copied()
    }

    /// Add a score
    pub fn add_score(&mut self, metric: Metric, score: f64) {
        if self.scores.insert(metric, score).is_none() {
            self.order.push(metric);
        }
    }

    /// Metrics in the order they were added
    pub fn metrics(&self) -> &[Metric] {
        &self.order
    }

    /// `(metric, score)` pairs in the order they were added
    pub fn scores(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.order
            .iter()
            .filter_map(|&m| self.scores.get(&m).map(|&s| (m, s)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Display for EvalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {}", self.model_name)?;
        writeln!(f, "Metrics:")?;
        for (metric, score) in self.scores() {
            writeln!(f, "  {metric}: {score:.4}")?;
        }
        if let (Some(mean), Some(std)) = (self.cv_mean, self.cv_std) {
            writeln!(f, "CV: {mean:.4} ± {std:.4}")?;
        }
        writeln!(f, "Inference time: {:.2}ms", self.inference_time_ms)?;
        Ok(())
    }
}
