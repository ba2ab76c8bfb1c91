//! Leaderboard for comparing multiple models

use super::metric::Metric;
use super::result::EvalResult;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Leaderboard for comparing multiple models
#[derive(Clone, Debug, Serialize)]
pub struct Leaderboard {
    /// Evaluation results for each model
    pub results: Vec<EvalResult>,
    /// Primary metric for ranking
    pub primary_metric: Metric,
}

impl Leaderboard {
    /// Create a new leaderboard
    pub fn new(primary_metric: Metric) -> Self {
        Self {
            results: Vec::new(),
            primary_metric,
        }
    }

    /// Add evaluation result
    pub fn add(&mut self, result: EvalResult) {
        self.results.push(result);
        self.sort();
    }

    /// Sort by primary metric
    pub fn sort(&mut self) {
        self.sort_by(self.primary_metric);
    }

    /// Sort by a specific metric; models missing it go last
    pub fn sort_by(&mut self, metric: Metric) {
        let higher_is_better = metric.higher_is_better();
        self.results.sort_by(|a, b| {
            match (a.get_score(metric), b.get_score(metric)) {
                (Some(x), Some(y)) => {
                    let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                    if higher_is_better {
                        ord.reverse()
                    } else {
                        ord
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }

    /// Get best model by primary metric
    pub fn best(&self) -> Option<&EvalResult> {
        self.results.first()
    }

    /// Metric columns, in the order of the first result
    fn columns(&self) -> Vec<Metric> {
        self.results
            .first()
            .map(|first| first.metrics().to_vec())
            .unwrap_or_default()
    }

    /// Export as markdown table
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        let metrics = self.columns();
        if metrics.is_empty() {
            return md;
        }

        // Header
        md.push_str("| Model |");
        for metric in &metrics {
            md.push_str(&format!(" {metric} |"));
        }
        md.push_str(" Inference (ms) |\n");

        // Separator
        md.push_str("|-------|");
        for _ in &metrics {
            md.push_str("----------|");
        }
        md.push_str("---------------|\n");

        // Rows
        for result in &self.results {
            md.push_str(&format!("| {} |", result.model_name));
            for metric in &metrics {
                match result.get_score(*metric) {
                    Some(score) => md.push_str(&format!(" {score:.4} |")),
                    None => md.push_str(" - |"),
                }
            }
            md.push_str(&format!(" {:.2} |\n", result.inference_time_ms));
        }

        md
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metrics = self.columns();
        if metrics.is_empty() {
            return writeln!(f, "Leaderboard: (empty)");
        }

        let model_width = self
            .results
            .iter()
            .map(|r| r.model_name.chars().count())
            .max()
            .unwrap_or(5)
            .max(5);
        let widths: Vec<usize> = metrics.iter().map(|m| m.to_string().len().max(10)).collect();

        // Header
        write!(f, "┌{:─<width$}┬", "", width = model_width + 2)?;
        for &w in &widths {
            write!(f, "{:─<width$}┬", "", width = w + 2)?;
        }
        writeln!(f, "{:─<15}┐", "")?;

        write!(f, "│ {:width$} │", "Model", width = model_width)?;
        for (metric, &w) in metrics.iter().zip(&widths) {
            write!(f, " {:>width$} │", metric.to_string(), width = w)?;
        }
        writeln!(f, " Inference (ms)│")?;

        // Separator
        write!(f, "├{:─<width$}┼", "", width = model_width + 2)?;
        for &w in &widths {
            write!(f, "{:─<width$}┼", "", width = w + 2)?;
        }
        writeln!(f, "{:─<15}┤", "")?;

        // Rows
        for result in &self.results {
            write!(f, "│ {:width$} │", result.model_name, width = model_width)?;
            for (metric, &w) in metrics.iter().zip(&widths) {
                match result.get_score(*metric) {
                    Some(score) => write!(f, " {score:>width$.4} │", width = w)?,
                    None => write!(f, " {:>width$} │", "-", width = w)?,
                }
            }
            writeln!(f, " {:>13.2} │", result.inference_time_ms)?;
        }

        // Footer
        write!(f, "└{:─<width$}┴", "", width = model_width + 2)?;
        for &w in &widths {
            write!(f, "{:─<width$}┴", "", width = w + 2)?;
        }
        writeln!(f, "{:─<15}┘", "")?;

        Ok(())
    }
}
