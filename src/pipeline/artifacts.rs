//! Writing reports and charts to disk

use super::report::ExperimentReport;
use crate::config::PlotKind;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the JSON report
pub const REPORT_FILE: &str = "report.json";

/// Rendered SVG charts, in render order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSet {
    charts: Vec<(PlotKind, String)>,
}

impl ChartSet {
    /// Add or replace the chart of `kind`
    pub fn insert(&mut self, kind: PlotKind, svg: String) {
        match self.charts.iter_mut().find(|(k, _)| *k == kind) {
            Some(slot) => slot.1 = svg,
            None => self.charts.push((kind, svg)),
        }
    }

    pub fn get(&self, kind: PlotKind) -> Option<&str> {
        self.charts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, svg)| svg.as_str())
    }

    pub fn kinds(&self) -> impl Iterator<Item = PlotKind> + '_ {
        self.charts.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl ExperimentReport {
    /// Write `report.json` and every chart into `dir`, creating it if needed
    ///
    /// Returns the written paths, report first.
    pub fn write_artifacts(&self, dir: &Path, charts: &ChartSet) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;

        let report_path = dir.join(REPORT_FILE);
        fs::write(&report_path, serde_json::to_string_pretty(self)?)?;

        let mut written = vec![report_path];
        for (kind, svg) in &charts.charts {
            let path = dir.join(kind.file_name());
            fs::write(&path, svg)?;
            written.push(path);
        }
        Ok(written)
    }
}
