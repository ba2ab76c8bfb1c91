//! SVG charts for evaluation curves and confusion matrices
//!
//! Charts are plain SVG strings built by hand; every chart in this crate
//! plots rates, so the data range is fixed to the unit square.

mod charts;
mod svg;

pub use charts::{confusion_heatmap, pr_chart, roc_chart};
pub use svg::{escape_xml, LineChart, Series, PALETTE};
