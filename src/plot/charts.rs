//! Evaluation charts: ROC, precision-recall and confusion heatmap

use super::svg::{escape_xml, LineChart, Series, PALETTE};
use crate::eval::classification::{ConfusionMatrix, Normalize};
use crate::eval::curves::{PrecisionRecallCurve, RocCurve};
use std::fmt::Write;

const CHANCE_COLOR: &str = "#888888";

/// ROC curves, one per `(name, curve, auc)`, with the chance diagonal
pub fn roc_chart(curves: &[(&str, &RocCurve, f64)]) -> String {
    let mut chart = LineChart::new("ROC curve")
        .x_label("False positive rate")
        .y_label("True positive rate");
    for (i, (name, curve, auc)) in curves.iter().enumerate() {
        let points = curve.fpr.iter().copied().zip(curve.tpr.iter().copied()).collect();
        chart = chart.series(Series::new(
            format!("{name} (AUC = {auc:.3})"),
            points,
            PALETTE[i % PALETTE.len()],
        ));
    }
    chart
        .series(Series::new("Chance", vec![(0.0, 0.0), (1.0, 1.0)], CHANCE_COLOR).dashed("6,4"))
        .render()
}

/// Precision-recall step curves, one per `(name, curve, ap)`, with the no-skill line
pub fn pr_chart(curves: &[(&str, &PrecisionRecallCurve, f64)], no_skill: f64) -> String {
    let mut chart = LineChart::new("Precision-recall curve")
        .x_label("Recall")
        .y_label("Precision");
    for (i, (name, curve, ap)) in curves.iter().enumerate() {
        let points = curve
            .recall
            .iter()
            .copied()
            .zip(curve.precision.iter().copied())
            .collect();
        chart = chart.series(
            Series::new(format!("{name} (AP = {ap:.3})"), points, PALETTE[i % PALETTE.len()])
                .stepped(),
        );
    }
    chart
        .series(
            Series::new(
                format!("No skill ({no_skill:.2})"),
                vec![(0.0, no_skill), (1.0, no_skill)],
                CHANCE_COLOR,
            )
            .dashed("6,4"),
        )
        .render()
}

const CELL: f64 = 80.0;
const HEAT_LEFT: f64 = 100.0;
const HEAT_TOP: f64 = 60.0;

/// Blend from near-white to dark blue
fn shade(intensity: f64) -> String {
    let t = intensity.clamp(0.0, 1.0);
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        lerp(247.0, 8.0),
        lerp(251.0, 48.0),
        lerp(255.0, 107.0)
    )
}

/// Confusion matrix heatmap with the value written in each cell
pub fn confusion_heatmap(cm: &ConfusionMatrix, normalize: Option<Normalize>) -> String {
    let n = cm.n_classes();
    let values: Vec<Vec<f64>> = match normalize {
        Some(mode) => cm.normalized(mode),
        None => cm
            .matrix()
            .iter()
            .map(|row| row.iter().map(|&c| c as f64).collect())
            .collect(),
    };
    let max = values.iter().flatten().copied().fold(0.0_f64, f64::max);

    let width = HEAT_LEFT + n as f64 * CELL + 30.0;
    let height = HEAT_TOP + n as f64 * CELL + 70.0;
    let title = match normalize {
        None => "Confusion matrix".to_string(),
        Some(Normalize::True) => "Confusion matrix (normalized over true labels)".to_string(),
        Some(Normalize::Pred) => "Confusion matrix (normalized over predictions)".to_string(),
        Some(Normalize::All) => "Confusion matrix (normalized over all samples)".to_string(),
    };

    let mut svg = String::new();
    // Writing into a String cannot fail
    let _ = write_heatmap(&mut svg, &values, max, normalize.is_some(), width, height, &title);
    svg
}

fn write_heatmap(
    svg: &mut String,
    values: &[Vec<f64>],
    max: f64,
    fractions: bool,
    width: f64,
    height: f64,
    title: &str,
) -> std::fmt::Result {
    let n = values.len();
    writeln!(svg, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    )?;
    writeln!(svg, "  <style>")?;
    writeln!(svg, "    text {{ font-family: sans-serif; }}")?;
    writeln!(svg, "    .cell {{ font-size: 14px; }}")?;
    writeln!(svg, "    .tick {{ font-size: 12px; fill: #555; }}")?;
    writeln!(svg, "    .axis {{ font-size: 13px; }}")?;
    writeln!(svg, "  </style>")?;
    writeln!(svg, "  <rect width=\"100%\" height=\"100%\" fill=\"#f8f8f8\"/>")?;
    writeln!(
        svg,
        "  <text x=\"{:.1}\" y=\"30\" text-anchor=\"middle\" font-size=\"15\" font-weight=\"bold\">{}</text>",
        width / 2.0,
        escape_xml(title)
    )?;

    for (i, row) in values.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let x = HEAT_LEFT + j as f64 * CELL;
            let y = HEAT_TOP + i as f64 * CELL;
            let intensity = if max > 0.0 { value / max } else { 0.0 };
            let text_color = if intensity > 0.5 { "white" } else { "#222" };
            let label = if fractions {
                format!("{value:.2}")
            } else {
                format!("{value:.0}")
            };
            writeln!(
                svg,
                "  <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{CELL}\" height=\"{CELL}\" fill=\"{}\" stroke=\"white\"/>",
                shade(intensity)
            )?;
            writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"cell\" fill=\"{text_color}\">{label}</text>",
                x + CELL / 2.0,
                y + CELL / 2.0 + 5.0
            )?;
        }
    }

    // Class ticks
    for k in 0..n {
        let center = k as f64 * CELL + CELL / 2.0;
        writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"tick\">{k}</text>",
            HEAT_LEFT + center,
            HEAT_TOP + n as f64 * CELL + 18.0
        )?;
        writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" class=\"tick\">{k}</text>",
            HEAT_LEFT - 8.0,
            HEAT_TOP + center + 4.0
        )?;
    }

    let grid_mid = n as f64 * CELL / 2.0;
    writeln!(
        svg,
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"axis\">Predicted label</text>",
        HEAT_LEFT + grid_mid,
        HEAT_TOP + n as f64 * CELL + 45.0
    )?;
    let (lx, ly) = (HEAT_LEFT - 45.0, HEAT_TOP + grid_mid);
    writeln!(
        svg,
        "  <text x=\"{lx:.1}\" y=\"{ly:.1}\" text-anchor=\"middle\" class=\"axis\" transform=\"rotate(-90 {lx:.1} {ly:.1})\">True label</text>"
    )?;
    writeln!(svg, "</svg>")
}
