//! Minimal line chart renderer

use std::fmt;

/// Series colours, reused cyclically
pub const PALETTE: [&str; 6] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b"];

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 480.0;
const LEFT: f64 = 70.0;
const RIGHT: f64 = 30.0;
const TOP: f64 = 50.0;
const BOTTOM: f64 = 60.0;

/// Escape text for use inside SVG elements and attributes
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// One polyline on a [`LineChart`]
#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: String,
    /// SVG `stroke-dasharray`, e.g. `"6,4"`
    pub dash: Option<String>,
    /// Hold each y until the next x (step-post)
    pub step: bool,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points,
            color: color.into(),
            dash: None,
            step: false,
        }
    }

    pub fn dashed(mut self, pattern: impl Into<String>) -> Self {
        self.dash = Some(pattern.into());
        self
    }

    pub fn stepped(mut self) -> Self {
        self.step = true;
        self
    }

    fn vertices(&self) -> Vec<(f64, f64)> {
        if !self.step {
            return self.points.clone();
        }
        let mut out = Vec::with_capacity(self.points.len() * 2);
        for pair in self.points.windows(2) {
            let ((x0, y0), (x1, _)) = (pair[0], pair[1]);
            out.push((x0, y0));
            out.push((x1, y0));
        }
        out.extend(self.points.last().copied());
        out
    }
}

/// Line chart over the unit square, rendered as a standalone SVG document
#[derive(Clone, Debug, Default)]
pub struct LineChart {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<Series>,
}

impl LineChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Render the SVG document
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn px(x: f64) -> f64 {
        LEFT + x.clamp(0.0, 1.0) * (WIDTH - LEFT - RIGHT)
    }

    fn py(y: f64) -> f64 {
        TOP + (1.0 - y.clamp(0.0, 1.0)) * (HEIGHT - TOP - BOTTOM)
    }

    fn write_axes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x0, x1, y0, y1) = (Self::px(0.0), Self::px(1.0), Self::py(0.0), Self::py(1.0));
        writeln!(
            f,
            "  <rect x=\"{x0:.1}\" y=\"{y1:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"white\" stroke=\"#333\"/>",
            x1 - x0,
            y0 - y1
        )?;

        for i in 0..=5 {
            let v = f64::from(i) * 0.2;
            let (x, y) = (Self::px(v), Self::py(v));
            // Grid
            writeln!(f, "  <line x1=\"{x:.1}\" y1=\"{y0:.1}\" x2=\"{x:.1}\" y2=\"{y1:.1}\" class=\"grid\"/>")?;
            writeln!(f, "  <line x1=\"{x0:.1}\" y1=\"{y:.1}\" x2=\"{x1:.1}\" y2=\"{y:.1}\" class=\"grid\"/>")?;
            // Tick labels
            writeln!(
                f,
                "  <text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"tick\">{v:.1}</text>",
                y0 + 18.0
            )?;
            writeln!(
                f,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" class=\"tick\">{v:.1}</text>",
                x0 - 8.0,
                y + 4.0
            )?;
        }

        let mid_x = (x0 + x1) / 2.0;
        let mid_y = (y0 + y1) / 2.0;
        writeln!(
            f,
            "  <text x=\"{mid_x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"axis\">{}</text>",
            y0 + 42.0,
            escape_xml(&self.x_label)
        )?;
        writeln!(
            f,
            "  <text x=\"{:.1}\" y=\"{mid_y:.1}\" text-anchor=\"middle\" class=\"axis\" transform=\"rotate(-90 {:.1} {mid_y:.1})\">{}</text>",
            x0 - 45.0,
            x0 - 45.0,
            escape_xml(&self.y_label)
        )
    }

    fn write_series(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for series in &self.series {
            let points: Vec<String> = series
                .vertices()
                .iter()
                .map(|&(x, y)| format!("{:.1},{:.1}", Self::px(x), Self::py(y)))
                .collect();
            let dash = series
                .dash
                .as_deref()
                .map(|d| format!(" stroke-dasharray=\"{}\"", escape_xml(d)))
                .unwrap_or_default();
            writeln!(
                f,
                "  <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"{dash}/>",
                points.join(" "),
                escape_xml(&series.color)
            )?;
        }
        Ok(())
    }

    fn write_legend(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = Self::px(1.0) - 12.0;
        let bottom = Self::py(0.0) - 12.0;
        for (i, series) in self.series.iter().rev().enumerate() {
            let y = bottom - i as f64 * 18.0;
            let dash = series
                .dash
                .as_deref()
                .map(|d| format!(" stroke-dasharray=\"{}\"", escape_xml(d)))
                .unwrap_or_default();
            writeln!(
                f,
                "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"2\"{dash}/>",
                x - 24.0,
                y - 4.0,
                x,
                y - 4.0,
                escape_xml(&series.color)
            )?;
            writeln!(
                f,
                "  <text x=\"{:.1}\" y=\"{y:.1}\" text-anchor=\"end\" class=\"legend\">{}</text>",
                x - 30.0,
                escape_xml(&series.label)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for LineChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\">"
        )?;
        writeln!(f, "  <style>")?;
        writeln!(f, "    text {{ font-family: sans-serif; }}")?;
        writeln!(f, "    .grid {{ stroke: #e0e0e0; stroke-width: 1; }}")?;
        writeln!(f, "    .tick {{ font-size: 11px; fill: #555; }}")?;
        writeln!(f, "    .axis {{ font-size: 13px; }}")?;
        writeln!(f, "    .legend {{ font-size: 12px; }}")?;
        writeln!(f, "  </style>")?;
        writeln!(f, "  <rect width=\"100%\" height=\"100%\" fill=\"#f8f8f8\"/>")?;
        writeln!(
            f,
            "  <text x=\"{:.1}\" y=\"30\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\">{}</text>",
            WIDTH / 2.0,
            escape_xml(&self.title)
        )?;
        self.write_axes(f)?;
        self.write_series(f)?;
        self.write_legend(f)?;
        writeln!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\"'"), "a&lt;b &amp; &quot;c&quot;&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_render_structure() {
        let svg = LineChart::new("Curves <test>")
            .x_label("False positive rate")
            .y_label("True positive rate")
            .series(Series::new("model", vec![(0.0, 0.0), (1.0, 1.0)], PALETTE[0]))
            .series(Series::new("chance", vec![(0.0, 0.0), (1.0, 1.0)], "#888").dashed("6,4"))
            .render();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Curves &lt;test&gt;"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains("stroke-dasharray=\"6,4\""));
        for tick in ["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"] {
            assert!(svg.contains(&format!(">{tick}</text>")), "missing tick {tick}");
        }
        assert!(svg.contains("False positive rate"));
    }

    #[test]
    fn test_points_map_to_plot_box() {
        let svg = LineChart::new("t")
            .series(Series::new("s", vec![(0.0, 0.0), (1.0, 1.0)], "#000"))
            .render();
        // (0,0) is bottom-left, (1,1) top-right
        assert!(svg.contains("points=\"70.0,420.0 530.0,50.0\""));
    }

    #[test]
    fn test_step_series_vertices() {
        let series = Series::new("s", vec![(1.0, 0.5), (0.5, 1.0), (0.0, 1.0)], "#000").stepped();
        assert_eq!(
            series.vertices(),
            vec![(1.0, 0.5), (0.5, 0.5), (0.5, 1.0), (0.0, 1.0), (0.0, 1.0)]
        );
    }
}
