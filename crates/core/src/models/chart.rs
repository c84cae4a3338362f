use serde::{Deserialize, Serialize};

/// A declarative line chart.
///
/// The core fills in every label and value; the frontend only draws it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,

    /// Rotation of the x-axis tick labels, in degrees
    pub x_tick_rotation: f64,

    /// Series in drawing order
    pub series: Vec<ChartSeries>,
}

/// One line on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label
    pub name: String,

    /// (x label, y value) pairs, x labels formatted `YYYY-MM`
    pub points: Vec<(String, f64)>,

    pub style: LineStyle,

    /// Explicit color, or `None` for the frontend's palette default
    pub color: Option<String>,

    /// Whether this series gets a legend entry
    pub in_legend: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    /// Solid line with a marker at every point
    SolidWithMarkers,
    Dashed,
}
