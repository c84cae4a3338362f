use serde::{Deserialize, Serialize};

use super::record::YearMonth;

/// Units sold by one product in one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub period: YearMonth,
    pub units_sold: f64,
}

/// `y = slope * x + intercept`, with `x` in days since the first point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Monthly series for one product plus its fitted trend.
///
/// `points`, `day_offsets` and `trend` are parallel and sorted by period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTrend {
    /// Product name
    pub product: String,

    /// Monthly units, oldest first
    pub points: Vec<MonthlyPoint>,

    /// Days between each point and the first one (first is always 0)
    pub day_offsets: Vec<f64>,

    /// Least-squares fit over (day_offsets, units)
    pub line: TrendLine,

    /// `line` evaluated at each day offset
    pub trend: Vec<f64>,
}
