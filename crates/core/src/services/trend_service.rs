use std::collections::BTreeMap;

use crate::models::record::{SalesRecord, YearMonth};
use crate::models::trend::{MonthlyPoint, SalesTrend, TrendLine};

/// Builds monthly unit series and fits a linear trend over them.
pub struct TrendService;

impl TrendService {
    pub fn new() -> Self {
        Self
    }

    /// Sum units per month, oldest first. Missing units count as 0.
    pub fn monthly_series(&self, rows: &[&SalesRecord]) -> Vec<MonthlyPoint> {
        let mut by_month: BTreeMap<YearMonth, f64> = BTreeMap::new();
        for row in rows {
            *by_month.entry(row.period).or_insert(0.0) += row.units_sold.unwrap_or(0.0);
        }
        by_month
            .into_iter()
            .map(|(period, units_sold)| MonthlyPoint { period, units_sold })
            .collect()
    }

    /// Monthly series and trend for one product's rows.
    pub fn estimate(&self, product: &str, rows: &[&SalesRecord]) -> SalesTrend {
        let points = self.monthly_series(rows);

        let day_offsets: Vec<f64> = match points.first() {
            Some(first) => points
                .iter()
                .map(|p| p.period.days_since(first.period) as f64)
                .collect(),
            None => Vec::new(),
        };
        let units: Vec<f64> = points.iter().map(|p| p.units_sold).collect();

        let line = fit_linear(&day_offsets, &units);
        let trend = day_offsets.iter().map(|&x| line.evaluate(x)).collect();

        SalesTrend {
            product: product.to_string(),
            points,
            day_offsets,
            line,
            trend,
        }
    }
}

impl Default for TrendService {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordinary least-squares fit of `y = slope * x + intercept`.
///
/// When `x` has no spread (a single point, or all equal) the slope is 0 and
/// the intercept is the mean of `y`. Empty input gives the zero line.
/// Only the first `min(xs.len(), ys.len())` pairs are used.
pub fn fit_linear(xs: &[f64], ys: &[f64]) -> TrendLine {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return TrendLine {
            slope: 0.0,
            intercept: 0.0,
        };
    }

    let (xs, ys) = (&xs[..n], &ys[..n]);
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    if sxx == 0.0 {
        return TrendLine {
            slope: 0.0,
            intercept: mean_y,
        };
    }

    let slope = sxy / sxx;
    TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
    }
}
