use crate::models::chart::{ChartSeries, ChartSpec, LineStyle};
use crate::models::trend::SalesTrend;

const X_LABEL: &str = "Año-Mes";
const Y_LABEL: &str = "Unidades Vendidas";
const TREND_LABEL: &str = "Tendencia";
const TREND_COLOR: &str = "red";
const X_TICK_ROTATION: f64 = 45.0;

/// Generates chart descriptions from trend data.
///
/// The core computes all the numbers and labels — the frontend only renders.
/// Each chart has:
/// - the monthly units series, solid with point markers
/// - the fitted trend, dashed red, labelled in the legend
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Monthly sales chart for one product.
    pub fn sales_chart(&self, trend: &SalesTrend) -> ChartSpec {
        let labels: Vec<String> = trend.points.iter().map(|p| p.period.to_string()).collect();

        let units = ChartSeries {
            name: Y_LABEL.to_string(),
            points: labels
                .iter()
                .cloned()
                .zip(trend.points.iter().map(|p| p.units_sold))
                .collect(),
            style: LineStyle::SolidWithMarkers,
            color: None,
            in_legend: false,
        };

        let trend_series = ChartSeries {
            name: TREND_LABEL.to_string(),
            points: labels.into_iter().zip(trend.trend.iter().copied()).collect(),
            style: LineStyle::Dashed,
            color: Some(TREND_COLOR.to_string()),
            in_legend: true,
        };

        ChartSpec {
            title: format!("Evolución de Ventas Mensual: {}", trend.product),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            x_tick_rotation: X_TICK_ROTATION,
            series: vec![units, trend_series],
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
