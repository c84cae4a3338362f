use crate::models::filter::FilteredView;
use crate::models::metrics::ProductMetrics;
use crate::models::record::SalesRecord;

/// Computes per-product summary statistics for a view.
///
/// Averages never divide by zero: a product with no units has an average
/// price of 0, and one with no revenue has an average margin of 0. An
/// average that would be infinite or NaN (overflowing sums) is also 0.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Metrics for every product in the view, in first-seen order.
    pub fn compute_all(&self, view: &FilteredView<'_>) -> Vec<ProductMetrics> {
        view.products()
            .into_iter()
            .map(|product| self.compute(product, &view.rows_for(product)))
            .collect()
    }

    /// Metrics for one product over the given rows.
    ///
    /// Rows are not checked against `product`; callers pass that product's rows.
    pub fn compute(&self, product: &str, rows: &[&SalesRecord]) -> ProductMetrics {
        let mut total_units = 0.0;
        let mut total_revenue = 0.0;
        let mut total_cost = 0.0;

        for row in rows {
            total_units += row.units_sold.unwrap_or(0.0);
            total_revenue += row.revenue.unwrap_or(0.0);
            total_cost += row.cost.unwrap_or(0.0);
        }

        let average_price = finite_or_zero(if total_units > 0.0 {
            total_revenue / total_units
        } else {
            0.0
        });
        let average_margin_pct = finite_or_zero(if total_revenue > 0.0 {
            ((total_revenue - total_cost) / total_revenue) * 100.0
        } else {
            0.0
        });

        ProductMetrics {
            product: product.to_string(),
            total_units,
            total_revenue,
            total_cost,
            average_price,
            average_margin_pct,
        }
    }
}

/// Sums that overflow to infinity must not leak into averages.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
