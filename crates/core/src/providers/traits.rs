use crate::models::metrics::{MetricVariation, ProductMetrics};

/// Half-open range `[low, high)` for the placeholder price variation, in percent.
pub const PRICE_VARIATION_RANGE: (f64, f64) = (-20.0, 30.0);
/// Half-open range for the placeholder margin variation, in percent.
pub const MARGIN_VARIATION_RANGE: (f64, f64) = (-5.0, 5.0);
/// Half-open range for the placeholder units variation, in percent.
pub const UNITS_VARIATION_RANGE: (f64, f64) = (-10.0, 10.0);

/// Source of the variation figures shown beside each metric card.
///
/// There is no prior-period data, so implementations produce placeholder
/// values. They must not pretend to compare against history. Swapping the
/// implementation (random in production, fixed in tests) leaves the rest of
/// the report untouched.
pub trait VariationProvider {
    /// Human-readable name of this provider (for logs).
    fn name(&self) -> &str;

    /// Variation figures for one product section.
    fn variation_for(&mut self, metrics: &ProductMetrics) -> MetricVariation;
}
