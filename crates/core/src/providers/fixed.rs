use crate::models::metrics::{MetricVariation, ProductMetrics};

use super::traits::VariationProvider;

/// Returns the same variation for every product.
#[derive(Debug, Clone, Copy)]
pub struct FixedVariationProvider {
    variation: MetricVariation,
}

impl FixedVariationProvider {
    pub fn new(variation: MetricVariation) -> Self {
        Self { variation }
    }

    /// All variations zero.
    pub fn zero() -> Self {
        Self::new(MetricVariation {
            price_pct: 0.0,
            margin_pct: 0.0,
            units_pct: 0.0,
        })
    }
}

impl VariationProvider for FixedVariationProvider {
    fn name(&self) -> &str {
        "Fixed"
    }

    fn variation_for(&mut self, _metrics: &ProductMetrics) -> MetricVariation {
        self.variation
    }
}
