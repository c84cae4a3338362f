use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::metrics::{MetricVariation, ProductMetrics};

use super::traits::{
    VariationProvider, MARGIN_VARIATION_RANGE, PRICE_VARIATION_RANGE, UNITS_VARIATION_RANGE,
};

/// Samples every variation uniformly from its fixed range.
///
/// A new value is drawn on every call, so the same report rendered twice
/// shows different variations.
pub struct RandomVariationProvider {
    rng: StdRng,
}

impl RandomVariationProvider {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence, for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample(&mut self, (low, high): (f64, f64)) -> f64 {
        self.rng.gen_range(low..high)
    }
}

impl Default for RandomVariationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl VariationProvider for RandomVariationProvider {
    fn name(&self) -> &str {
        "Random"
    }

    fn variation_for(&mut self, _metrics: &ProductMetrics) -> MetricVariation {
        MetricVariation {
            price_pct: self.sample(PRICE_VARIATION_RANGE),
            margin_pct: self.sample(MARGIN_VARIATION_RANGE),
            units_pct: self.sample(UNITS_VARIATION_RANGE),
        }
    }
}
