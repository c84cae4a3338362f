use serde::{Deserialize, Serialize};

/// Summary statistics for one product within the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetrics {
    /// Product name
    pub product: String,

    /// Sum of units sold (missing cells count as 0)
    pub total_units: f64,

    /// Sum of revenue (missing cells count as 0)
    pub total_revenue: f64,

    /// Sum of cost (missing cells count as 0)
    pub total_cost: f64,

    /// total_revenue / total_units, or 0 when no units were sold
    pub average_price: f64,

    /// (total_revenue - total_cost) / total_revenue × 100, or 0 when there is no revenue
    pub average_margin_pct: f64,
}

/// Period-over-period variation shown next to each metric card.
///
/// PLACEHOLDER: these figures are sampled, not computed from historical data.
/// No prior-period model exists, so they carry no information about the
/// dataset. See `providers::VariationProvider`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricVariation {
    /// Price variation in percent, sampled from [-20, 30)
    pub price_pct: f64,

    /// Margin variation in percent, sampled from [-5, 5)
    pub margin_pct: f64,

    /// Units variation in percent, sampled from [-10, 10)
    pub units_pct: f64,
}

/// One metric card as the UI displays it: all strings already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
}
