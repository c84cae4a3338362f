use serde::{Deserialize, Serialize};

use super::chart::ChartSpec;
use super::metrics::{MetricCard, MetricVariation, ProductMetrics};
use super::trend::SalesTrend;

/// Everything the presentation layer needs to draw the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Browser/page title from the settings
    pub page_title: String,

    /// Page heading for the selected branch
    pub title: String,

    /// Branch selector entries, "all" label first
    pub branch_options: Vec<String>,

    /// Label of the selected entry
    pub selected_branch: String,

    /// One section per product, in first-seen order. Empty for an empty view.
    pub sections: Vec<ProductSection>,
}

/// Metrics, cards and chart for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSection {
    pub product: String,
    pub metrics: ProductMetrics,
    pub variation: MetricVariation,

    /// Price, margin and units cards, in that order
    pub cards: Vec<MetricCard>,

    pub trend: SalesTrend,
    pub chart: ChartSpec,
}

/// Sidebar content: a heading and (label, value) rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidebar {
    pub title: String,
    pub rows: Vec<(String, String)>,
}
