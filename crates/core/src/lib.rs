pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::sync::Arc;

use models::{
    filter::BranchFilter,
    metrics::ProductMetrics,
    record::Dataset,
    report::{DashboardReport, ProductSection, Sidebar},
    settings::DashboardSettings,
    trend::SalesTrend,
};
use providers::{RandomVariationProvider, VariationProvider};
use services::{
    chart_service::ChartService, filter_service::FilterService, format,
    loader_service::DataLoader, metrics_service::MetricsService, trend_service::TrendService,
};
use storage::cache::LoadCache;

use errors::{CoreError, LoadError};

/// Main entry point for the sales dashboard core.
///
/// Holds one session's state (settings, upload cache, current dataset and
/// branch selection) and every service needed to turn it into a report.
/// Each user action is one synchronous call; nothing runs in the background.
#[must_use]
pub struct SalesDashboard {
    settings: DashboardSettings,
    loader: DataLoader,
    cache: LoadCache,
    dataset: Option<Arc<Dataset>>,
    selected: BranchFilter,
    filter_service: FilterService,
    metrics_service: MetricsService,
    trend_service: TrendService,
    chart_service: ChartService,
    variation_provider: Box<dyn VariationProvider>,
}

impl std::fmt::Debug for SalesDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesDashboard")
            .field("settings", &self.settings)
            .field("records", &self.dataset.as_ref().map(|d| d.len()))
            .field("selected", &self.selected)
            .field("cached_uploads", &self.cache.len())
            .field("variation_provider", &self.variation_provider.name())
            .finish()
    }
}

impl SalesDashboard {
    /// Dashboard with the given settings and random placeholder variations.
    pub fn new(settings: DashboardSettings) -> Result<Self, CoreError> {
        Self::with_variation_provider(settings, Box::new(RandomVariationProvider::new()))
    }

    /// Dashboard with default settings.
    pub fn with_defaults() -> Self {
        Self::build(
            DashboardSettings::default(),
            Box::new(RandomVariationProvider::new()),
        )
    }

    /// Dashboard with a custom source of variation figures.
    pub fn with_variation_provider(
        settings: DashboardSettings,
        variation_provider: Box<dyn VariationProvider>,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(settings, variation_provider))
    }

    fn build(settings: DashboardSettings, variation_provider: Box<dyn VariationProvider>) -> Self {
        Self {
            settings,
            loader: DataLoader::new(),
            cache: LoadCache::new(),
            dataset: None,
            selected: BranchFilter::All,
            filter_service: FilterService::new(),
            metrics_service: MetricsService::new(),
            trend_service: TrendService::new(),
            chart_service: ChartService::new(),
            variation_provider,
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Load an uploaded CSV from memory, replacing the current dataset.
    ///
    /// Identical bytes are parsed once per session. On failure the previous
    /// dataset is dropped so nothing is reported for a broken upload.
    /// A selected branch that does not exist in the new data resets to "all".
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<Arc<Dataset>, CoreError> {
        let loader = &self.loader;
        match self.cache.get_or_load(bytes, |b| loader.load_from_bytes(b)) {
            Ok(dataset) => {
                if let BranchFilter::Branch(name) = &self.selected {
                    if !dataset.has_branch(name) {
                        tracing::debug!("Branch {name} not in new dataset, resetting selection");
                        self.selected = BranchFilter::All;
                    }
                }
                self.dataset = Some(Arc::clone(&dataset));
                Ok(dataset)
            }
            Err(e) => {
                tracing::warn!("{}", e.user_message());
                self.dataset = None;
                Err(e.into())
            }
        }
    }

    /// Load a CSV file from disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<Arc<Dataset>, CoreError> {
        match std::fs::read(path.as_ref()) {
            Ok(bytes) => self.load_bytes(&bytes),
            Err(e) => {
                let err = LoadError::from(e);
                tracing::warn!("{}", err.user_message());
                self.dataset = None;
                Err(err.into())
            }
        }
    }

    /// The currently loaded dataset, if any.
    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_deref()
    }

    #[must_use]
    pub fn cache(&self) -> &LoadCache {
        &self.cache
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    // ── Branch selection ────────────────────────────────────────────

    /// Selector entries: "all" first, then branches ascending.
    /// Empty when nothing is loaded.
    #[must_use]
    pub fn branch_options(&self) -> Vec<BranchFilter> {
        match &self.dataset {
            Some(dataset) => self.filter_service.branch_options(dataset),
            None => Vec::new(),
        }
    }

    /// Selector entries as display labels.
    #[must_use]
    pub fn branch_option_labels(&self) -> Vec<String> {
        let all_label = &self.settings.all_branches_label;
        self.branch_options()
            .iter()
            .map(|f| f.label(all_label).to_string())
            .collect()
    }

    /// Change the selection. A branch absent from the data is accepted and
    /// simply produces an empty view.
    pub fn select_branch(&mut self, filter: BranchFilter) {
        tracing::debug!("Selected branch filter: {:?}", filter);
        self.selected = filter;
    }

    /// Change the selection by its selector label.
    pub fn select_branch_label(&mut self, label: &str) {
        let filter = BranchFilter::from_label(label, &self.settings.all_branches_label);
        self.select_branch(filter);
    }

    #[must_use]
    pub fn selected_branch(&self) -> &BranchFilter {
        &self.selected
    }

    /// Page heading for the current selection.
    #[must_use]
    pub fn view_title(&self) -> String {
        self.filter_service.view_title(&self.selected)
    }

    // ── Sidebar ─────────────────────────────────────────────────────

    #[must_use]
    pub fn sidebar(&self) -> Sidebar {
        let employee = &self.settings.employee;
        Sidebar {
            title: "Datos del Empleado".to_string(),
            rows: vec![
                ("Legajo".to_string(), employee.employee_id.clone()),
                ("Nombre".to_string(), employee.name.clone()),
                ("Comisión".to_string(), employee.cohort.clone()),
            ],
        }
    }

    // ── Metrics & trends ────────────────────────────────────────────

    fn current_dataset(&self) -> Result<Arc<Dataset>, CoreError> {
        self.dataset.clone().ok_or(CoreError::NoDataset)
    }

    /// Metrics for every product in the current view, in first-seen order.
    pub fn product_metrics(&self) -> Result<Vec<ProductMetrics>, CoreError> {
        let dataset = self.current_dataset()?;
        let view = self.filter_service.apply(&dataset, &self.selected);
        Ok(self.metrics_service.compute_all(&view))
    }

    /// Monthly series and trend line for every product in the current view.
    pub fn product_trends(&self) -> Result<Vec<SalesTrend>, CoreError> {
        let dataset = self.current_dataset()?;
        let view = self.filter_service.apply(&dataset, &self.selected);
        Ok(view
            .products()
            .into_iter()
            .map(|product| self.trend_service.estimate(product, &view.rows_for(product)))
            .collect())
    }

    /// Build the full report for the current view.
    ///
    /// Variation figures are drawn from the variation provider on every call.
    pub fn report(&mut self) -> Result<DashboardReport, CoreError> {
        let dataset = self.current_dataset()?;
        let view = self.filter_service.apply(&dataset, &self.selected);

        let mut sections = Vec::new();
        for product in view.products() {
            let rows = view.rows_for(product);
            let metrics = self.metrics_service.compute(product, &rows);
            let variation = self.variation_provider.variation_for(&metrics);
            let cards = format::metric_cards(&metrics, &variation, &self.settings.currency_symbol);
            let trend = self.trend_service.estimate(product, &rows);
            let chart = self.chart_service.sales_chart(&trend);

            sections.push(ProductSection {
                product: product.to_string(),
                metrics,
                variation,
                cards,
                trend,
                chart,
            });
        }

        tracing::debug!(
            "Built report for {:?}: {} rows, {} products",
            self.selected,
            view.len(),
            sections.len()
        );

        Ok(DashboardReport {
            page_title: self.settings.page_title.clone(),
            title: self.view_title(),
            branch_options: self.branch_option_labels(),
            selected_branch: self
                .selected
                .label(&self.settings.all_branches_label)
                .to_string(),
            sections,
        })
    }

    /// The report serialized as JSON for a web frontend.
    pub fn report_json(&mut self) -> Result<String, CoreError> {
        let report = self.report()?;
        Ok(serde_json::to_string(&report)?)
    }
}

impl Default for SalesDashboard {
    fn default() -> Self {
        Self::with_defaults()
    }
}
