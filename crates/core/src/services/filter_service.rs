use crate::models::filter::{BranchFilter, FilteredView};
use crate::models::record::Dataset;

/// Branch selection over a loaded dataset.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Selector entries: `All` first, then every distinct branch ascending.
    pub fn branch_options(&self, dataset: &Dataset) -> Vec<BranchFilter> {
        std::iter::once(BranchFilter::All)
            .chain(
                dataset
                    .branches()
                    .into_iter()
                    .map(|b| BranchFilter::Branch(b.to_string())),
            )
            .collect()
    }

    /// Project the dataset onto `filter`. An unknown branch yields an empty view.
    pub fn apply<'a>(&self, dataset: &'a Dataset, filter: &BranchFilter) -> FilteredView<'a> {
        FilteredView {
            filter: filter.clone(),
            records: dataset.records.iter().filter(|r| filter.matches(r)).collect(),
        }
    }

    /// Page heading for a selection.
    pub fn view_title(&self, filter: &BranchFilter) -> String {
        match filter {
            BranchFilter::All => "Datos de Todas las Sucursales".to_string(),
            BranchFilter::Branch(name) => format!("Datos de la Sucursal: {name}"),
        }
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
