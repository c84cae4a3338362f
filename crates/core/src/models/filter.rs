use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::record::SalesRecord;

/// Branch selection for the current view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchFilter {
    /// No filtering: every branch is included.
    #[default]
    All,
    /// Only rows whose branch equals this value.
    Branch(String),
}

impl BranchFilter {
    /// Label shown in the branch selector. `all_label` names the sentinel.
    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            BranchFilter::All => all_label,
            BranchFilter::Branch(name) => name,
        }
    }

    /// Inverse of [`label`](Self::label).
    pub fn from_label(label: &str, all_label: &str) -> Self {
        if label == all_label {
            BranchFilter::All
        } else {
            BranchFilter::Branch(label.to_string())
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        match self {
            BranchFilter::All => true,
            BranchFilter::Branch(name) => record.branch == *name,
        }
    }
}

/// Read-only projection of a dataset for one branch selection.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    pub filter: BranchFilter,
    pub records: Vec<&'a SalesRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct products in the order they first appear in the view.
    pub fn products(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.product.as_str())
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Rows of a single product, in view order.
    pub fn rows_for(&self, product: &str) -> Vec<&'a SalesRecord> {
        self.records
            .iter()
            .copied()
            .filter(|r| r.product == product)
            .collect()
    }
}
