use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Column names the loader requires in every uploaded file.
pub const COL_BRANCH: &str = "Sucursal";
pub const COL_PRODUCT: &str = "Producto";
pub const COL_YEAR: &str = "Año";
pub const COL_MONTH: &str = "Mes";
pub const COL_UNITS: &str = "Unidades_vendidas";
pub const COL_REVENUE: &str = "Ingreso_total";
pub const COL_COST: &str = "Costo_total";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_BRANCH,
    COL_PRODUCT,
    COL_YEAR,
    COL_MONTH,
    COL_UNITS,
    COL_REVENUE,
    COL_COST,
];

/// A calendar month, stored as its first day.
///
/// Ordering is chronological, so a `BTreeMap<YearMonth, _>` iterates
/// oldest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Returns `None` when `month` is outside 1..=12 or the year is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Whole days from `origin` to this month's first day.
    pub fn days_since(&self, origin: YearMonth) -> i64 {
        (self.0 - origin.0).num_days()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

/// One row of the uploaded sales table.
///
/// Numeric fields are `None` when the cell could not be read as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Branch identifier (`Sucursal`)
    pub branch: String,

    /// Product name (`Producto`)
    pub product: String,

    /// Year and month of the sale (`Año`, `Mes`)
    pub period: YearMonth,

    /// Units sold (`Unidades_vendidas`)
    pub units_sold: Option<f64>,

    /// Total revenue (`Ingreso_total`)
    pub revenue: Option<f64>,

    /// Total cost (`Costo_total`)
    pub cost: Option<f64>,
}

impl SalesRecord {
    pub fn year(&self) -> i32 {
        self.period.year()
    }

    pub fn month(&self) -> u32 {
        self.period.month()
    }
}

/// A loaded sales table: records in file order plus column metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Header names as read from the file (trimmed), including extra columns.
    pub columns: Vec<String>,

    /// Parsed rows, in file order.
    pub records: Vec<SalesRecord>,

    /// Number of numeric cells that could not be parsed and became missing.
    pub coerced_cells: usize,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct branch identifiers in ascending lexical order.
    pub fn branches(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.branch.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn has_branch(&self, branch: &str) -> bool {
        self.records.iter().any(|r| r.branch == branch)
    }
}
