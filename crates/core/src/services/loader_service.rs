use std::io::Read;

use csv::StringRecord;

use crate::errors::LoadError;
use crate::models::record::{
    Dataset, SalesRecord, YearMonth, COL_BRANCH, COL_COST, COL_MONTH, COL_PRODUCT, COL_REVENUE,
    COL_UNITS, COL_YEAR,
};

/// Column positions of the required fields within a header row.
struct ColumnIndex {
    branch: usize,
    product: usize,
    year: usize,
    month: usize,
    units: usize,
    revenue: usize,
    cost: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            branch: find(COL_BRANCH)?,
            product: find(COL_PRODUCT)?,
            year: find(COL_YEAR)?,
            month: find(COL_MONTH)?,
            units: find(COL_UNITS)?,
            revenue: find(COL_REVENUE)?,
            cost: find(COL_COST)?,
        })
    }
}

/// Parses uploaded CSV tables into a [`Dataset`].
///
/// Bad or absent numeric cells become missing (`None`) instead of failing
/// the load. Only header names are trimmed; branch and product values are
/// kept exactly as written.
/// Year and month must be valid since they define the time axis.
#[derive(Debug, Clone, Default)]
pub struct DataLoader;

impl DataLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse an in-memory upload.
    pub fn load_from_bytes(&self, bytes: &[u8]) -> Result<Dataset, LoadError> {
        self.load_from_reader(bytes)
    }

    /// Parse a CSV file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(&self, path: impl AsRef<std::path::Path>) -> Result<Dataset, LoadError> {
        let file = std::fs::File::open(path.as_ref())?;
        self.load_from_reader(file)
    }

    /// Parse CSV text from any reader. Row order is preserved.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<Dataset, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let index = ColumnIndex::from_headers(&headers)?;

        let mut records = Vec::new();
        let mut coerced_cells = 0;

        for result in csv_reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            if row.len() > headers.len() {
                return Err(LoadError::Csv(format!(
                    "line {line}: found record with {} fields, but the header has {} fields",
                    row.len(),
                    headers.len()
                )));
            }
            // Short rows read their absent trailing cells as empty.
            let cell = |i: usize| row.get(i).unwrap_or("");

            let period = parse_period(cell(index.year), cell(index.month), line)?;

            let mut numeric = |i: usize| {
                let value = coerce_numeric(cell(i));
                if value.is_none() {
                    coerced_cells += 1;
                }
                value
            };
            let units_sold = numeric(index.units);
            let revenue = numeric(index.revenue);
            let cost = numeric(index.cost);

            records.push(SalesRecord {
                branch: cell(index.branch).to_string(),
                product: cell(index.product).to_string(),
                period,
                units_sold,
                revenue,
                cost,
            });
        }

        if coerced_cells > 0 {
            tracing::debug!(
                "{} numeric cells could not be parsed and were treated as missing",
                coerced_cells
            );
        }
        tracing::info!(
            "Loaded {} sales records ({} columns, {} coerced cells)",
            records.len(),
            headers.len(),
            coerced_cells
        );

        Ok(Dataset {
            columns: headers.iter().map(str::to_string).collect(),
            records,
            coerced_cells,
        })
    }
}

/// Read a cell as a finite number, or `None` if it is empty, text, NaN or infinite.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_period(year: &str, month: &str, line: u64) -> Result<YearMonth, LoadError> {
    let invalid = |column: &str, value: &str| LoadError::InvalidField {
        line,
        column: column.to_string(),
        value: value.to_string(),
    };

    let (year, month) = (year.trim(), month.trim());
    let y = year.parse::<i32>().map_err(|_| invalid(COL_YEAR, year))?;
    let m = month
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| invalid(COL_MONTH, month))?;

    YearMonth::new(y, m).ok_or_else(|| invalid(COL_YEAR, year))
}
