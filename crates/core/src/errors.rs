use thiserror::Error;

/// Failure to turn an uploaded file into a `Dataset`.
///
/// The presentation layer surfaces `user_message()` and stops processing
/// that upload; nothing downstream runs on a failed load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("CSV parse error: {0}")]
    Csv(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid value {value:?} in column {column} at line {line}")]
    InvalidField {
        line: u64,
        column: String,
        value: String,
    },
}

impl LoadError {
    /// Message shown to the user when an upload cannot be loaded.
    pub fn user_message(&self) -> String {
        format!("Error al cargar los datos: {self}")
    }
}

/// Unified error type for the dashboard core.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Loading ─────────────────────────────────────────────────────
    #[error(transparent)]
    Load(#[from] LoadError),

    // ── Session ─────────────────────────────────────────────────────
    #[error("No dataset loaded — upload a CSV file first")]
    NoDataset,

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ── Output ──────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::FileIO(e.to_string())
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        match e.kind() {
            csv::ErrorKind::Io(io) => LoadError::FileIO(io.to_string()),
            _ => LoadError::Csv(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
