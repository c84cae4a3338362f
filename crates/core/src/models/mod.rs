pub mod chart;
pub mod filter;
pub mod metrics;
pub mod record;
pub mod report;
pub mod settings;
pub mod trend;
