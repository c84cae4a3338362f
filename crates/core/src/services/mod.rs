pub mod chart_service;
pub mod filter_service;
pub mod format;
pub mod loader_service;
pub mod metrics_service;
pub mod trend_service;
