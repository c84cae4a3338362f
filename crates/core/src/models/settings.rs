use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Static identity shown in the sidebar. Not derived from any input data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeProfile {
    /// Employee file number (legajo)
    pub employee_id: String,

    pub name: String,

    /// Cohort / group label (comisión)
    pub cohort: String,
}

impl Default for EmployeeProfile {
    fn default() -> Self {
        Self {
            employee_id: "58736".to_string(),
            name: "Lucas David Juarez Hindi".to_string(),
            cohort: "C5".to_string(),
        }
    }
}

/// Dashboard configuration, passed in once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Browser/page title
    pub page_title: String,

    pub employee: EmployeeProfile,

    /// Prefix for monetary values on metric cards
    pub currency_symbol: String,

    /// Label of the "no filter" entry in the branch selector
    pub all_branches_label: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            page_title: "Dashboard de Ventas".to_string(),
            employee: EmployeeProfile::default(),
            currency_symbol: "$".to_string(),
            all_branches_label: "Todas".to_string(),
        }
    }
}

impl DashboardSettings {
    /// Parse settings from JSON. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.all_branches_label.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "all_branches_label must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
