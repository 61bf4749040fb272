//! User settings for Unity Ledger
//!
//! Holds the organisation's display preferences and the default report period.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::ReportPeriod;

/// User settings for Unity Ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Organisation name shown in report headers
    #[serde(default)]
    pub org_name: String,

    /// Label for the single implicit currency unit (display only)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Report lookback used when no period is given, in months
    #[serde(default = "default_report_months")]
    pub default_report_months: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "MMK".to_string()
}

fn default_report_months() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            org_name: String::new(),
            currency: default_currency(),
            default_report_months: default_report_months(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.default_period()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The configured default report period
    ///
    /// Fails with a configuration error if the stored month count is not one
    /// of the supported periods.
    pub fn default_period(&self) -> Result<ReportPeriod, LedgerError> {
        ReportPeriod::from_months(self.default_report_months)
    }
}
