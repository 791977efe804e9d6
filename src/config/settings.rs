//! User settings for the invoice helper
//!
//! Settings are optional. Without a settings file the helper runs with the
//! built-in catalog and `$` formatting, and never writes anything to disk
//! unless `init` is run explicitly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::paths::InvoicePaths;
use crate::display::RenderOptions;
use crate::error::InvoiceError;
use crate::models::{Catalog, PriceRange};

/// Configured price range for a job type, in whole currency units
///
/// `{ "min": 0, "max": 0 }` means "no enforced range".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSetting {
    pub min: i64,
    pub max: i64,
}

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown on amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Invoice timestamp format (strftime format)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Mark items whose price was accepted outside the allowed range
    #[serde(default)]
    pub flag_overrides: bool,

    /// Price range overrides keyed by job type label
    #[serde(default)]
    pub job_ranges: BTreeMap<String, RangeSetting>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            timestamp_format: default_timestamp_format(),
            flag_overrides: false,
            job_ranges: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &InvoicePaths) -> Result<Self, InvoiceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| InvoiceError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| InvoiceError::Config(format!("Failed to parse settings file: {}", e)))?;

        tracing::debug!(
            path = %settings_path.display(),
            overrides = settings.job_ranges.len(),
            "loaded settings"
        );
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &InvoicePaths) -> Result<(), InvoiceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| InvoiceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| InvoiceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Build the job catalog, applying any configured range overrides
    pub fn catalog(&self) -> Result<Catalog, InvoiceError> {
        let mut catalog = Catalog::default();
        for (label, range) in &self.job_ranges {
            let range = PriceRange::new(range.min, range.max)?;
            catalog.set_range(label, range)?;
        }
        Ok(catalog)
    }

    /// Display options derived from these settings
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            currency_symbol: self.currency_symbol.clone(),
            timestamp_format: self.timestamp_format.clone(),
            flag_overrides: self.flag_overrides,
        }
    }
}
