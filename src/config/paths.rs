//! Path management for the invoice helper
//!
//! The only file the helper ever reads is an optional settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `MECHANIC_INVOICE_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/mechanic-invoice` or `~/.config/mechanic-invoice`
//! 3. Windows: `%APPDATA%\mechanic-invoice`

use std::path::{Path, PathBuf};

use crate::error::InvoiceError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "MECHANIC_INVOICE_DIR";

const APP_DIR_NAME: &str = "mechanic-invoice";

/// Manages the paths used by the invoice helper
#[derive(Debug, Clone)]
pub struct InvoicePaths {
    base_dir: PathBuf,
}

impl InvoicePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, InvoiceError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create InvoicePaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), InvoiceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| InvoiceError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, InvoiceError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
    }
    let home = std::env::var("HOME")
        .map_err(|_| InvoiceError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, InvoiceError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| InvoiceError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
