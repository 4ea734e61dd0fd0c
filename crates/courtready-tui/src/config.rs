//! Application configuration management.
//!
//! Holds where the setup workbook lives and which sheets to read. Stored at
//! `~/.config/courtready/config.json`; `COURTREADY_WORKBOOK` and a command
//! line path take precedence over the file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use courtready_core::import::SheetNames;

/// Application name used for config/log directory paths
const APP_NAME: &str = "courtready";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Workbook looked for in the working directory when nothing is configured
const DEFAULT_WORKBOOK: &str = "data.xlsx";

/// Environment override for the workbook path
pub const WORKBOOK_ENV: &str = "COURTREADY_WORKBOOK";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub workbook_path: Option<PathBuf>,
    pub kit_sheet: Option<String>,
    pub feeds_sheets: Option<Vec<String>>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn log_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME).join("logs"))
    }

    /// Workbook to import: command line, then environment, then config,
    /// then `data.xlsx` in the working directory.
    pub fn resolve_workbook(&self, cli_path: Option<PathBuf>, env_path: Option<String>) -> PathBuf {
        cli_path
            .or_else(|| env_path.filter(|p| !p.trim().is_empty()).map(PathBuf::from))
            .or_else(|| self.workbook_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKBOOK))
    }

    pub fn sheet_names(&self) -> SheetNames {
        let defaults = SheetNames::default();
        SheetNames {
            kit: self.kit_sheet.clone().unwrap_or(defaults.kit),
            feeds: self.feeds_sheets.clone().unwrap_or(defaults.feeds),
        }
    }
}
