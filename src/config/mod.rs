use anyhow::{Context, Result};
use std::path::PathBuf;

const LOG_ENV: &str = "BUDGETADVISOR_LOG";
const EXPORT_DIR_ENV: &str = "BUDGETADVISOR_EXPORT_DIR";
const DEFAULT_LOG_FILTER: &str = "info";

/// Process-wide settings. Loaded once in `main`; evaluation never sees it.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) log_filter: String,
    pub(crate) data_dir: PathBuf,
    pub(crate) export_dir: PathBuf,
}

impl Config {
    /// Read `.env` (if any), then the environment, then platform directories.
    pub(crate) fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e).context("Failed to read .env file"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_filter = lookup(LOG_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let proj_dirs = directories::ProjectDirs::from("com", "budgetadvisor", "BudgetAdvisor")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let data_dir = proj_dirs.data_dir().to_path_buf();

        let export_dir = lookup(EXPORT_DIR_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(|v| crate::export::shellexpand(v.trim()))
            .or_else(|| directories::UserDirs::new().map(|d| d.home_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            log_filter,
            data_dir,
            export_dir,
        })
    }

    /// Create the data directory and return the log file path inside it.
    pub(crate) fn log_path(&self) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                self.data_dir.display()
            )
        })?;
        Ok(self.data_dir.join("budgetadvisor.log"))
    }
}

#[cfg(test)]
mod tests;
