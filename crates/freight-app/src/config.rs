//! Configuration management for freight-market
//!
//! Config stored at: ~/.config/freight-market/config.json

use freight_domain::service::GenerationLimits;
use freight_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fixed RNG seed for reproducible markets
    #[serde(default)]
    pub seed: Option<u64>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// TOML catalog replacing the built-in tables
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// CSV distance table replacing the built-in coordinate provider
    #[serde(default)]
    pub distance_table: Option<PathBuf>,

    /// Minimum offer count and attempt budgets
    #[serde(default)]
    pub limits: GenerationLimits,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            output_format: default_output_format(),
            catalog_path: None,
            distance_table: None,
            limits: GenerationLimits::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("freight-market");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

fn display_path(path: &Option<PathBuf>, fallback: &str) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Freight Market Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Seed:              {}",
            self.seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "(random)".to_string())
        )?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(f, "Catalog:           {}", display_path(&self.catalog_path, "(built-in)"))?;
        writeln!(f, "Distance table:    {}", display_path(&self.distance_table, "(built-in coordinates)"))?;
        writeln!(f, "Min offers/city:   {}", self.limits.min_offers_per_city)?;
        writeln!(f, "Backfill attempts: {}", self.limits.backfill_attempts)?;
        writeln!(f, "Boost attempts:    {}", self.limits.boost_attempts)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
