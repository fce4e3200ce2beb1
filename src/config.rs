use crate::core_types::SpotNumber;
use crate::models::SpotCategory;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    /// "hourly", "daily", anything else never rotates
    pub rotation: String,
    /// Venues built at startup
    #[serde(default)]
    pub venues: Vec<VenueConfig>,
}

/// One configured venue
///
/// `kind` stays a string so an unknown kind is reported by the engine
/// (`UnknownVenueKind`) rather than as a YAML parse failure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VenueConfig {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub spots: BTreeMap<SpotCategory, SpotNumber>,
}

impl AppConfig {
    /// Load `config/<env>.yaml`
    pub fn load(env: &str) -> Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse config yaml")
    }
}
