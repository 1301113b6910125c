//! Optional per-plan configuration (`stead.toml` in the plan directory).
//!
//! Missing file means defaults; an unparseable file is logged and also
//! falls back to defaults, so configuration problems never block a budget.

use crate::domain::constants::{
    CONFIG_FILE, DEFAULT_CURRENCY, DEFAULT_EXPORT_FILENAME, DEFAULT_HIGH_COST_THRESHOLD,
};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub high_cost_threshold: f64,
    pub export_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            high_cost_threshold: DEFAULT_HIGH_COST_THRESHOLD,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

pub fn load_config(plan_dir: &Path) -> Config {
    let path = plan_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Config::default();
    }
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), %err, "config unreadable, using defaults");
            return Config::default();
        }
    };
    match toml::from_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), %err, "config malformed, using defaults");
            Config::default()
        }
    }
}
