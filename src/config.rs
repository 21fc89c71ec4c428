//! Runtime settings
//!
//! Each setting comes from the command line if given, then the environment,
//! then a built-in default.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::model::{DEFAULT_DUE_SOON_DAYS, MAX_DUE_SOON_DAYS};

// Environment variable names
pub const ENV_DATA_FILE: &str = "LIFEBOOK_DATA_FILE";
pub const ENV_LOG_LEVEL: &str = "LIFEBOOK_LOG";
pub const ENV_DUE_SOON_DAYS: &str = "LIFEBOOK_DUE_SOON_DAYS";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_level: String,
    pub due_soon_days: i64,
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub due_soon_days: Option<i64>,
}

impl Config {
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    /// Like [`Config::load`] with an injectable environment lookup.
    pub fn resolve(overrides: Overrides, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_file = match overrides.data_file.or_else(|| lookup(ENV_DATA_FILE).map(PathBuf::from)) {
            Some(path) => path,
            None => default_data_file()?,
        };

        let log_level = overrides
            .log_level
            .or_else(|| lookup(ENV_LOG_LEVEL))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let due_soon_days = match overrides.due_soon_days {
            Some(days) => days,
            None => match lookup(ENV_DUE_SOON_DAYS) {
                Some(raw) => raw
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("{} must be a whole number of days, got '{}'", ENV_DUE_SOON_DAYS, raw))?,
                None => DEFAULT_DUE_SOON_DAYS,
            },
        };
        if due_soon_days < 0 {
            return Err(anyhow!("due-soon window cannot be negative ({} days)", due_soon_days));
        }
        if due_soon_days > MAX_DUE_SOON_DAYS {
            return Err(anyhow!(
                "due-soon window cannot exceed {} days ({} days)",
                MAX_DUE_SOON_DAYS,
                due_soon_days
            ));
        }

        Ok(Self {
            data_file,
            log_level,
            due_soon_days,
        })
    }
}

fn default_data_file() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| anyhow!("Could not find config directory"))?;
    Ok(config_dir.join("lifebook").join("lifebook.json"))
}
