use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::chart::request::ChartKind;

// ---------------------------------------------------------------------------
// Persisted UI preferences
// ---------------------------------------------------------------------------

/// Small user preferences kept in `~/.tabplot.json`.
///
/// Loading never fails: a missing or unreadable file falls back to the
/// defaults so the app always starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the file dialog opens in.
    pub last_open_dir: Option<PathBuf>,
    /// Chart kind preselected at startup.
    pub default_chart: ChartKind,
    /// Row cap for the data-preview table.
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_open_dir: None,
            default_chart: ChartKind::Scatter,
            preview_rows: 100,
        }
    }
}

impl Config {
    fn path() -> Option<PathBuf> {
        #[allow(deprecated)]
        std::env::home_dir().map(|home| home.join(".tabplot.json"))
    }

    /// Load the config file, falling back to defaults on any failure.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("could not determine home directory, using default config");
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("could not parse {}: {e}", path.display());
                    Self::default()
                }
            },
            // Missing file is the normal first-run case.
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path().context("could not determine home directory")?;
        let text = serde_json::to_string_pretty(self).context("serializing config")?;
        std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            last_open_dir: Some(PathBuf::from("/tmp/data")),
            default_chart: ChartKind::Histogram,
            preview_rows: 25,
        };
        let text = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
