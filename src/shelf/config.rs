use crate::error::{Result, ShelfError};
use crate::store::fs::{write_atomic, DEFAULT_DATA_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILE: &str = "books.json";
const DEFAULT_CHART_WIDTH: usize = 40;

/// Widest bar `shelf stats` will draw.
pub const MAX_CHART_WIDTH: usize = 200;

pub const KEYS: [&str; 3] = ["data-file", "export-file", "chart-width"];

/// Configuration for shelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// File name of the book store inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Default file name for `shelf export`
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Widest bar drawn by `shelf stats`
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_chart_width() -> usize {
    DEFAULT_CHART_WIDTH
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_file: default_export_file(),
            chart_width: default_chart_width(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            ShelfError::Config(format!("cannot read {}: {}", config_path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ShelfError::Config(format!("{}: {}", config_path.display(), e)))?;
        config
            .check()
            .map_err(|e| ShelfError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        write_atomic(&config_path, &content)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "export-file" => Some(self.export_file.clone()),
            "chart-width" => Some(self.chart_width.to_string()),
            _ => None,
        }
    }

    /// Every key with its current value, in `KEYS` order.
    pub fn entries(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => self.data_file = file_name(value)?,
            "export-file" => self.export_file = file_name(value)?,
            "chart-width" => {
                self.chart_width = value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| chart_width_in_range(*n))
                    .ok_or_else(|| chart_width_error(value))?;
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    /// Applies the `set` rules to values read from a hand-edited file.
    fn check(&self) -> std::result::Result<(), String> {
        for (key, value) in [("data-file", &self.data_file), ("export-file", &self.export_file)] {
            if file_name(value)? != *value {
                return Err(format!("{} has surrounding whitespace: {:?}", key, value));
            }
        }
        if !chart_width_in_range(self.chart_width) {
            return Err(chart_width_error(&self.chart_width.to_string()));
        }
        Ok(())
    }
}

fn chart_width_in_range(width: usize) -> bool {
    (1..=MAX_CHART_WIDTH).contains(&width)
}

fn chart_width_error(value: &str) -> String {
    format!("chart-width must be between 1 and {}: {}", MAX_CHART_WIDTH, value)
}

fn file_name(value: &str) -> std::result::Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("File name cannot be empty".to_string());
    }
    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(format!("Expected a file name, not a path: {}", trimmed));
    }
    if trimmed == "." || trimmed == ".." {
        return Err(format!("Not a file name: {}", trimmed));
    }
    if trimmed.eq_ignore_ascii_case(CONFIG_FILENAME) {
        return Err(format!("{} holds the settings themselves", CONFIG_FILENAME));
    }
    Ok(trimmed.to_string())
}
