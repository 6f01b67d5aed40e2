use crate::error::ConfigError;
use crate::loader::DEFAULT_SEPARATOR;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    #[serde(default = "default_separator")]
    pub separator: char,
}

fn default_separator() -> char {
    char::from(DEFAULT_SEPARATOR)
}

impl AppConfig {
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            separator: default_separator(),
        }
    }

    /// The separator as the single byte the loader splits on.
    pub fn separator_byte(&self) -> Result<u8, ConfigError> {
        u8::try_from(self.separator).map_err(|_| ConfigError::InvalidSeparator(self.separator))
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.separator_byte()?;
    Ok(config)
}
