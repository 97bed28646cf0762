use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spot_core::{ErrorInfo, SpotError};

use crate::layout::LayoutConfig;

/// YAML-configurable settings for generating and laying out decks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Treat any diagnostic as fatal instead of returning a flawed deck.
    #[serde(default)]
    pub strict: bool,
    /// Card and page geometry.
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl DeckConfig {
    /// Parses a configuration from YAML text and validates the layout section.
    pub fn from_yaml_str(text: &str) -> Result<Self, SpotError> {
        let config: DeckConfig = serde_yaml::from_str(text)
            .map_err(|err| SpotError::Serde(ErrorInfo::new("yaml-deserialize", err.to_string())))?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn from_path(path: &Path) -> Result<Self, SpotError> {
        let text = fs::read_to_string(path).map_err(|err| {
            SpotError::Io(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String, SpotError> {
        serde_yaml::to_string(self)
            .map_err(|err| SpotError::Serde(ErrorInfo::new("yaml-serialize", err.to_string())))
    }
}
