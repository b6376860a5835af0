//! Demo configuration

use std::path::Path;

use entity_core::EntityConfig;
use serde::{Deserialize, Serialize};

use crate::error::{DemoError, DemoResult};

/// Demo configuration, loaded from a TOML file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Configuration applied to every container the demo builds
    pub entity: EntityConfig,

    /// Starting value for the walkthrough
    pub start: Option<i64>,
}

impl DemoConfig {
    /// Load configuration from file, falling back to defaults when absent
    pub fn load(path: Option<&str>) -> DemoResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !Path::new(path).exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> DemoResult<Self> {
        toml::from_str(contents).map_err(|e| DemoError::Config(e.to_string()))
    }
}
