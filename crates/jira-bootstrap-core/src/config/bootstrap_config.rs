use serde::{Deserialize, Serialize};
use std::path::Path;

use super::defaults;
use crate::error::{AppError, Result};

/// Bootstrap configuration
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Address substrings that mark a local development host
    pub local_markers: Vec<String>,

    /// Identifier handed to the simulator renderer
    pub simulation_id: String,

    /// Deployment environment tag the mock session targets
    pub deployment_env: String,

    /// UI entry URL used when the page address is unknown
    pub default_ui_url: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            local_markers: vec![defaults::DEFAULT_LOCAL_MARKER.to_string()],
            simulation_id: defaults::DEFAULT_SIMULATION_ID.to_string(),
            deployment_env: defaults::DEFAULT_DEPLOYMENT_ENV.to_string(),
            default_ui_url: defaults::DEFAULT_UI_URL.to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config: {e}")))?;
        config.check()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Self::from_json(&json)
    }

    pub fn with_local_markers(mut self, markers: Vec<String>) -> Self {
        self.local_markers = markers;
        self
    }

    pub fn with_simulation_id(mut self, id: impl Into<String>) -> Self {
        self.simulation_id = id.into();
        self
    }

    pub fn with_deployment_env(mut self, env: impl Into<String>) -> Self {
        self.deployment_env = env.into();
        self
    }

    pub fn with_default_ui_url(mut self, url: impl Into<String>) -> Self {
        self.default_ui_url = url.into();
        self
    }

    fn check(&self) -> Result<()> {
        if self.simulation_id.is_empty() {
            return Err(AppError::ConfigError(
                "simulation_id must not be empty".to_string(),
            ));
        }
        let env_is_label = !self.deployment_env.is_empty()
            && self
                .deployment_env
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !env_is_label {
            return Err(AppError::ConfigError(format!(
                "deployment_env must be a DNS label, got '{}'",
                self.deployment_env
            )));
        }
        if self.local_markers.iter().any(|m| m.is_empty()) {
            return Err(AppError::ConfigError(
                "local_markers must not contain empty strings".to_string(),
            ));
        }
        Ok(())
    }
}
