//! Simulation identifiers
//!
//! An opaque token naming one simulated installer run. The simulator keys
//! its UI state on it, so the same id must be reused for the page's life.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::defaults::DEFAULT_SIMULATION_ID;

/// Opaque simulation identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationId(String);

impl SimulationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id: 8 bytes of OS randomness, hex encoded
    pub fn random() -> Self {
        let mut random_bytes = [0u8; 8];
        if let Err(e) = getrandom::getrandom(&mut random_bytes) {
            tracing::warn!("Failed to generate random simulation id: {e}");
            return Self::default();
        }
        Self(hex::encode(random_bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SimulationId {
    fn default() -> Self {
        Self(DEFAULT_SIMULATION_ID.to_string())
    }
}

impl fmt::Display for SimulationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
