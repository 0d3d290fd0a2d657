//! Environment Detection
//!
//! Classifies the page the integration UI was loaded into as either
//! hosted (embedded by the Pinpoint application, which supplies a live
//! session) or standalone (a top-level window on a local development host).
//!
//! The ambient browser state is passed in as an [`EnvironmentContext`]
//! value, so detection is a pure function of its input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::BootstrapConfig;

/// Execution mode chosen at startup
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Embedded in the host application
    Hosted,
    /// Top-level on a local development host; needs a simulated context
    Standalone,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Hosted => write!(f, "hosted"),
            Mode::Standalone => write!(f, "standalone"),
        }
    }
}

/// Snapshot of the browsing context the UI is running in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentContext {
    /// True when the window is its own parent (not inside a frame)
    pub is_top_level: bool,
    /// Full address of the current page
    pub current_address: String,
}

impl EnvironmentContext {
    pub fn new(is_top_level: bool, current_address: impl Into<String>) -> Self {
        Self {
            is_top_level,
            current_address: current_address.into(),
        }
    }

    /// A top-level window at `address`
    pub fn top_level(address: impl Into<String>) -> Self {
        Self::new(true, address)
    }

    /// A page embedded in a parent frame at `address`
    pub fn embedded(address: impl Into<String>) -> Self {
        Self::new(false, address)
    }
}

/// Source of the ambient environment
///
/// Returns `None` when frame or address introspection is unavailable.
pub trait EnvironmentProbe {
    fn probe(&self) -> Option<EnvironmentContext>;
}

impl EnvironmentProbe for EnvironmentContext {
    fn probe(&self) -> Option<EnvironmentContext> {
        Some(self.clone())
    }
}

/// Probe for contexts where nothing can be introspected
#[derive(Debug, Default, Clone, Copy)]
pub struct Unavailable;

impl EnvironmentProbe for Unavailable {
    fn probe(&self) -> Option<EnvironmentContext> {
        None
    }
}

/// Decides between hosted and standalone mode
#[derive(Debug, Clone)]
pub struct EnvironmentDetector {
    local_markers: Vec<String>,
}

impl Default for EnvironmentDetector {
    fn default() -> Self {
        Self::from_config(&BootstrapConfig::default())
    }
}

impl EnvironmentDetector {
    pub fn new(local_markers: Vec<String>) -> Self {
        Self { local_markers }
    }

    pub fn from_config(config: &BootstrapConfig) -> Self {
        Self::new(config.local_markers.clone())
    }

    /// Whether `address` points at a local development host
    pub fn is_local_address(&self, address: &str) -> bool {
        self.local_markers
            .iter()
            .any(|marker| address.contains(marker.as_str()))
    }

    /// Classify an environment snapshot
    ///
    /// Standalone only when the page is top-level AND its address carries a
    /// local marker. A missing snapshot is treated as hosted.
    pub fn detect(&self, env: Option<&EnvironmentContext>) -> Mode {
        let Some(env) = env else {
            tracing::warn!("Environment introspection unavailable, assuming hosted mode");
            return Mode::Hosted;
        };

        tracing::debug!(
            "Detecting mode: top_level={} address={}",
            env.is_top_level,
            env.current_address
        );

        if env.is_top_level && self.is_local_address(&env.current_address) {
            Mode::Standalone
        } else {
            Mode::Hosted
        }
    }

    /// Probe the environment once and classify it
    pub fn detect_with<P: EnvironmentProbe + ?Sized>(&self, probe: &P) -> Mode {
        self.detect(probe.probe().as_ref())
    }
}
