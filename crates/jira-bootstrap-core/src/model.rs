//! Simulation Context Types
//!
//! Value types handed to the integration installer UI. Field names follow
//! the shapes the browser SDK expects, so a serialized
//! [`SimulationContext`] can be passed straight through to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who publishes the integration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Publisher {
    pub name: String,
    pub avatar: String,
    pub url: String,
}

/// Static metadata about the integration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntegrationDescriptor {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Always false for a simulated fresh install
    pub installed: bool,
    #[serde(rename = "refType")]
    pub ref_type: String,
    /// Icon URL
    pub icon: String,
    pub publisher: Publisher,
    /// Entry URL of the integration UI
    #[serde(rename = "uiURL")]
    pub ui_url: String,
}

/// Lifecycle state of the data sync
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessingState {
    #[default]
    Idle,
    Processing,
    Exporting,
}

impl fmt::Display for ProcessingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingState::Idle => write!(f, "idle"),
            ProcessingState::Processing => write!(f, "processing"),
            ProcessingState::Exporting => write!(f, "exporting"),
        }
    }
}

/// Where the integration's agent runs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum InstalledLocation {
    #[default]
    #[serde(rename = "CLOUD")]
    Cloud,
    #[serde(rename = "SELFMANAGED")]
    SelfManaged,
}

impl fmt::Display for InstalledLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstalledLocation::Cloud => write!(f, "cloud"),
            InstalledLocation::SelfManaged => write!(f, "self-managed"),
        }
    }
}

/// Point-in-time snapshot of the integration's processing lifecycle
///
/// Dates travel as epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStatus {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_date: DateTime<Utc>,
    pub processed: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_processed_date: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_export_requested_date: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_export_completed_date: DateTime<Utc>,
    pub state: ProcessingState,
    pub throttled: bool,
    /// Only meaningful while `throttled` is set
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub throttled_until_date: DateTime<Utc>,
    pub paused: bool,
    pub location: InstalledLocation,
}

impl ProcessingStatus {
    /// Throttle expiry, if throttling is actually in effect
    pub fn active_throttle(&self) -> Option<DateTime<Utc>> {
        self.throttled.then_some(self.throttled_until_date)
    }
}

/// Liveness of a self-managed agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentStatus {
    pub enrollment_id: String,
    pub running: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
}

/// Identity and routing for the simulated user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub customer: Customer,
    pub user: User,
    /// Deployment environment tag
    pub env: String,
    #[serde(rename = "graphqlUrl")]
    pub graphql_url: String,
    #[serde(rename = "authUrl")]
    pub auth_url: String,
}

/// Everything the simulator needs to render the installer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationContext {
    pub integration: IntegrationDescriptor,
    #[serde(rename = "processingDetail")]
    pub processing: ProcessingStatus,
    #[serde(rename = "selfManagedAgent")]
    pub agent: AgentStatus,
    pub session: Session,
}
