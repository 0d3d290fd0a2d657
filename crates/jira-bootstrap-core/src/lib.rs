//! Jira Bootstrap Core Library
//!
//! Startup logic for the Jira integration UI. The UI runs either embedded
//! in the Pinpoint application, which supplies a live session, or as a
//! standalone page during local development, where a complete mock
//! context is synthesized for the installer simulator.
//!
//! This crate is independent of any browser binding; rendering is reached
//! through the traits in [`render`].
//!
//! # Modules
//!
//! - [`environment`] - Hosted / standalone classification
//! - [`model`] - Integration, processing, agent and session types
//! - [`mock_context`] - Standalone mock context builder
//! - [`simulation_id`] - Simulation identifiers
//! - [`validate`] - Simulation context invariants
//! - [`render`] - Renderer traits
//! - [`dispatch`] - Startup dispatch
//! - [`config`] - Configuration
//! - [`error`] - Error types

pub mod config;
pub mod dispatch;
pub mod environment;
pub mod error;
pub mod mock_context;
pub mod model;
pub mod render;
pub mod simulation_id;
pub mod validate;

pub use config::BootstrapConfig;
pub use dispatch::{launch, Bootstrap, Dispatch};
pub use environment::{EnvironmentContext, EnvironmentDetector, EnvironmentProbe, Mode, Unavailable};
pub use error::{AppError, Result};
pub use mock_context::MockContextBuilder;
pub use model::{
    AgentStatus, Customer, InstalledLocation, IntegrationDescriptor, ProcessingState,
    ProcessingStatus, Publisher, Session, SimulationContext, User,
};
pub use render::{IntegrationSurface, NoOpRenderer, SimulationRenderer, SimulatorProps, StdoutRenderer};
pub use simulation_id::SimulationId;
pub use validate::validate;
