//! Mode dispatch
//!
//! Startup is a two-state machine: the environment is classified once,
//! then control goes either to the simulator (with a freshly built mock
//! context) or to the production integration surface. The decision
//! ([`Bootstrap::plan`]) is kept apart from the rendering side effect
//! ([`launch`]) so it can be tested on its own.

use chrono::{DateTime, Utc};

use crate::config::BootstrapConfig;
use crate::environment::{EnvironmentContext, EnvironmentDetector, EnvironmentProbe, Mode};
use crate::error::{AppError, Result};
use crate::mock_context::MockContextBuilder;
use crate::render::{IntegrationSurface, SimulationRenderer, SimulatorProps};
use crate::validate::validate;

/// Terminal state chosen at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Hand the simulated context to the simulator
    Standalone(SimulatorProps),
    /// Hand control to the production surface
    Hosted,
}

impl Dispatch {
    pub fn mode(&self) -> Mode {
        match self {
            Dispatch::Standalone(_) => Mode::Standalone,
            Dispatch::Hosted => Mode::Hosted,
        }
    }
}

/// Detector and mock builder wired from one configuration
#[derive(Debug, Clone, Default)]
pub struct Bootstrap {
    detector: EnvironmentDetector,
    builder: MockContextBuilder,
}

impl Bootstrap {
    pub fn new(config: &BootstrapConfig) -> Self {
        Self {
            detector: EnvironmentDetector::from_config(config),
            builder: MockContextBuilder::from_config(config),
        }
    }

    pub fn detector(&self) -> &EnvironmentDetector {
        &self.detector
    }

    /// Decide what to render, without rendering it
    pub fn plan(&self, env: Option<&EnvironmentContext>, now: DateTime<Utc>) -> Dispatch {
        match self.detector.detect(env) {
            Mode::Hosted => Dispatch::Hosted,
            Mode::Standalone => {
                let builder = match env {
                    Some(env) => self.builder.clone().with_ui_url(env.current_address.clone()),
                    None => self.builder.clone(),
                };
                let context = builder.build(now);
                if let Err(e) = validate(&context, now) {
                    tracing::warn!("Simulation context failed validation: {e}");
                }
                Dispatch::Standalone(SimulatorProps {
                    id: builder.simulation_id().clone(),
                    context,
                })
            }
        }
    }

    /// Probe the environment, decide, and render. Runs once per page load.
    pub fn run<P, S, I>(
        &self,
        probe: &P,
        now: DateTime<Utc>,
        simulator: &mut S,
        surface: &mut I,
    ) -> Result<Mode>
    where
        P: EnvironmentProbe + ?Sized,
        S: SimulationRenderer + ?Sized,
        I: IntegrationSurface + ?Sized,
    {
        let env = probe.probe();
        let dispatch = self.plan(env.as_ref(), now);
        launch(dispatch, simulator, surface)
    }
}

/// Hand control to the renderer matching the dispatch
///
/// Renderer failures are passed through as [`AppError::RenderFailed`].
pub fn launch<S, I>(dispatch: Dispatch, simulator: &mut S, surface: &mut I) -> Result<Mode>
where
    S: SimulationRenderer + ?Sized,
    I: IntegrationSurface + ?Sized,
{
    let mode = dispatch.mode();
    tracing::info!("Starting integration UI in {mode} mode");

    match dispatch {
        Dispatch::Standalone(props) => {
            tracing::debug!("Rendering simulator for simulation {}", props.id);
            simulator
                .render_simulation(props)
                .map_err(AppError::RenderFailed)?;
        }
        Dispatch::Hosted => {
            surface
                .render_integration()
                .map_err(AppError::RenderFailed)?;
        }
    }

    Ok(mode)
}
