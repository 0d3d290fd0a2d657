//! Renderer traits
//!
//! The installer UI itself lives in the browser SDK. These traits are the
//! seam the bootstrap hands control across, so dispatch logic works with
//! the real SDK bindings, the CLI, or tests.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::SimulationContext;
use crate::simulation_id::SimulationId;

/// Payload handed to the simulated installer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulatorProps {
    pub id: SimulationId,
    #[serde(flatten)]
    pub context: SimulationContext,
}

/// Renders the simulated installer in standalone mode
pub trait SimulationRenderer {
    fn render_simulation(&mut self, props: SimulatorProps) -> Result<(), String>;
}

/// Production integration surface; discovers its own session from the host
pub trait IntegrationSurface {
    fn render_integration(&mut self) -> Result<(), String>;
}

/// No-op renderer for tests or headless runs
#[derive(Debug, Default, Clone)]
pub struct NoOpRenderer;

impl SimulationRenderer for NoOpRenderer {
    fn render_simulation(&mut self, _props: SimulatorProps) -> Result<(), String> {
        Ok(())
    }
}

impl IntegrationSurface for NoOpRenderer {
    fn render_integration(&mut self) -> Result<(), String> {
        Ok(())
    }
}

/// Stdout renderer for CLI mode - prints what would be rendered
#[derive(Debug, Default, Clone)]
pub struct StdoutRenderer {
    /// Whether to print in JSON format
    pub json_output: bool,
}

impl StdoutRenderer {
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }
}

impl SimulationRenderer for StdoutRenderer {
    fn render_simulation(&mut self, props: SimulatorProps) -> Result<(), String> {
        if self.json_output {
            let json = serde_json::to_string_pretty(&props)
                .map_err(|e| AppError::from(e).to_string())?;
            println!("{json}");
        } else {
            println!("{}", describe(&props));
        }
        Ok(())
    }
}

impl IntegrationSurface for StdoutRenderer {
    fn render_integration(&mut self) -> Result<(), String> {
        if self.json_output {
            println!(r#"{{"render":"integration"}}"#);
        } else {
            println!("Rendering production integration UI (session supplied by host)");
        }
        Ok(())
    }
}

/// Human-readable summary of a simulator payload
pub fn describe(props: &SimulatorProps) -> String {
    let ctx = &props.context;
    let p = &ctx.processing;
    let mut lines = vec![
        format!("Simulation {}", props.id),
        format!(
            "  integration: {} ({}) installed={}",
            ctx.integration.name, ctx.integration.ref_type, ctx.integration.installed
        ),
        format!("  ui url:      {}", ctx.integration.ui_url),
        format!(
            "  processing:  state={} location={} processed={} paused={}",
            p.state, p.location, p.processed, p.paused
        ),
        format!("  created:     {}", p.created_date.to_rfc3339()),
        format!("  exported:    {}", p.last_export_completed_date.to_rfc3339()),
        format!("  processed:   {}", p.last_processed_date.to_rfc3339()),
    ];
    match p.active_throttle() {
        Some(until) => lines.push(format!("  throttled until {}", until.to_rfc3339())),
        None => lines.push("  throttled:   no".to_string()),
    }
    lines.push(format!(
        "  agent:       enrollment={} running={}",
        ctx.agent.enrollment_id, ctx.agent.running
    ));
    lines.push(format!(
        "  session:     {} / {} @ {}",
        ctx.session.customer.name, ctx.session.user.name, ctx.session.env
    ));
    lines.join("\n")
}
