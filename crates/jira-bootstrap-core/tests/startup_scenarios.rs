//! End-to-end startup scenarios through the public API

use chrono::{DateTime, Duration, TimeZone, Utc};
use jira_bootstrap_core::{
    validate, Bootstrap, EnvironmentContext, InstalledLocation, IntegrationSurface, Mode,
    ProcessingState, SimulationRenderer, SimulatorProps,
};

#[derive(Default)]
struct Recorder {
    simulations: Vec<SimulatorProps>,
    integrations: usize,
}

impl SimulationRenderer for Recorder {
    fn render_simulation(&mut self, props: SimulatorProps) -> Result<(), String> {
        self.simulations.push(props);
        Ok(())
    }
}

impl IntegrationSurface for Recorder {
    fn render_integration(&mut self) -> Result<(), String> {
        self.integrations += 1;
        Ok(())
    }
}

fn now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_760_000_000_000).unwrap()
}

fn run(env: &EnvironmentContext) -> (Mode, Recorder) {
    let mut recorder = Recorder::default();
    let mut surface = Recorder::default();
    let mode = Bootstrap::default()
        .run(env, now(), &mut recorder, &mut surface)
        .unwrap();
    recorder.integrations = surface.integrations;
    (mode, recorder)
}

#[test]
fn local_top_level_page_runs_simulator() {
    let (mode, recorder) = run(&EnvironmentContext::top_level("http://localhost:3000/"));

    assert_eq!(mode, Mode::Standalone);
    assert_eq!(recorder.integrations, 0);
    assert_eq!(recorder.simulations.len(), 1);

    let props = &recorder.simulations[0];
    assert_eq!(props.context.processing.location, InstalledLocation::Cloud);
    assert_eq!(props.context.processing.state, ProcessingState::Idle);
    assert!(!props.context.processing.paused);
    assert!(!props.context.integration.installed);
    assert!(validate(&props.context, now()).is_ok());
}

#[test]
fn iframe_on_localhost_is_hosted() {
    let (mode, recorder) = run(&EnvironmentContext::embedded("http://localhost:3000/"));

    assert_eq!(mode, Mode::Hosted);
    assert!(recorder.simulations.is_empty());
    assert_eq!(recorder.integrations, 1);
}

#[test]
fn production_top_level_page_is_hosted() {
    let (mode, recorder) = run(&EnvironmentContext::top_level(
        "https://app.pinpoint.example/integrations/jira",
    ));

    assert_eq!(mode, Mode::Hosted);
    assert!(recorder.simulations.is_empty());
    assert_eq!(recorder.integrations, 1);
}

#[test]
fn repeated_planning_only_shifts_timestamps() {
    let bootstrap = Bootstrap::default();
    let env = EnvironmentContext::top_level("http://localhost:3000/");
    let later = now() + Duration::seconds(90);

    let (a, b) = match (bootstrap.plan(Some(&env), now()), bootstrap.plan(Some(&env), later)) {
        (
            jira_bootstrap_core::Dispatch::Standalone(a),
            jira_bootstrap_core::Dispatch::Standalone(b),
        ) => (a, b),
        _ => panic!("expected standalone dispatch"),
    };

    assert_eq!(a.id, b.id);
    assert_eq!(a.context.integration, b.context.integration);
    assert_eq!(a.context.agent, b.context.agent);
    assert_eq!(a.context.session, b.context.session);
    assert_eq!(
        b.context.processing.created_date - a.context.processing.created_date,
        later - now()
    );
    assert_eq!(
        b.context.processing.last_processed_date - a.context.processing.last_processed_date,
        later - now()
    );
}
