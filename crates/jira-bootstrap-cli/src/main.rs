//! Jira Bootstrap CLI
//!
//! Developer tool for the Jira integration UI startup logic. Shows how a
//! page address would be classified and prints the mock context the
//! installer simulator receives in standalone mode.

use chrono::{DateTime, TimeZone, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand};
use jira_bootstrap_core::{
    mock_context, render::describe, validate, AppError, Bootstrap, BootstrapConfig,
    EnvironmentContext, EnvironmentProbe, MockContextBuilder, SimulationId, SimulatorProps,
    StdoutRenderer, Unavailable,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Jira integration UI bootstrap inspector
#[derive(Parser, Debug)]
#[command(name = "jira-bootstrap")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(short, long, global = true, env = "JIRA_BOOTSTRAP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a page as hosted or standalone
    Detect {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Build, validate and print the standalone simulation context
    Context {
        /// Evaluation time in epoch milliseconds (defaults to now)
        #[arg(long)]
        now: Option<i64>,

        /// Page address used as the integration's UI entry URL
        #[arg(long)]
        url: Option<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Generate a fresh simulation id instead of the configured one
        #[arg(long)]
        random_id: bool,
    },

    /// Run the full startup dispatch against stdout renderers
    Launch {
        #[command(flatten)]
        page: PageArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Generate a fresh simulation id instead of the configured one
        #[arg(long)]
        random_id: bool,
    },
}

#[derive(ClapArgs, Debug)]
struct PageArgs {
    /// Page address
    #[arg(long, default_value = "http://localhost:3000/")]
    url: String,

    /// The page is loaded inside a parent frame
    #[arg(long)]
    embedded: bool,

    /// Simulate a context where frame and address introspection fail
    #[arg(long, conflicts_with = "embedded")]
    no_introspection: bool,
}

impl PageArgs {
    fn probe(&self) -> Box<dyn EnvironmentProbe> {
        if self.no_introspection {
            Box::new(Unavailable)
        } else {
            Box::new(EnvironmentContext::new(!self.embedded, self.url.clone()))
        }
    }
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_now(now: Option<i64>) -> Result<DateTime<Utc>, String> {
    let Some(ms) = now else {
        return Ok(Utc::now());
    };
    let now = Utc
        .timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| format!("Invalid timestamp: {ms}"))?;
    if !mock_context::supports_instant(now) {
        return Err(format!(
            "Timestamp {ms} is too close to the representable range to derive mock dates"
        ));
    }
    Ok(now)
}

fn with_random_id(config: BootstrapConfig, random_id: bool) -> BootstrapConfig {
    if random_id {
        config.with_simulation_id(SimulationId::random().to_string())
    } else {
        config
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => BootstrapConfig::load(path)?,
        None => BootstrapConfig::default(),
    };

    match args.command {
        Command::Detect { page } => {
            let mode = Bootstrap::new(&config)
                .detector()
                .detect_with(page.probe().as_ref());
            println!("{mode}");
        }
        Command::Context {
            now,
            url,
            format,
            random_id,
        } => {
            let now = parse_now(now)?;
            let config = with_random_id(config, random_id);
            let mut builder = MockContextBuilder::from_config(&config);
            if let Some(url) = url {
                builder = builder.with_ui_url(url);
            }
            let context = builder.build(now);
            validate(&context, now)?;

            let props = SimulatorProps {
                id: builder.simulation_id().clone(),
                context,
            };
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&props).map_err(AppError::from)?;
                    println!("{json}");
                }
                OutputFormat::Text => println!("{}", describe(&props)),
            }
        }
        Command::Launch {
            page,
            format,
            random_id,
        } => {
            let bootstrap = Bootstrap::new(&with_random_id(config, random_id));
            let mut renderer = StdoutRenderer::new(matches!(format, OutputFormat::Json));
            let mut surface = renderer.clone();
            let mode = bootstrap.run(page.probe().as_ref(), Utc::now(), &mut renderer, &mut surface)?;
            tracing::info!("Dispatched in {mode} mode");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
