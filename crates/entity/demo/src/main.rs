//! Entity demo - a terminal walkthrough of the validated container
//!
//! Builds a counter that must stay non-negative and prints, step by step,
//! which writes the validator accepted and which it turned away.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod walkthrough;

use config::DemoConfig;

/// Entity demo application
#[derive(Parser)]
#[command(name = "entity-demo")]
#[command(about = "Walk a validated container through accepted and rejected writes", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "ENTITY_CONFIG")]
    config: Option<String>,

    /// Starting value (overrides the config file)
    #[arg(short, long, allow_hyphen_values = true)]
    start: Option<i64>,

    /// Turn on operation tracing for every container
    #[arg(short, long)]
    trace: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Operation traces are emitted at debug level.
    let filter = if cli.verbose || cli.trace { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = DemoConfig::load(cli.config.as_deref())?;
    if cli.trace {
        entity_core::set_trace_enabled(true);
    }

    let start = cli.start.or(config.start).unwrap_or(5);
    for step in walkthrough::run(start, config.entity) {
        println!("{step}");
    }

    Ok(())
}
