use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use services::config::load_config;
use services::loader::load_project;

/// Logging goes to stderr so `--json` and CSV output stay machine-clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli.plan);

    // validate must keep working when the manifest itself is broken
    if matches!(cli.command, Commands::Validate) {
        return commands::handle_validate(&cli);
    }

    let project = load_project(&cli.plan)?;
    match cli.command {
        Commands::List | Commands::Show { .. } => {
            commands::handle_content_commands(&cli, &project, &config)
        }
        _ => commands::handle_budget_commands(&cli, &project, &config),
    }
}
