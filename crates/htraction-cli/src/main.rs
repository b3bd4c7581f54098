use clap::Parser;
use eyre::Result;
use tracing::info;

use htraction_cli::cli::Cli;
use htraction_cli::commands;
use htraction_cli::config::{self, LogFormat};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let loaded = config::load_or_default(&config_path)?;

    init_tracing(cli.debug, loaded.config.log_format);
    for step in &loaded.migrations {
        info!(path = %config_path.display(), "migrated config {step}");
    }

    commands::run(cli.command, &loaded.config, &config_path)
}

fn init_tracing(debug: bool, format: LogFormat) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
