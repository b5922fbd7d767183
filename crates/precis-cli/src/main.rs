//! Precis CLI - Extractive summaries from the command line.

use clap::Parser;
use precis_cli::commands;
use precis_cli::{Cli, Command, Config, Formatter};
use precis_engine::Summarizer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> precis_cli::Result<()> {
    let cli = Cli::parse();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let engine = cli.engine_config(&config.engine);

    match cli.command {
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?;
        }
        Command::Text(args) => {
            let summarizer = Summarizer::from_config(&engine)?;
            commands::execute_text(args, &summarizer, &formatter)?;
        }
        Command::Url(args) => {
            let summarizer = Summarizer::from_config(&engine)?;
            commands::execute_url(args, &summarizer, &formatter).await?;
        }
        Command::Pdf(args) => {
            let summarizer = Summarizer::from_config(&engine)?;
            commands::execute_pdf(args, &summarizer, &formatter).await?;
        }
    }

    Ok(())
}
