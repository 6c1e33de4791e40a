mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize tracing; RUST_LOG wins over --debug
    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Init { force } => commands::init::handle(cli.config.as_deref(), force),
        cli::Commands::Redact(args) => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::redact::handle(args, &config).await
        }
        cli::Commands::Scan(args) => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::scan::handle(args, &config).await
        }
    }
}
