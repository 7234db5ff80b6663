use clap::Parser;
use teampulse::cli::handle_analyze_command;
use teampulse::cli::handle_config_command;
use teampulse::cli::handle_scenarios_command;
use teampulse::cli::handle_score_command;
use teampulse::cli::handle_serve_api;
use teampulse::cli::Cli;
use teampulse::cli::Commands;
use teampulse::config::AppConfig;
use teampulse::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    teampulse::logging::init_logging_with_config(&config, cli.verbose)?;
    info!("Configuration loaded successfully");

    // Execute the requested command
    match cli.command {
        Commands::Serve { host, port, cors } => {
            handle_serve_api(&config, host, port, cors).await?;
        }
        Commands::Analyze {
            file,
            scenario,
            json,
        } => {
            handle_analyze_command(&config, file.as_deref(), scenario, json).await?;
        }
        Commands::Score { text } => {
            handle_score_command(&config, &text).await?;
        }
        Commands::Scenarios => {
            handle_scenarios_command().await?;
        }
        Commands::Config => {
            handle_config_command(&config).await?;
        }
    }

    Ok(())
}
