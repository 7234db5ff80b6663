//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "teampulse")]
#[command(about = "TeamPulse: chat participation, sentiment and nudges")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: level from config)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (default: from config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (default: from config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable CORS
        #[arg(long)]
        cors: bool,
    },
    /// Analyse a message batch and print the result
    Analyze {
        /// JSON file with `{ "messages": [...] }` or a bare message array (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Analyse a built-in scenario instead of (or in place of) the input
        #[arg(short, long)]
        scenario: Option<String>,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// Score a single text and show which words contributed
    Score {
        /// Text to score
        text: String,
    },
    /// List built-in scenarios
    Scenarios,
    /// Show current configuration
    Config,
}
