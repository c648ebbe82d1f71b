//! tripdesk CLI — run the travel tools by hand.
//!
//! Commands:
//! - `tools`    — List registered tools
//! - `call`     — Invoke a tool by name with a string input
//! - `weather`  — Shortcut for `call weather_lookup`
//! - `budget`   — Shortcut for `call budget_calculator`
//! - `status`   — Show effective configuration
//! - `onboard`  — Write a starter config file

use clap::{Parser, Subcommand};
use tripdesk_config::{AppConfig, BUDGET_CALCULATOR, WEATHER_LOOKUP};

mod commands;
mod logging;

#[derive(Parser)]
#[command(
    name = "tripdesk",
    about = "tripdesk — travel tools for language-model agents",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered tools
    Tools,

    /// Invoke a tool with a single string input
    Call {
        /// Tool name, e.g. weather_lookup
        tool: String,

        /// The tool's string input
        input: String,

        /// Print the full tool result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the forecast for a city
    Weather {
        location: String,
    },

    /// Total a comma-separated list of expenses
    Budget {
        expenses: String,
    },

    /// Show effective configuration
    Status,

    /// Write a starter config file
    Onboard,
}

#[tokio::main]
async fn main() -> tripdesk_core::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing before the config so loading is logged
    let log_handle = logging::init(cli.verbose);
    let loaded = AppConfig::load();
    if let Ok(config) = &loaded {
        logging::apply_config_level(&log_handle, cli.verbose, &config.log_level);
    }

    let config = || loaded.as_ref().map_err(|e| tripdesk_core::Error::from(e.clone()));

    match cli.command {
        Commands::Tools => commands::tools::run(config()?).await?,
        Commands::Call { tool, input, json } => {
            commands::call::run(config()?, &tool, &input, json).await?
        }
        Commands::Weather { location } => {
            commands::call::run(config()?, WEATHER_LOOKUP, &location, false).await?
        }
        Commands::Budget { expenses } => {
            commands::call::run(config()?, BUDGET_CALCULATOR, &expenses, false).await?
        }
        Commands::Status => commands::status::run(config()?).await?,
        Commands::Onboard => commands::onboard::run().await?,
    }

    Ok(())
}
