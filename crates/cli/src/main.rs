use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod api;
mod cmd;
mod config;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "gridwatch")]
#[command(about = "grid asset monitoring and fault prediction dashboard", version, author)]
struct Cli {
    /// Prediction API base URL (overrides the config file)
    #[arg(long, global = true)]
    api: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    Tui {
        /// Run from the built-in dataset without contacting the API
        #[arg(long)]
        offline: bool,
    },
    /// Print the dashboard summary and recent faults
    Dashboard,
    /// List monitored plants
    Plants,
    /// Predict the likely fault and restoration time for a plant
    Predict {
        /// Plant ID, e.g. PLANT_01
        #[arg(long)]
        plant: String,
        /// Ambient temperature in degrees Celsius
        #[arg(long)]
        temp: Option<f64>,
        /// Wind speed in km/h
        #[arg(long)]
        wind: Option<f64>,
    },
    /// Write the CLI configuration
    Configure {
        /// Prediction API base URL
        #[arg(long)]
        api: String,
    },
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let cfg = config::load().await;
    let api_url = cli.api.unwrap_or(cfg.api_url);

    match cli.command {
        Commands::Tui { offline } => tui::run_tui(tui::TuiOptions { offline, api_url }).await,
        Commands::Dashboard => cmd::dashboard(&api_url).await,
        Commands::Plants => cmd::plants(&api_url).await,
        Commands::Predict { plant, temp, wind } => cmd::predict(&api_url, &plant, temp, wind).await,
        Commands::Configure { api } => cmd::configure(api).await,
    }
}
