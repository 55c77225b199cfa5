mod brand;
mod landing;
mod places;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::landing::LandingCommands;
use crate::places::PlacesCommands;

#[derive(Debug, Parser)]
#[command(name = "scholar-cli")]
#[command(about = "Scholarship portal command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the resolved brand configuration
    Brand {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Landing page content
    Landing {
        #[command(subcommand)]
        command: LandingCommands,
    },
    /// Place search through the configured geocoder
    Places {
        #[command(subcommand)]
        command: PlacesCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = scholar_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    scholar_core::init_access_token(config.mapbox_access_token.clone());

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Brand { json }) => brand::run_brand_show(scholar_core::brand(), json)?,
        Some(Commands::Landing { command }) => landing::run_landing(&config, command)?,
        Some(Commands::Places { command }) => places::run_places(&config, command).await?,
        None => println!("scholar-cli: run with --help to list commands"),
    }

    Ok(())
}
