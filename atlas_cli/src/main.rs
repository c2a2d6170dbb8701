use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{geocode::GeocodeArgs, travel_times::TravelTimesArgs};

mod config;
mod geocode;
mod parsers;
mod render;
mod session;
mod travel_times;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,

    /// Folder holding the remembered API key (default: $ATLAS_KEY_STORE_FOLDER or the current directory)
    #[arg(long)]
    key_store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the form interactively (default)
    #[command(visible_alias = "s")]
    Session,
    /// Geocode an address
    #[command(visible_alias = "g")]
    Geocode {
        #[command(flatten)]
        args: GeocodeArgs,
    },
    /// Travel times between every pair of locations
    #[command(visible_alias = "t")]
    TravelTimes {
        #[command(flatten)]
        args: TravelTimesArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut showcase = config::build_showcase(cli.key_store)?;

    match cli.command {
        Some(Commands::Geocode { args }) => geocode::run(&mut showcase, args).await?,
        Some(Commands::TravelTimes { args }) => travel_times::run(&mut showcase, args).await?,
        Some(Commands::Session) | None => session::run(&mut showcase).await?,
    }

    Ok(())
}
