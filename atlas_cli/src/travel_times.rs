use atlas_google::lat_lng::LatLng;
use clap::Args;

use crate::{config::CliShowcase, parsers, render};

#[derive(Args)]
pub struct TravelTimesArgs {
    /// Google API key for this run only, the remembered key is used when
    /// omitted and is never replaced
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// A location as lat,lng. Repeat for every location.
    #[arg(short, long = "location", value_parser = parsers::parse_lat_lng, required = true)]
    locations: Vec<LatLng>,

    /// Print the results as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn run(showcase: &mut CliShowcase, args: TravelTimesArgs) -> anyhow::Result<()> {
    if let Some(api_key) = args.api_key {
        showcase.use_api_key(api_key);
    }

    for location in &args.locations {
        let id = showcase.add_location();
        showcase.update_location(id, location.lat, location.lng);
    }

    if showcase.submit_travel_times().await.is_none() {
        return Err(anyhow::anyhow!("Travel times could not be calculated"));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(showcase.results())?);
    } else {
        println!("{}", render::results_table(showcase.results()));
    }

    Ok(())
}
