use atlas_google::lat_lng::LatLng;
use atlas_showcase::{
    location::LocationId,
    session::{FieldChange, Tab},
};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::{config::CliShowcase, parsers, render};

#[derive(Clone, Copy, ValueEnum)]
enum Field {
    Street,
    Postalcode,
    City,
    State,
    Country,
    ApiKey,
}

#[derive(Clone, Copy, ValueEnum)]
enum RawResponse {
    Geocode,
    Matrix,
}

/// One line typed into the interactive session.
#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Change a form field, e.g. `set city Den Haag`
    Set {
        field: Field,
        value: Vec<String>,
    },
    /// Remember the API key for a year (`on`) or forget it (`off`)
    Remember {
        #[arg(action = ArgAction::Set, value_parser = parsers::parse_switch)]
        enabled: bool,
    },
    /// Empty all address fields
    ClearAddress,
    /// Switch to another tab: api-key, geocode or travel-times
    Tab { tab: Tab },
    /// Geocode the address and add it as a location
    Geocode,
    /// Add a location at 0,0
    Add,
    /// Remove a location by id
    Remove { id: usize },
    /// Move a location, e.g. `update 0 52.36,4.88`
    Update {
        id: usize,
        #[arg(value_parser = parsers::parse_lat_lng, allow_hyphen_values = true)]
        lat_lng: LatLng,
    },
    /// Remove all locations
    ClearLocations,
    /// List the locations
    Locations,
    /// Calculate travel times between all locations
    TravelTimes,
    /// Show the last travel times results
    Results,
    /// Print the raw body of the last Google response
    Raw { response: RawResponse },
    /// Show the form
    Show,
    #[command(visible_alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

fn field_change(field: Field, value: String) -> FieldChange {
    match field {
        Field::Street => FieldChange::Street(value),
        Field::Postalcode => FieldChange::PostalCode(value),
        Field::City => FieldChange::City(value),
        Field::State => FieldChange::State(value),
        Field::Country => FieldChange::Country(value),
        Field::ApiKey => FieldChange::ApiKey(value),
    }
}

async fn execute(showcase: &mut CliShowcase, command: SessionCommand) -> Flow {
    match command {
        SessionCommand::Set { field, value } => {
            showcase.apply(field_change(field, value.join(" ")));
        }
        SessionCommand::Remember { enabled } => {
            showcase.apply(FieldChange::RememberApiKey(enabled));
        }
        SessionCommand::ClearAddress => showcase.clear_address(),
        SessionCommand::Tab { tab } => showcase.set_active_tab(tab),
        SessionCommand::Geocode => {
            if showcase.submit_geocode().await.is_some() {
                println!("{}", render::locations_table(showcase.locations()));
            }
        }
        SessionCommand::Add => {
            let id = showcase.add_location();
            println!("Added location {id}");
        }
        SessionCommand::Remove { id } => showcase.remove_location(LocationId::new(id)),
        SessionCommand::Update { id, lat_lng } => {
            showcase.update_location(LocationId::new(id), lat_lng.lat, lat_lng.lng);
        }
        SessionCommand::ClearLocations => showcase.clear_locations(),
        SessionCommand::Locations => {
            println!("{}", render::locations_table(showcase.locations()));
        }
        SessionCommand::TravelTimes => {
            if showcase.submit_travel_times().await.is_some() {
                println!("{}", render::results_table(showcase.results()));
            }
        }
        SessionCommand::Results => {
            println!("{}", render::results_table(showcase.results()));
        }
        SessionCommand::Raw { response } => {
            let body = match response {
                RawResponse::Geocode => showcase.geocode_response(),
                RawResponse::Matrix => showcase.matrix_response(),
            };
            println!("{}", body.unwrap_or("No response yet"));
        }
        SessionCommand::Show => println!("{}", render::session_table(showcase.session())),
        SessionCommand::Quit => return Flow::Quit,
    }

    Flow::Continue
}

/// Reads commands from stdin until `quit` or end of input.
pub async fn run(showcase: &mut CliShowcase) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    println!("{}", render::session_table(showcase.session()));

    loop {
        stdout
            .write_all(format!("[{}]> ", showcase.active_tab()).as_bytes())
            .await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        match SessionLine::try_parse_from(tokens) {
            Ok(SessionLine { command }) => {
                if let Flow::Quit = execute(showcase, command).await {
                    break;
                }
            }
            Err(err) => {
                debug!("Could not parse session line: {}", line);
                err.print()?;
            }
        }
    }

    Ok(())
}
