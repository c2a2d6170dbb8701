use atlas_showcase::{
    location::Location, result_reshaper::DistanceResult, session::SessionState,
};
use comfy_table::{Table, presets::UTF8_FULL};

pub fn locations_table(locations: &[Location]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Id", "Latitude", "Longitude"]);

    for location in locations {
        table.add_row(vec![
            location.id.to_string(),
            location.lat.to_string(),
            location.lng.to_string(),
        ]);
    }

    table
}

pub fn results_table(results: &[DistanceResult]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Id", "Status", "From", "From address", "To", "To address", "Duration", "Distance",
    ]);

    for result in results {
        table.add_row(vec![
            result.id.to_string(),
            result.status.clone(),
            result.from_coordinate.clone(),
            result.from_address.clone(),
            result.to_coordinate.clone(),
            result.to_address.clone(),
            result.duration.clone(),
            result.distance.clone(),
        ]);
    }

    table
}

pub fn session_table(session: &SessionState) -> Table {
    let api_key = if session.has_api_key() {
        "set"
    } else {
        "missing"
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Field", "Value"]);
    table.add_row(vec![String::from("Tab"), session.active_tab.to_string()]);
    table.add_row(vec!["API key", api_key]);
    table.add_row(vec![
        "Remember API key",
        if session.remember_api_key { "on" } else { "off" },
    ]);
    table.add_row(vec!["Street", session.address.street.as_str()]);
    table.add_row(vec!["Postal code", session.address.postalcode.as_str()]);
    table.add_row(vec!["City", session.address.city.as_str()]);
    table.add_row(vec!["State", session.address.state.as_str()]);
    table.add_row(vec!["Country", session.address.country.as_str()]);

    table
}
