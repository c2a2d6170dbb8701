use atlas_google::lat_lng::LatLng;

/// Parses `lat,lng`, e.g. `52.36,4.88`.
pub fn parse_lat_lng(input: &str) -> Result<LatLng, String> {
    let (lat, lng) = input
        .split_once(',')
        .ok_or_else(|| format!("Expected lat,lng but got \"{input}\""))?;

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("Invalid latitude \"{}\": {}", lat.trim(), err))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("Invalid longitude \"{}\": {}", lng.trim(), err))?;

    Ok(LatLng::new(lat, lng))
}

pub fn parse_switch(input: &str) -> Result<bool, String> {
    match input.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(format!("Expected on or off but got \"{input}\"")),
    }
}
