use serde::{Deserialize, Serialize};

use crate::{STATUS_OK, lat_lng::LatLng};

/// Parameters of a geocoding call, one field per address form input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeocodeRequest {
    pub api_key: String,
    pub street: String,
    pub postalcode: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl GeocodeRequest {
    /// Single line address sent to Google, e.g. `Leidseplein 2, 1017 PT Amsterdam, Noord-Holland, Netherlands`.
    /// Empty parts are left out.
    pub fn address(&self) -> String {
        let locality = join_non_empty(&[self.postalcode.as_str(), self.city.as_str()], " ");

        join_non_empty(
            &[
                self.street.as_str(),
                locality.as_str(),
                self.state.as_str(),
                self.country.as_str(),
            ],
            ", ",
        )
    }
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeocodeResponse {
    pub status: String,

    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    /// Only present when the status is not OK
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Geometry {
    pub location: LatLng,
}

impl GeocodeResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Coordinates of the best match, Google ranks it first.
    pub fn first_location(&self) -> Option<LatLng> {
        self.results.first().map(|result| result.geometry.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(street: &str, postalcode: &str, city: &str, state: &str, country: &str) -> GeocodeRequest {
        GeocodeRequest {
            api_key: String::from("key"),
            street: street.to_string(),
            postalcode: postalcode.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_address() {
        let request = request(
            "Leidseplein 2",
            "1017 PT",
            "Amsterdam",
            "Noord-Holland",
            "Netherlands",
        );

        assert_eq!(
            request.address(),
            "Leidseplein 2, 1017 PT Amsterdam, Noord-Holland, Netherlands"
        );
    }

    #[test]
    fn test_address_skips_empty_parts() {
        let request = request("", "", " Utrecht ", "", "Netherlands");

        assert_eq!(request.address(), "Utrecht, Netherlands");
    }

    #[test]
    fn test_parse_ok_response() {
        let json = r#"{
            "status": "OK",
            "results": [
                {
                    "formatted_address": "Leidseplein 2, 1017 PT Amsterdam, Netherlands",
                    "geometry": { "location": { "lat": 52.3640, "lng": 4.8830 }, "location_type": "ROOFTOP" }
                }
            ]
        }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();

        assert!(response.is_ok());
        assert_eq!(response.first_location(), Some(LatLng::new(52.364, 4.883)));
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "results": [] }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();

        assert!(!response.is_ok());
        assert_eq!(response.first_location(), None);
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn test_missing_status_fails() {
        assert!(serde_json::from_str::<GeocodeResponse>(r#"{ "results": [] }"#).is_err());
    }
}
