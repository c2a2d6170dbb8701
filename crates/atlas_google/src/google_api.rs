use std::future::Future;

use thiserror::Error;

use crate::geocode::GeocodeRequest;

#[derive(Debug, Error)]
pub enum GoogleApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("No locations to calculate travel times for")]
    NoLocations,
}

/// The two Google Maps calls the showcase needs.
///
/// Both return the raw JSON body so the caller can keep it around for display
/// before parsing it.
pub trait GoogleApi {
    fn geocode_address(
        &self,
        request: &GeocodeRequest,
    ) -> impl Future<Output = Result<String, GoogleApiError>> + Send;

    /// `locations_json` is a JSON array of `{ "lat", "lng" }` objects, used as
    /// both the origins and the destinations of the matrix.
    fn travel_times(
        &self,
        api_key: &str,
        locations_json: &str,
    ) -> impl Future<Output = Result<String, GoogleApiError>> + Send;
}
