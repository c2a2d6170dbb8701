use tracing::debug;

use crate::{
    geocode::GeocodeRequest,
    google_api::{GoogleApi, GoogleApiError},
    lat_lng::LatLng,
};

pub const GOOGLE_MAPS_API_URL: &str = "https://maps.googleapis.com/maps/api";
pub const GOOGLE_GEOCODE_API_PATH: &str = "/geocode/json";
pub const GOOGLE_DISTANCE_MATRIX_API_PATH: &str = "/distancematrix/json";

pub struct GoogleMapsClientParams {
    pub base_url: String,
}

impl Default for GoogleMapsClientParams {
    fn default() -> Self {
        Self {
            base_url: String::from(GOOGLE_MAPS_API_URL),
        }
    }
}

pub struct GoogleMapsClient {
    params: GoogleMapsClientParams,
    client: reqwest::Client,
}

impl Default for GoogleMapsClient {
    fn default() -> Self {
        Self::new(GoogleMapsClientParams::default())
    }
}

/// Formats points as Google waypoints: `lat,lng|lat,lng|...`
fn format_waypoints<P>(points: &[P]) -> String
where
    for<'a> &'a P: Into<geo_types::Point>,
{
    points
        .iter()
        .map(|p| {
            let point: geo_types::Point = p.into();
            format!("{},{}", point.y(), point.x())
        })
        .collect::<Vec<_>>()
        .join("|")
}

impl GoogleMapsClient {
    pub fn new(params: GoogleMapsClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.params.base_url.trim_end_matches('/'), path)
    }

    pub async fn geocode(&self, request: &GeocodeRequest) -> Result<String, GoogleApiError> {
        let address = request.address();
        debug!("GoogleMapsApi: Geocoding address \"{}\"", address);

        let response = self
            .client
            .get(self.url(GOOGLE_GEOCODE_API_PATH))
            .query(&[("address", address.as_str()), ("key", request.api_key.as_str())])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetches the full matrix between all points, every point is both an
    /// origin and a destination.
    pub async fn fetch_distance_matrix<P>(
        &self,
        api_key: &str,
        points: &[P],
    ) -> Result<String, GoogleApiError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        if points.is_empty() {
            return Err(GoogleApiError::NoLocations);
        }

        let waypoints = format_waypoints(points);
        debug!(
            "GoogleMapsApi: Requesting {}x{} distance matrix",
            points.len(),
            points.len()
        );

        let response = self
            .client
            .get(self.url(GOOGLE_DISTANCE_MATRIX_API_PATH))
            .query(&[
                ("origins", waypoints.as_str()),
                ("destinations", waypoints.as_str()),
                ("key", api_key),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<String, GoogleApiError> {
        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(GoogleApiError::Api { status, message })
        }
    }
}

impl GoogleApi for GoogleMapsClient {
    async fn geocode_address(&self, request: &GeocodeRequest) -> Result<String, GoogleApiError> {
        self.geocode(request).await
    }

    async fn travel_times(
        &self,
        api_key: &str,
        locations_json: &str,
    ) -> Result<String, GoogleApiError> {
        let locations: Vec<LatLng> = serde_json::from_str(locations_json)?;
        self.fetch_distance_matrix(api_key, &locations).await
    }
}
