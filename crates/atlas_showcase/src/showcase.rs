use std::fmt::Display;

use atlas_google::{
    distance_matrix::DistanceMatrixResponse,
    geocode::GeocodeResponse,
    google_api::{GoogleApi, GoogleApiError},
};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::{
    address::Address,
    key_store::{API_KEY_NAME, KeyStore, KeyStoreError, api_key_ttl},
    location::{Location, LocationId},
    location_registry::LocationRegistry,
    notifier::{Notifier, Toast},
    result_reshaper::{DistanceResult, ReshapeError, reshape},
    session::{FieldChange, KeyAction, SessionState, Tab},
};

pub const GEOCODING_TITLE: &str = "Geocoding Results";
pub const TRAVEL_TIMES_TITLE: &str = "Travel Times Results";
pub const ERROR_TITLE: &str = "Error";

pub const MISSING_API_KEY_MESSAGE: &str = "Please provide a valid Google API Key";
pub const GEOCODED_MESSAGE: &str =
    "Address successfully geocoded and added as location for travel time calculation.";
pub const TRAVEL_TIMES_MESSAGE: &str = "See the results for the details...";

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error(transparent)]
    Api(#[from] GoogleApiError),

    #[error("Invalid response: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Reshape(#[from] ReshapeError),

    #[error("Geocoding returned no results")]
    NoGeocodeResult,

    #[error(transparent)]
    KeyStore(#[from] KeyStoreError),
}

fn status_not_ok(status: &str, error_message: Option<&str>) -> String {
    match error_message {
        Some(message) => format!("Google API status is not OK: {status} ({message})"),
        None => format!("Google API status is not OK: {status}"),
    }
}

/// State and event handlers behind the geocoding and travel times form.
///
/// Every user interaction maps to one method. Failures never escape: they
/// are logged and reported through the [`Notifier`].
pub struct Showcase<A, K, N> {
    api: A,
    key_store: K,
    notifier: N,
    session: SessionState,
    locations: LocationRegistry,
    geocode_response: Option<String>,
    matrix_response: Option<String>,
    results: Vec<DistanceResult>,
}

impl<A, K, N> Showcase<A, K, N>
where
    A: GoogleApi,
    K: KeyStore,
    N: Notifier,
{
    pub fn new(api: A, key_store: K, notifier: N) -> Self {
        Self {
            api,
            key_store,
            notifier,
            session: SessionState::default(),
            locations: LocationRegistry::new(),
            geocode_response: None,
            matrix_response: None,
            results: Vec::new(),
        }
    }

    /// Picks up a remembered API key.
    pub fn connect(&mut self) {
        match self.key_store.get(API_KEY_NAME) {
            Ok(Some(api_key)) if !api_key.is_empty() => {
                debug!("Using remembered API key");
                self.session.api_key = api_key;
                self.session.remember_api_key = true;
            }
            Ok(_) => {}
            Err(err) => warn!("Could not read remembered API key: {}", err),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn active_tab(&self) -> Tab {
        self.session.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.session.active_tab = tab;
    }

    pub fn apply(&mut self, change: FieldChange) {
        let result = match self.session.apply(change) {
            KeyAction::Keep => Ok(()),
            KeyAction::Persist => {
                self.key_store
                    .set(API_KEY_NAME, &self.session.api_key, api_key_ttl())
            }
            KeyAction::Forget => self.key_store.clear(API_KEY_NAME),
        };

        if let Err(err) = result {
            self.report_error(ShowcaseError::from(err));
        }
    }

    /// Uses `api_key` for the following requests without remembering it.
    /// A key that is already remembered stays in the key store.
    pub fn use_api_key(&mut self, api_key: String) {
        self.session.api_key = api_key;
    }

    pub fn set_address(&mut self, address: Address) {
        self.session.address = address;
    }

    pub fn clear_address(&mut self) {
        self.session.address = Address::default();
    }

    /// Returns `false`, after telling the user, when no API key is set.
    pub fn validate_api_key(&mut self) -> bool {
        if self.session.has_api_key() {
            return true;
        }

        self.notifier
            .notify(Toast::error(ERROR_TITLE, MISSING_API_KEY_MESSAGE));
        self.session.active_tab = Tab::ApiKey;
        false
    }

    /// Geocodes the current address and adds the match as a location.
    pub async fn submit_geocode(&mut self) -> Option<LocationId> {
        if !self.validate_api_key() {
            return None;
        }

        match self.geocode().await {
            Ok(id) => id,
            Err(err) => {
                self.report_error(err);
                None
            }
        }
    }

    async fn geocode(&mut self) -> Result<Option<LocationId>, ShowcaseError> {
        let request = self.session.geocode_request();
        let raw = self.api.geocode_address(&request).await?;
        let parsed = serde_json::from_str::<GeocodeResponse>(&raw);
        self.geocode_response = Some(raw);
        let response = parsed?;

        if !response.is_ok() {
            self.notifier
                .notify(Toast::error(
                    GEOCODING_TITLE,
                    status_not_ok(&response.status, response.error_message.as_deref()),
                ));
            return Ok(None);
        }

        let location = response
            .first_location()
            .ok_or(ShowcaseError::NoGeocodeResult)?;

        self.notifier
            .notify(Toast::success(GEOCODING_TITLE, GEOCODED_MESSAGE));
        let id = self.locations.add_from_geocode(location.lat, location.lng);
        self.session.active_tab = Tab::TravelTimes;

        Ok(Some(id))
    }

    pub fn add_location(&mut self) -> LocationId {
        self.locations.add_empty()
    }

    pub fn remove_location(&mut self, id: LocationId) {
        self.locations.remove(id);
    }

    pub fn update_location(&mut self, id: LocationId, lat: f64, lng: f64) {
        self.locations.update(id, lat, lng);
    }

    pub fn clear_locations(&mut self) {
        self.locations.clear();
    }

    pub fn locations(&self) -> &[Location] {
        self.locations.list()
    }

    /// Requests the travel times between all locations and replaces the
    /// results. Returns the number of result rows when they were updated.
    pub async fn submit_travel_times(&mut self) -> Option<usize> {
        if !self.validate_api_key() {
            return None;
        }

        match self.travel_times().await {
            Ok(count) => count,
            Err(err) => {
                self.report_error(err);
                None
            }
        }
    }

    async fn travel_times(&mut self) -> Result<Option<usize>, ShowcaseError> {
        // The reshaped rows refer back to the list the query was built from
        let locations = self.locations.list().to_vec();
        let locations_json = self.locations.to_json()?;

        let raw = self
            .api
            .travel_times(&self.session.api_key, &locations_json)
            .await?;
        let parsed = serde_json::from_str::<DistanceMatrixResponse>(&raw);
        self.matrix_response = Some(raw);
        let matrix = parsed?;

        if let Some(status) = matrix.failed_status() {
            self.notifier
                .notify(Toast::error(
                    TRAVEL_TIMES_TITLE,
                    status_not_ok(status, matrix.error_message.as_deref()),
                ));
            return Ok(None);
        }

        self.results = reshape(&matrix, &locations)?;
        self.notifier
            .notify(Toast::success(TRAVEL_TIMES_TITLE, TRAVEL_TIMES_MESSAGE));

        Ok(Some(self.results.len()))
    }

    pub fn results(&self) -> &[DistanceResult] {
        &self.results
    }

    /// Raw body of the last geocoding call.
    pub fn geocode_response(&self) -> Option<&str> {
        self.geocode_response.as_deref()
    }

    /// Raw body of the last travel times call.
    pub fn matrix_response(&self) -> Option<&str> {
        self.matrix_response.as_deref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn key_store(&self) -> &K {
        &self.key_store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn report_error(&self, err: impl Display) {
        error!("{}", err);
        self.notifier
            .notify(Toast::error(ERROR_TITLE, format!("Error: {err}")));
    }
}
