use atlas_google::{
    geocode::GeocodeRequest,
    google_api::{GoogleApi, GoogleApiError},
};
use atlas_showcase::notifier::{Notifier, Toast};
use parking_lot::Mutex;

/// Returns the same matrix body for every travel times call and counts calls.
pub struct StaticGoogleApi {
    pub matrix_body: String,
    pub calls: Mutex<usize>,
}

impl StaticGoogleApi {
    pub fn new(matrix_body: &str) -> Self {
        Self {
            matrix_body: matrix_body.to_string(),
            calls: Mutex::new(0),
        }
    }
}

impl GoogleApi for StaticGoogleApi {
    async fn geocode_address(&self, _request: &GeocodeRequest) -> Result<String, GoogleApiError> {
        *self.calls.lock() += 1;
        Ok(String::from(r#"{ "status": "ZERO_RESULTS", "results": [] }"#))
    }

    async fn travel_times(
        &self,
        _api_key: &str,
        _locations_json: &str,
    ) -> Result<String, GoogleApiError> {
        *self.calls.lock() += 1;
        Ok(self.matrix_body.clone())
    }
}

#[derive(Default)]
pub struct CollectingNotifier {
    pub toasts: Mutex<Vec<Toast>>,
}

impl Notifier for CollectingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}
