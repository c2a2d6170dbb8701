use atlas_google::{
    geocode::GeocodeRequest,
    google_api::{GoogleApi, GoogleApiError},
};
use parking_lot::Mutex;

use crate::notifier::{Notifier, Toast};

/// Answers every call with a canned body, `None` fails the call.
#[derive(Default)]
pub struct FakeGoogleApi {
    pub geocode_body: Mutex<Option<String>>,
    pub travel_times_body: Mutex<Option<String>>,
    pub geocode_calls: Mutex<Vec<GeocodeRequest>>,
    pub travel_times_calls: Mutex<Vec<(String, String)>>,
}

impl FakeGoogleApi {
    pub fn geocoding(body: &str) -> Self {
        Self {
            geocode_body: Mutex::new(Some(body.to_string())),
            ..Default::default()
        }
    }

    pub fn travel_times(body: &str) -> Self {
        Self {
            travel_times_body: Mutex::new(Some(body.to_string())),
            ..Default::default()
        }
    }

    pub fn set_travel_times_body(&self, body: &str) {
        *self.travel_times_body.lock() = Some(body.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.geocode_calls.lock().len() + self.travel_times_calls.lock().len()
    }
}

fn answer(body: &Mutex<Option<String>>) -> Result<String, GoogleApiError> {
    body.lock().clone().ok_or(GoogleApiError::Api {
        status: 503,
        message: String::from("Service Unavailable"),
    })
}

impl GoogleApi for FakeGoogleApi {
    async fn geocode_address(&self, request: &GeocodeRequest) -> Result<String, GoogleApiError> {
        self.geocode_calls.lock().push(request.clone());
        answer(&self.geocode_body)
    }

    async fn travel_times(
        &self,
        api_key: &str,
        locations_json: &str,
    ) -> Result<String, GoogleApiError> {
        self.travel_times_calls
            .lock()
            .push((api_key.to_string(), locations_json.to_string()));
        answer(&self.travel_times_body)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}

pub const GEOCODE_OK: &str = r#"{
    "status": "OK",
    "results": [
        {
            "formatted_address": "Leidseplein 2, 1017 PT Amsterdam, Netherlands",
            "geometry": { "location": { "lat": 52.36, "lng": 4.88 } }
        }
    ]
}"#;

pub const MATRIX_OK: &str = r#"{
    "status": "OK",
    "origin_addresses": ["Leidseplein, Amsterdam", "Binnenhof, Den Haag"],
    "destination_addresses": ["Leidseplein, Amsterdam", "Binnenhof, Den Haag"],
    "rows": [
        { "elements": [
            { "status": "OK", "duration": { "text": "10 mins", "value": 600 }, "distance": { "text": "1.0 km", "value": 1000 } },
            { "status": "OK", "duration": { "text": "15 mins", "value": 900 }, "distance": { "text": "2.0 km", "value": 2000 } }
        ] },
        { "elements": [
            { "status": "OK", "duration": { "text": "20 mins", "value": 1200 }, "distance": { "text": "3.0 km", "value": 3000 } },
            { "status": "OK", "duration": { "text": "5 mins", "value": 300 }, "distance": { "text": "4.0 km", "value": 4000 } }
        ] }
    ]
}"#;
