use serde::Deserialize;

use crate::STATUS_OK;

/// Raw Distance Matrix API response.
///
/// `rows[i].elements[j]` holds the result from origin `i` to destination `j`.
#[derive(Deserialize, Debug, Clone)]
pub struct DistanceMatrixResponse {
    /// Top level status, absent in hand written fixtures
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub origin_addresses: Vec<String>,

    #[serde(default)]
    pub destination_addresses: Vec<String>,

    /// Absent on some failed requests, check [`DistanceMatrixResponse::failed_status`] first
    #[serde(default)]
    pub rows: Option<Vec<MatrixRow>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MatrixRow {
    pub elements: Vec<MatrixElement>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MatrixElement {
    pub status: String,

    /// Travel time in seconds
    #[serde(default)]
    pub duration: Option<Measure>,

    /// Travel distance in meters
    #[serde(default)]
    pub distance: Option<Measure>,
}

/// A `{ "text": "10 mins", "value": 600 }` pair. The raw number is kept as sent.
#[derive(Deserialize, Debug, Clone)]
pub struct Measure {
    #[serde(default)]
    pub text: Option<String>,
    pub value: serde_json::Number,
}

impl DistanceMatrixResponse {
    /// Whether the request as a whole failed. Elements can still fail individually.
    pub fn failed_status(&self) -> Option<&str> {
        self.status
            .as_deref()
            .filter(|status| *status != STATUS_OK)
    }

    pub fn element_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .map(|row| row.elements.len())
            .sum()
    }
}

impl MatrixElement {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}
