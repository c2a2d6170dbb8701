use serde::{Deserialize, Serialize};

/// Identifier handed out by the [`LocationRegistry`](crate::location_registry::LocationRegistry).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LocationId(usize);

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl LocationId {
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for LocationId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// A coordinate tracked by the registry. Latitude and longitude are not validated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(id: LocationId, lat: f64, lng: f64) -> Self {
        Self { id, lat, lng }
    }

    /// `lat,lng` as shown in the results list.
    pub fn coordinate(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}
