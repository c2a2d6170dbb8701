use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in the shape Google uses (`{"lat": .., "lng": ..}`).
///
/// Extra keys are ignored when deserializing, so a registry location
/// (`{"id": .., "lat": .., "lng": ..}`) parses as well.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<&LatLng> for geo_types::Point {
    fn from(value: &LatLng) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}
