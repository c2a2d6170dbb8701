use tracing::debug;

use crate::location::{Location, LocationId};

/// Ordered set of locations used as both origins and destinations of a
/// travel time query.
///
/// Ids are handed out from a counter that only moves forward, it survives
/// [`LocationRegistry::remove`] and [`LocationRegistry::clear`] so an id is
/// never given out twice.
#[derive(Debug, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    next_id: usize,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a location, returns its id.
    pub fn add(&mut self, lat: f64, lng: f64) -> LocationId {
        let id = LocationId::new(self.next_id);
        self.next_id += 1;

        self.locations.push(Location::new(id, lat, lng));
        debug!("Location {} added at {},{}", id, lat, lng);

        id
    }

    /// Appends an empty `0,0` location to be filled in later.
    pub fn add_empty(&mut self) -> LocationId {
        self.add(0.0, 0.0)
    }

    pub fn add_from_geocode(&mut self, lat: f64, lng: f64) -> LocationId {
        self.add(lat, lng)
    }

    /// Removes the location with the given id, does nothing if it is unknown.
    pub fn remove(&mut self, id: LocationId) {
        if let Some(index) = self.position(id) {
            self.locations.remove(index);
            debug!("Location {} removed", id);
        }
    }

    /// Moves the location with the given id, does nothing if it is unknown.
    pub fn update(&mut self, id: LocationId, lat: f64, lng: f64) {
        if let Some(index) = self.position(id) {
            self.locations[index] = Location::new(id, lat, lng);
        }
    }

    pub fn clear(&mut self) {
        self.locations.clear();
    }

    pub fn get(&self, id: LocationId) -> Option<Location> {
        self.position(id).map(|index| self.locations[index])
    }

    pub fn list(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The locations as the JSON array sent along with a travel times query.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.locations)
    }

    fn position(&self, id: LocationId) -> Option<usize> {
        self.locations.iter().position(|location| location.id == id)
    }
}
