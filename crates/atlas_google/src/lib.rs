pub mod distance_matrix;
pub mod geocode;
pub mod google_api;
pub mod google_maps_client;
pub mod lat_lng;

/// Status Google uses for a successful response or matrix element.
pub const STATUS_OK: &str = "OK";
