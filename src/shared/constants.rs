/// Earliest accepted observation date (inclusive), as `YYYY-MM-DD`
pub const MIN_OBSERVATION_DATE: &str = "1900-01-01";

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Welcome payload served on `/`
pub const WELCOME_MESSAGE: &str = "Welcome to the pollution declarations API.";
