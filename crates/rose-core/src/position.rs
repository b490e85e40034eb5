//! Current position
//!
//! Each field is independently nullable. Latitude and longitude only ever
//! come from geolocation; heading only from orientation events.

use serde::{Deserialize, Serialize};

/// Geographic coordinates from one geolocation fix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub accuracy: Option<f64>,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude, accuracy: None }
    }
}

/// Last-known position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Corrected heading in degrees, unwrapped
    pub heading: Option<f64>,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_location(&mut self, coords: Coordinates) {
        self.latitude = Some(coords.latitude);
        self.longitude = Some(coords.longitude);
    }

    pub fn update_heading(&mut self, heading: f64) {
        self.heading = Some(heading);
    }

    pub fn has_fix(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
