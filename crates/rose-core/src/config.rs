//! Compass Configuration

use serde::{Deserialize, Serialize};

use crate::GeolocationOptions;

/// Compass configuration options
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Send orientation debug output to the view
    pub debug: bool,

    /// Options for the position subscription
    pub geolocation: GeolocationOptions,
}

impl Config {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
