//! Session Traces
//!
//! A trace is a JSON document describing a device and a sequence of things
//! that happen to it. Replaying it drives a full compass session against a
//! [`SimulatedDevice`].
//!
//! ```json
//! {
//!   "config": { "debug": true },
//!   "device": { "width": 390, "height": 844, "orientation": "portrait-primary", "lockable": true },
//!   "steps": [
//!     { "type": "heading", "headingDegrees": 45 },
//!     { "type": "rotate", "orientation": -90 },
//!     { "type": "lock" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use rose_core::{Compass, Config, Coordinates, GeolocationError, HeadingReading, OrientationDescriptor};

use crate::{LockPolicy, SimulatedDevice, TextRenderer};

/// Trace loading error
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid trace: {0}")]
    Json(#[from] serde_json::Error),
}

/// Device description
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceProfile {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub orientation: OrientationDescriptor,
    #[serde(default)]
    pub lockable: bool,
    #[serde(default)]
    pub lock_policy: LockPolicy,
}

impl DeviceProfile {
    pub fn build(&self) -> SimulatedDevice {
        SimulatedDevice::new(self.width, self.height)
            .with_orientation(self.orientation.clone())
            .with_lock_support(self.lockable)
            .with_lock_policy(self.lock_policy)
    }
}

/// One scripted occurrence
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Sensor sample
    Heading(HeadingReading),
    /// Screen rotation
    Rotate { orientation: OrientationDescriptor },
    /// Lock button pressed while unlocked
    Lock,
    /// Lock button pressed while locked
    Unlock,
    /// User leaves fullscreen outside the app
    Escape,
    /// Geolocation fix
    Location(Coordinates),
    /// Geolocation failure
    LocationError { error: GeolocationError },
}

/// Scripted session
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub config: Config,
    pub device: DeviceProfile,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Trace {
    pub fn from_json(json: &str) -> Result<Self, TraceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Run the whole trace. Events are dispatched after every step.
    pub fn replay(&self) -> Compass<SimulatedDevice, TextRenderer> {
        let mut compass = Compass::new(self.device.build(), TextRenderer::new(), self.config.clone());
        compass.start();
        compass.run();

        for step in &self.steps {
            apply(&mut compass, step);
            let handled = compass.run();
            tracing::trace!("{:?}: {} events", step, handled);
        }

        compass
    }
}

/// Apply one step without dispatching the events it queues
pub fn apply(compass: &mut Compass<SimulatedDevice, TextRenderer>, step: &Step) {
    match step {
        Step::Heading(reading) => compass.provider_mut().sense(*reading),
        Step::Rotate { orientation } => compass.provider_mut().rotate(orientation.clone()),
        Step::Lock => compass.request_lock(true),
        Step::Unlock => compass.request_lock(false),
        Step::Escape => {
            compass.provider_mut().press_escape();
        }
        Step::Location(coords) => compass.provider_mut().fix(*coords),
        Step::LocationError { error } => compass.provider_mut().fail(*error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rose_core::ScreenOrientation;

    #[test]
    fn test_parse_steps() {
        let trace = Trace::from_json(
            r#"{
                "device": { "width": 390, "height": 844, "orientation": 0 },
                "steps": [
                    { "type": "heading", "headingDegrees": 45 },
                    { "type": "heading", "headingDegrees": null, "compassHeadingOverride": 12 },
                    { "type": "rotate", "orientation": "landscape-secondary" },
                    { "type": "lock" },
                    { "type": "escape" },
                    { "type": "location", "latitude": 1.5, "longitude": 2.5 },
                    { "type": "location_error", "error": "timeout" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(trace.config, Config::default());
        assert_eq!(trace.device.orientation, OrientationDescriptor::Angle(0));
        assert!(!trace.device.lockable);
        assert_eq!(trace.steps.len(), 7);
        assert_eq!(trace.steps[0], Step::Heading(HeadingReading::new(Some(45.0))));
        assert_eq!(trace.steps[1], Step::Heading(HeadingReading::new(None).with_override(12.0)));
        assert_eq!(
            trace.steps[2],
            Step::Rotate { orientation: ScreenOrientation::LANDSCAPE_SECONDARY.into() }
        );
        assert_eq!(trace.steps[6], Step::LocationError { error: GeolocationError::Timeout });
    }

    #[test]
    fn test_invalid_trace() {
        assert!(matches!(Trace::from_json("{}"), Err(TraceError::Json(_))));
        assert!(matches!(Trace::from_path("/nonexistent/trace.json"), Err(TraceError::Io(_))));
    }
}
