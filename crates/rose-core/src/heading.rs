//! Heading Correction
//!
//! The sensor reports heading in the device's physical frame while the
//! rendered rose rotates with the screen. The adjustment re-aligns the two
//! so the needle tracks true heading however the device is held.
//!
//! Output is never clamped or wrapped; the renderer treats it modulo 360°.

use serde::{Deserialize, Serialize};

use crate::{CompassError, CurrentOrientation, OrientationVariant, ReferenceOrientation};

/// One device-orientation sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingReading {
    /// Standard heading (alpha), if the sensor produced one
    #[serde(default)]
    pub heading_degrees: Option<f64>,
    /// Non-standard compass heading; wins over `heading_degrees` when present
    #[serde(default)]
    pub compass_heading_override: Option<f64>,
}

impl HeadingReading {
    pub fn new(heading_degrees: Option<f64>) -> Self {
        Self { heading_degrees, compass_heading_override: None }
    }

    pub fn with_override(mut self, heading: f64) -> Self {
        self.compass_heading_override = Some(heading);
        self
    }

    /// Heading to correct, if any
    pub fn raw_heading(&self) -> Option<f64> {
        self.compass_heading_override.or(self.heading_degrees)
    }
}

/// Degrees to add to a raw heading. Pure and total.
///
/// Steps are applied in order:
/// 1. landscape reference: -90
/// 2. axis differs from reference: -270 for a landscape reference, else -90
/// 3. secondary variant: -180
///
/// Steps 2 and 3 are skipped when the current orientation is unavailable.
pub fn adjustment(reference: ReferenceOrientation, current: CurrentOrientation) -> f64 {
    let mut adjustment = 0.0;

    if reference.is_landscape() {
        adjustment -= 90.0;
    }

    if let CurrentOrientation::Known(current) = current {
        if current.axis != reference.axis() {
            adjustment -= if reference.is_landscape() { 270.0 } else { 90.0 };
        }

        if current.variant == OrientationVariant::Secondary {
            adjustment -= 180.0;
        }
    }

    adjustment
}

/// Corrects raw headings against a fixed reference orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingCorrector {
    reference: ReferenceOrientation,
}

impl HeadingCorrector {
    pub fn new(reference: ReferenceOrientation) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> ReferenceOrientation {
        self.reference
    }

    /// `raw + adjustment(reference, current)`, or `HeadingUnavailable`
    pub fn correct(&self, raw: Option<f64>, current: CurrentOrientation) -> Result<f64, CompassError> {
        let raw = raw.ok_or(CompassError::HeadingUnavailable)?;
        Ok(raw + adjustment(self.reference, current))
    }

    pub fn correct_reading(&self, reading: &HeadingReading, current: CurrentOrientation) -> Result<f64, CompassError> {
        self.correct(reading.raw_heading(), current)
    }
}
