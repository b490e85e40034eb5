//! Capability Provider
//!
//! One provider is chosen at start-up and hides every platform difference
//! (vendor-prefixed fullscreen calls, legacy orientation angles, and so on)
//! behind a fixed interface.

use serde::{Deserialize, Serialize};

use crate::{Coordinates, GeolocationError, HeadingReading, LockTicket, OrientationDescriptor, ScreenOrientation};

/// Geolocation subscription options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationOptions {
    pub enable_high_accuracy: bool,
    /// Oldest cached fix accepted (ms)
    pub maximum_age_ms: u64,
    pub timeout_ms: u64,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: false,
            maximum_age_ms: 30_000,
            timeout_ms: 27_000,
        }
    }
}

/// Geolocation subscription handle
pub type WatchId = u64;

/// Event delivered by the platform's dispatch loop
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// Device orientation sensor sample
    DeviceOrientation(HeadingReading),
    /// Fullscreen entered or left
    FullscreenChange,
    /// Screen rotated
    OrientationChange,
    /// Geolocation success callback
    LocationUpdate(Coordinates),
    /// Geolocation failure callback
    LocationError(GeolocationError),
}

/// Everything the compass needs from the platform
pub trait CapabilityProvider {
    /// Screen width and height in pixels
    fn screen_size(&self) -> (u32, u32);

    /// Current raw orientation descriptor
    fn orientation(&self) -> OrientationDescriptor;

    fn is_fullscreen(&self) -> bool;

    /// Fire-and-forget
    fn request_fullscreen(&mut self);

    /// Fire-and-forget
    fn exit_fullscreen(&mut self);

    /// Whether programmatic orientation lock exists at all
    fn supports_orientation_lock(&self) -> bool;

    /// Start an asynchronous lock. The outcome arrives on the ticket.
    fn lock_orientation(&mut self, orientation: ScreenOrientation) -> LockTicket;

    fn unlock_orientation(&mut self);

    /// Long-lived geolocation subscription. Fixes and failures arrive as
    /// [`PlatformEvent::LocationUpdate`] / [`PlatformEvent::LocationError`].
    fn watch_position(&mut self, options: &GeolocationOptions) -> WatchId;

    /// Next queued event, or `None` when the loop is idle
    fn next_event(&mut self) -> Option<PlatformEvent>;
}
