//! Error types
//!
//! None of these are fatal to a session. They describe how a handler
//! degraded, and callers decide whether anything is shown to the user.

use serde::{Deserialize, Serialize};

/// Compass error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompassError {
    #[error("Device heading unavailable")]
    HeadingUnavailable,

    #[error("Screen orientation unknown: {0}")]
    OrientationUnknown(#[from] OrientationError),

    #[error("Orientation lock rejected: {0}")]
    LockRejected(#[from] LockRejected),

    #[error("Geolocation failed: {0}")]
    Geolocation(#[from] GeolocationError),
}

/// Orientation descriptor could not be turned into a canonical token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrientationError {
    #[error("unrecognised orientation token {0:?}")]
    InvalidToken(String),

    #[error("unsupported rotation angle {0}")]
    InvalidAngle(i32),

    #[error("no orientation descriptor available")]
    Missing,
}

/// Platform refused an orientation lock
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct LockRejected {
    pub reason: String,
}

impl LockRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Geolocation error, one per platform error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationError {
    #[error("User denied geolocation permission")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Geolocation request timed out")]
    Timeout,
}

impl GeolocationError {
    /// Platform error code (1, 2 or 3)
    pub fn code(&self) -> u16 {
        match self {
            Self::PermissionDenied => 1,
            Self::PositionUnavailable => 2,
            Self::Timeout => 3,
        }
    }
}
