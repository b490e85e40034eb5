//! Screen Orientation
//!
//! Normalises whatever the platform reports about screen rotation into a
//! canonical `<axis>-<variant>` token.
//!
//! Token meaning depends on the device's natural shape:
//!
//! | token                 | natural portrait (phone)  | natural landscape (tablet) |
//! |-----------------------|---------------------------|----------------------------|
//! | `portrait-primary`    | normal                    | turned 90° clockwise       |
//! | `portrait-secondary`  | turned 180°               | turned 90° anti-clockwise  |
//! | `landscape-primary`   | turned 90° clockwise      | normal                     |
//! | `landscape-secondary` | turned 90° anti-clockwise | turned 180°                |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::OrientationError;

/// Screen axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrientationAxis {
    Portrait,
    Landscape,
}

impl OrientationAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for OrientationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way round the screen is along its axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrientationVariant {
    Primary,
    Secondary,
}

impl OrientationVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Canonical orientation token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenOrientation {
    pub axis: OrientationAxis,
    pub variant: OrientationVariant,
}

impl ScreenOrientation {
    pub const PORTRAIT_PRIMARY: Self = Self::new(OrientationAxis::Portrait, OrientationVariant::Primary);
    pub const PORTRAIT_SECONDARY: Self = Self::new(OrientationAxis::Portrait, OrientationVariant::Secondary);
    pub const LANDSCAPE_PRIMARY: Self = Self::new(OrientationAxis::Landscape, OrientationVariant::Primary);
    pub const LANDSCAPE_SECONDARY: Self = Self::new(OrientationAxis::Landscape, OrientationVariant::Secondary);

    /// All four tokens
    pub const ALL: [Self; 4] = [
        Self::PORTRAIT_PRIMARY,
        Self::PORTRAIT_SECONDARY,
        Self::LANDSCAPE_PRIMARY,
        Self::LANDSCAPE_SECONDARY,
    ];

    pub const fn new(axis: OrientationAxis, variant: OrientationVariant) -> Self {
        Self { axis, variant }
    }

    /// Map a legacy rotation angle (degrees) to a token.
    ///
    /// Only the four values platforms actually report are accepted.
    pub fn from_angle(degrees: i32) -> Result<Self, OrientationError> {
        match degrees {
            0 => Ok(Self::PORTRAIT_PRIMARY),
            180 => Ok(Self::PORTRAIT_SECONDARY),
            -90 => Ok(Self::LANDSCAPE_PRIMARY),
            90 => Ok(Self::LANDSCAPE_SECONDARY),
            other => Err(OrientationError::InvalidAngle(other)),
        }
    }

    /// Token string, e.g. `landscape-secondary`
    pub fn token(&self) -> &'static str {
        match (self.axis, self.variant) {
            (OrientationAxis::Portrait, OrientationVariant::Primary) => "portrait-primary",
            (OrientationAxis::Portrait, OrientationVariant::Secondary) => "portrait-secondary",
            (OrientationAxis::Landscape, OrientationVariant::Primary) => "landscape-primary",
            (OrientationAxis::Landscape, OrientationVariant::Secondary) => "landscape-secondary",
        }
    }
}

impl fmt::Display for ScreenOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ScreenOrientation {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (axis, variant) = s
            .split_once('-')
            .ok_or_else(|| OrientationError::InvalidToken(s.to_string()))?;

        let axis = match axis {
            "portrait" => OrientationAxis::Portrait,
            "landscape" => OrientationAxis::Landscape,
            _ => return Err(OrientationError::InvalidToken(s.to_string())),
        };
        let variant = match variant {
            "primary" => OrientationVariant::Primary,
            "secondary" => OrientationVariant::Secondary,
            _ => return Err(OrientationError::InvalidToken(s.to_string())),
        };

        Ok(Self::new(axis, variant))
    }
}

/// Raw orientation signal as the platform exposes it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrientationDescriptor {
    /// Canonical string token (Screen Orientation API)
    Token(String),
    /// Legacy rotation angle in degrees
    Angle(i32),
    /// Platform exposes neither
    #[default]
    Missing,
}

impl TryFrom<&OrientationDescriptor> for ScreenOrientation {
    type Error = OrientationError;

    fn try_from(descriptor: &OrientationDescriptor) -> Result<Self, Self::Error> {
        match descriptor {
            OrientationDescriptor::Token(token) => token.parse(),
            OrientationDescriptor::Angle(degrees) => Self::from_angle(*degrees),
            OrientationDescriptor::Missing => Err(OrientationError::Missing),
        }
    }
}

impl From<ScreenOrientation> for OrientationDescriptor {
    fn from(orientation: ScreenOrientation) -> Self {
        Self::Token(orientation.token().to_string())
    }
}

/// Orientation derived for one event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentOrientation {
    Known(ScreenOrientation),
    Unavailable,
}

impl CurrentOrientation {
    pub fn known(&self) -> Option<ScreenOrientation> {
        match self {
            Self::Known(orientation) => Some(*orientation),
            Self::Unavailable => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Known(orientation) => orientation.token(),
            Self::Unavailable => "unavailable",
        }
    }
}

impl From<ScreenOrientation> for CurrentOrientation {
    fn from(orientation: ScreenOrientation) -> Self {
        Self::Known(orientation)
    }
}

impl fmt::Display for CurrentOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Classify a raw descriptor.
///
/// Anything that cannot be classified becomes [`CurrentOrientation::Unavailable`];
/// heading correction then falls back to the reference term alone.
pub fn classify(descriptor: &OrientationDescriptor) -> CurrentOrientation {
    match ScreenOrientation::try_from(descriptor) {
        Ok(orientation) => CurrentOrientation::Known(orientation),
        Err(err) => {
            tracing::debug!("Orientation unavailable: {}", err);
            CurrentOrientation::Unavailable
        }
    }
}

/// Axis the device was held in when the session started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceOrientation(OrientationAxis);

impl ReferenceOrientation {
    pub const PORTRAIT: Self = Self(OrientationAxis::Portrait);
    pub const LANDSCAPE: Self = Self(OrientationAxis::Landscape);

    /// Wider than tall is landscape; square counts as portrait.
    pub fn from_screen(width: u32, height: u32) -> Self {
        if width > height {
            Self::LANDSCAPE
        } else {
            Self::PORTRAIT
        }
    }

    pub fn axis(&self) -> OrientationAxis {
        self.0
    }

    pub fn is_landscape(&self) -> bool {
        self.0 == OrientationAxis::Landscape
    }
}

impl From<OrientationAxis> for ReferenceOrientation {
    fn from(axis: OrientationAxis) -> Self {
        Self(axis)
    }
}

impl fmt::Display for ReferenceOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
