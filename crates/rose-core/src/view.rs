//! Rendering collaborator

use crate::{CurrentOrientation, ReferenceOrientation};

/// User-visible popups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Popup {
    /// Device cannot report a heading
    NoOrientation,
}

impl Popup {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoOrientation => "noorientation",
        }
    }
}

/// What the compass pushes to the screen
pub trait CompassView {
    /// Rotate the rose. Any value is valid; interpret modulo 360°.
    fn rotate_rose(&mut self, degrees: f64);

    /// Toggle the lock button's active state
    fn set_lock_active(&mut self, active: bool);

    fn show_popup(&mut self, popup: Popup);

    /// Debug output, only called when `Config::debug` is set
    fn show_debug_orientation(&mut self, _current: CurrentOrientation) {}

    /// Debug output, only called when `Config::debug` is set
    fn show_debug_reference(&mut self, _reference: ReferenceOrientation) {}
}
