//! Text Renderer
//!
//! Renders view updates as lines of text, one per change.

use std::fmt::Write;

use rose_core::{CompassView, CurrentOrientation, Popup, ReferenceOrientation};

/// Rotation as a CSS transform
pub fn rotation_transform(degrees: f64) -> String {
    format!("rotateZ({}deg)", degrees)
}

/// Renderer state and output
#[derive(Debug, Default)]
pub struct TextRenderer {
    rotation: Option<f64>,
    lock_active: bool,
    popups: Vec<Popup>,
    lines: Vec<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rotation applied to the rose
    pub fn rotation(&self) -> Option<f64> {
        self.rotation
    }

    /// Rotation folded into [0, 360)
    pub fn bearing(&self) -> Option<f64> {
        self.rotation.map(|deg| deg.rem_euclid(360.0))
    }

    pub fn is_lock_active(&self) -> bool {
        self.lock_active
    }

    pub fn popups(&self) -> &[Popup] {
        &self.popups
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take rendered lines, leaving the state in place
    pub fn drain_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// One-line summary of the current frame
    pub fn summary(&self) -> String {
        let mut out = String::new();
        match self.rotation {
            Some(deg) => {
                let _ = write!(out, "rose {}", rotation_transform(deg));
            }
            None => out.push_str("rose static"),
        }
        let _ = write!(out, ", lock button {}", if self.lock_active { "active" } else { "inactive" });
        out
    }
}

impl CompassView for TextRenderer {
    fn rotate_rose(&mut self, degrees: f64) {
        self.rotation = Some(degrees);
        self.lines.push(format!("rose: {}", rotation_transform(degrees)));
    }

    fn set_lock_active(&mut self, active: bool) {
        self.lock_active = active;
        let change = if active { "add" } else { "remove" };
        self.lines.push(format!("btn-lock-orientation: classList.{}(\"active\")", change));
    }

    fn show_popup(&mut self, popup: Popup) {
        self.popups.push(popup);
        self.lines.push(format!("popup: {}", popup.name()));
    }

    fn show_debug_orientation(&mut self, current: CurrentOrientation) {
        self.lines.push(format!("debug-orientation: {}", current));
    }

    fn show_debug_reference(&mut self, reference: ReferenceOrientation) {
        self.lines.push(format!("debug-orientation-default: {}", reference));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_transform() {
        assert_eq!(rotation_transform(-45.0), "rotateZ(-45deg)");
        assert_eq!(rotation_transform(12.5), "rotateZ(12.5deg)");
    }

    #[test]
    fn test_bearing_wraps() {
        let mut renderer = TextRenderer::new();
        assert_eq!(renderer.bearing(), None);

        renderer.rotate_rose(-260.0);
        assert_eq!(renderer.bearing(), Some(100.0));

        renderer.rotate_rose(-360.0);
        assert_eq!(renderer.bearing(), Some(0.0));
    }

    #[test]
    fn test_lines() {
        let mut renderer = TextRenderer::new();
        renderer.rotate_rose(10.0);
        renderer.set_lock_active(true);
        renderer.show_popup(Popup::NoOrientation);

        assert_eq!(
            renderer.drain_lines(),
            vec![
                "rose: rotateZ(10deg)".to_string(),
                "btn-lock-orientation: classList.add(\"active\")".to_string(),
                "popup: noorientation".to_string(),
            ]
        );
        assert!(renderer.lines().is_empty());
        assert_eq!(renderer.summary(), "rose rotateZ(10deg), lock button active");
    }
}
