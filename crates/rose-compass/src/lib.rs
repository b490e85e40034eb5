//! Rose Compass - Host Driver
//!
//! Runs the compass outside a browser.
//!
//! # Features
//! - Simulated device standing in for the platform capability provider
//! - Text renderer standing in for the rose and lock button
//! - JSON traces that script a whole session

pub mod device;
pub mod render;
pub mod trace;

pub use device::{DeviceCommand, LockPolicy, SimulatedDevice};
pub use render::{TextRenderer, rotation_transform};
pub use trace::{DeviceProfile, Step, Trace, TraceError};
