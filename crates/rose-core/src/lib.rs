//! Rose Core
//!
//! Platform-agnostic compass logic.
//!
//! # Modules
//! - [`orientation`]: screen orientation tokens and classification
//! - [`heading`]: heading correction relative to the start-up orientation
//! - [`lock`]: orientation lock controller synchronised with fullscreen
//! - [`position`]: last-known position fields
//! - [`platform`]: capability provider and platform events
//! - [`view`]: rendering collaborator
//! - [`session`]: application state and event dispatch
//!
//! # Example
//! ```rust,ignore
//! use rose_core::{Compass, Config};
//!
//! let mut compass = Compass::new(provider, view, Config::default());
//! compass.start();
//! compass.run();
//! ```

pub mod orientation;
pub mod heading;
pub mod lock;
pub mod position;
pub mod platform;
pub mod view;
pub mod session;
mod config;
mod error;

pub use orientation::{
    OrientationAxis, OrientationVariant, ScreenOrientation, CurrentOrientation,
    OrientationDescriptor, ReferenceOrientation, classify,
};
pub use heading::{HeadingCorrector, HeadingReading, adjustment};
pub use lock::{LockState, LockTicket, OrientationLockController};
pub use position::{Coordinates, Position};
pub use platform::{CapabilityProvider, GeolocationOptions, PlatformEvent, WatchId};
pub use view::{CompassView, Popup};
pub use session::{Compass, CompassState};
pub use config::Config;
pub use error::{CompassError, GeolocationError, LockRejected, OrientationError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
