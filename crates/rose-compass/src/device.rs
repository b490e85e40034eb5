//! Simulated Device
//!
//! Scripted capability provider. Tests and trace replay drive it directly;
//! it queues the events a real platform would fire and records every
//! command the compass issues.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smol::channel::Sender;

use rose_core::{
    CapabilityProvider, Coordinates, GeolocationError, GeolocationOptions, HeadingReading,
    LockRejected, LockTicket, OrientationDescriptor, PlatformEvent, ScreenOrientation, WatchId,
};

/// How the device answers orientation lock commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockPolicy {
    #[default]
    Accept,
    Reject,
    /// Never answers
    Hang,
}

/// Command issued by the compass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCommand {
    RequestFullscreen,
    ExitFullscreen,
    LockOrientation(ScreenOrientation),
    UnlockOrientation,
    WatchPosition(WatchId),
}

/// Simulated device
#[derive(Debug)]
pub struct SimulatedDevice {
    screen: (u32, u32),
    orientation: OrientationDescriptor,
    fullscreen: bool,
    lock_support: bool,
    lock_policy: LockPolicy,
    locked_to: Option<ScreenOrientation>,
    events: VecDeque<PlatformEvent>,
    commands: Vec<DeviceCommand>,
    watches: Vec<(WatchId, GeolocationOptions)>,
    next_watch_id: WatchId,
    unanswered: Vec<Sender<Result<(), LockRejected>>>,
}

impl SimulatedDevice {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen: (width, height),
            orientation: OrientationDescriptor::Missing,
            fullscreen: false,
            lock_support: false,
            lock_policy: LockPolicy::Accept,
            locked_to: None,
            events: VecDeque::new(),
            commands: Vec::new(),
            watches: Vec::new(),
            next_watch_id: 1,
            unanswered: Vec::new(),
        }
    }

    /// Typical phone held upright
    pub fn phone() -> Self {
        Self::new(390, 844).with_orientation(ScreenOrientation::PORTRAIT_PRIMARY)
    }

    /// Typical tablet held in its natural landscape position
    pub fn tablet() -> Self {
        Self::new(1280, 800).with_orientation(ScreenOrientation::LANDSCAPE_PRIMARY)
    }

    pub fn with_orientation(mut self, orientation: impl Into<OrientationDescriptor>) -> Self {
        self.orientation = orientation.into();
        self
    }

    pub fn with_lock_support(mut self, supported: bool) -> Self {
        self.lock_support = supported;
        self
    }

    pub fn with_lock_policy(mut self, policy: LockPolicy) -> Self {
        self.lock_policy = policy;
        self
    }

    // ------------------------------------------------------------------
    // Scripting
    // ------------------------------------------------------------------

    /// Queue a sensor sample
    pub fn sense(&mut self, reading: HeadingReading) {
        self.events.push_back(PlatformEvent::DeviceOrientation(reading));
    }

    /// Rotate the screen
    pub fn rotate(&mut self, orientation: impl Into<OrientationDescriptor>) {
        self.orientation = orientation.into();
        self.events.push_back(PlatformEvent::OrientationChange);
    }

    /// User leaves fullscreen outside the app (escape key, system gesture)
    pub fn press_escape(&mut self) -> bool {
        if self.fullscreen {
            self.set_fullscreen(false);
            true
        } else {
            false
        }
    }

    /// Deliver a fix to every watcher
    pub fn fix(&mut self, coords: Coordinates) {
        if self.watches.is_empty() {
            tracing::debug!("No position watchers, fix dropped");
            return;
        }
        self.events.push_back(PlatformEvent::LocationUpdate(coords));
    }

    /// Deliver a geolocation failure to every watcher
    pub fn fail(&mut self, error: GeolocationError) {
        if self.watches.is_empty() {
            tracing::debug!("No position watchers, failure dropped");
            return;
        }
        self.events.push_back(PlatformEvent::LocationError(error));
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    pub fn commands(&self) -> &[DeviceCommand] {
        &self.commands
    }

    pub fn count(&self, command: &DeviceCommand) -> usize {
        self.commands.iter().filter(|c| *c == command).count()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Orientation the platform actually holds, if a lock was accepted
    pub fn locked_to(&self) -> Option<ScreenOrientation> {
        self.locked_to
    }

    pub fn watches(&self) -> &[(WatchId, GeolocationOptions)] {
        &self.watches
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen == fullscreen {
            return;
        }
        self.fullscreen = fullscreen;
        if !fullscreen {
            self.locked_to = None;
        }
        self.events.push_back(PlatformEvent::FullscreenChange);
    }
}

impl CapabilityProvider for SimulatedDevice {
    fn screen_size(&self) -> (u32, u32) {
        self.screen
    }

    fn orientation(&self) -> OrientationDescriptor {
        self.orientation.clone()
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) {
        self.commands.push(DeviceCommand::RequestFullscreen);
        self.set_fullscreen(true);
    }

    fn exit_fullscreen(&mut self) {
        self.commands.push(DeviceCommand::ExitFullscreen);
        self.set_fullscreen(false);
    }

    fn supports_orientation_lock(&self) -> bool {
        self.lock_support
    }

    fn lock_orientation(&mut self, orientation: ScreenOrientation) -> LockTicket {
        self.commands.push(DeviceCommand::LockOrientation(orientation));

        match self.lock_policy {
            LockPolicy::Accept if self.fullscreen => {
                self.locked_to = Some(orientation);
                LockTicket::settled(Ok(()))
            }
            LockPolicy::Accept => LockTicket::settled(Err(LockRejected::new("document not fullscreen"))),
            LockPolicy::Reject => LockTicket::settled(Err(LockRejected::new("orientation lock not allowed"))),
            LockPolicy::Hang => {
                let (tx, ticket) = LockTicket::pending();
                self.unanswered.push(tx);
                ticket
            }
        }
    }

    fn unlock_orientation(&mut self) {
        self.commands.push(DeviceCommand::UnlockOrientation);
        self.locked_to = None;
    }

    fn watch_position(&mut self, options: &GeolocationOptions) -> WatchId {
        let id = self.next_watch_id;
        self.next_watch_id += 1;
        self.watches.push((id, options.clone()));
        self.commands.push(DeviceCommand::WatchPosition(id));
        id
    }

    fn next_event(&mut self) -> Option<PlatformEvent> {
        self.events.pop_front()
    }
}
