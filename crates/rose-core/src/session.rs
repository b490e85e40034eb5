//! Compass Session
//!
//! All mutable application state lives in one [`CompassState`] value. The
//! platform's dispatch loop hands it one event at a time; nothing here
//! blocks or spawns.

use crate::{
    CapabilityProvider, CompassError, CompassView, Config, Coordinates, GeolocationError,
    HeadingCorrector, HeadingReading, OrientationLockController, PlatformEvent, Popup, Position,
    ReferenceOrientation, WatchId, classify,
};

/// Application state for one session
#[derive(Debug)]
pub struct CompassState {
    config: Config,
    position: Position,
    corrector: HeadingCorrector,
    lock: OrientationLockController,
    heading_warning_shown: bool,
    watch: Option<WatchId>,
}

impl CompassState {
    /// Session initialisation.
    ///
    /// Captures the reference orientation from the screen size and probes
    /// lock support. Both are fixed for the rest of the session.
    pub fn init<P: CapabilityProvider + ?Sized>(config: Config, provider: &P) -> Self {
        let (width, height) = provider.screen_size();
        let reference = ReferenceOrientation::from_screen(width, height);
        let lockable = provider.supports_orientation_lock();

        tracing::info!(
            "Compass session started: {}x{} screen, reference {}, lockable {}",
            width, height, reference, lockable
        );

        Self {
            config,
            position: Position::new(),
            corrector: HeadingCorrector::new(reference),
            lock: OrientationLockController::new(lockable),
            heading_warning_shown: false,
            watch: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn reference(&self) -> ReferenceOrientation {
        self.corrector.reference()
    }

    pub fn lock(&self) -> &OrientationLockController {
        &self.lock
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn heading_warning_shown(&self) -> bool {
        self.heading_warning_shown
    }

    pub fn watch_id(&self) -> Option<WatchId> {
        self.watch
    }

    /// Subscribe to geolocation. The handle is kept for the whole session.
    pub fn start<P, V>(&mut self, provider: &mut P, view: &mut V)
    where
        P: CapabilityProvider + ?Sized,
        V: CompassView + ?Sized,
    {
        if self.config.debug {
            view.show_debug_reference(self.reference());
        }

        if self.watch.is_none() {
            let id = provider.watch_position(&self.config.geolocation);
            tracing::debug!("Watching position (id {})", id);
            self.watch = Some(id);
        }
    }

    /// Correct and render one sensor sample
    pub fn on_heading_change<P, V>(
        &mut self,
        reading: &HeadingReading,
        provider: &P,
        view: &mut V,
    ) -> Result<f64, CompassError>
    where
        P: CapabilityProvider + ?Sized,
        V: CompassView + ?Sized,
    {
        let current = classify(&provider.orientation());

        match self.corrector.correct_reading(reading, current) {
            Ok(heading) => {
                if self.config.debug {
                    view.show_debug_orientation(current);
                }
                self.position.update_heading(heading);
                view.rotate_rose(heading);
                Ok(heading)
            }
            Err(err) => {
                self.show_heading_warning(view);
                Err(err)
            }
        }
    }

    /// Fullscreen or screen orientation changed
    pub fn on_fullscreen_change<P, V>(&mut self, provider: &mut P, view: &mut V)
    where
        P: CapabilityProvider + ?Sized,
        V: CompassView + ?Sized,
    {
        self.lock.on_fullscreen_change(provider, view);
    }

    pub fn request_lock<P, V>(&mut self, lock: bool, provider: &mut P, view: &mut V)
    where
        P: CapabilityProvider + ?Sized,
        V: CompassView + ?Sized,
    {
        self.lock.request_lock(lock, provider, view);
    }

    pub fn on_location_update(&mut self, coords: Coordinates) {
        tracing::debug!("Location {:.5}, {:.5}", coords.latitude, coords.longitude);
        self.position.update_location(coords);
    }

    /// Diagnostic only; the last-known position is kept.
    pub fn on_location_error(&mut self, error: GeolocationError) -> CompassError {
        tracing::warn!("Location fail (code {}): {}", error.code(), error);
        CompassError::Geolocation(error)
    }

    /// Route one platform event to its handler
    pub fn handle_event<P, V>(
        &mut self,
        event: PlatformEvent,
        provider: &mut P,
        view: &mut V,
    ) -> Result<(), CompassError>
    where
        P: CapabilityProvider + ?Sized,
        V: CompassView + ?Sized,
    {
        match event {
            PlatformEvent::DeviceOrientation(reading) => {
                self.on_heading_change(&reading, &*provider, view)?;
            }
            PlatformEvent::FullscreenChange | PlatformEvent::OrientationChange => {
                self.on_fullscreen_change(provider, view);
            }
            PlatformEvent::LocationUpdate(coords) => self.on_location_update(coords),
            PlatformEvent::LocationError(error) => return Err(self.on_location_error(error)),
        }
        Ok(())
    }

    fn show_heading_warning<V: CompassView + ?Sized>(&mut self, view: &mut V) {
        if !self.heading_warning_shown {
            tracing::warn!("Device heading unavailable");
            view.show_popup(Popup::NoOrientation);
            self.heading_warning_shown = true;
        }
    }
}

/// A running compass: provider, view, and session state
pub struct Compass<P, V> {
    provider: P,
    view: V,
    state: CompassState,
}

impl<P: CapabilityProvider, V: CompassView> Compass<P, V> {
    /// Create a compass; the reference orientation is captured here
    pub fn new(provider: P, view: V, config: Config) -> Self {
        let state = CompassState::init(config, &provider);
        Self { provider, view, state }
    }

    /// Subscribe to the platform
    pub fn start(&mut self) {
        self.state.start(&mut self.provider, &mut self.view);
    }

    /// Lock button pressed
    pub fn request_lock(&mut self, lock: bool) {
        self.state.request_lock(lock, &mut self.provider, &mut self.view);
    }

    /// Dispatch one queued event. Returns `false` when the queue is empty.
    pub fn step(&mut self) -> bool {
        let Some(event) = self.provider.next_event() else {
            return false;
        };

        if let Err(err) = self.state.handle_event(event, &mut self.provider, &mut self.view) {
            tracing::debug!("Event degraded: {}", err);
        }
        true
    }

    /// Dispatch until the queue is empty. Returns the number of events handled.
    pub fn run(&mut self) -> usize {
        let mut handled = 0;
        while self.step() {
            handled += 1;
        }
        handled
    }

    pub fn state(&self) -> &CompassState {
        &self.state
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (P, V, CompassState) {
        (self.provider, self.view, self.state)
    }
}
