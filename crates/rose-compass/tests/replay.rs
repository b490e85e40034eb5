//! Trace replay tests
//!
//! Full sessions against the simulated device, checked through the
//! rendered output and the commands the device received.

use rose_compass::*;
use rose_core::{
    CapabilityProvider, Compass, Config, Coordinates, GeolocationOptions, HeadingReading, LockState, OrientationDescriptor, Popup,
    ReferenceOrientation, ScreenOrientation,
};

const PHONE_LOCK: &str = include_str!("../traces/phone_lock.json");
const TABLET_NO_LOCK: &str = include_str!("../traces/tablet_no_lock.json");

// ============================================================================
// BUNDLED TRACES
// ============================================================================

#[test]
fn test_phone_lock_trace() {
    let trace = Trace::from_json(PHONE_LOCK).unwrap();
    let compass = trace.replay();
    let (device, renderer, state) = compass.into_parts();

    assert_eq!(
        renderer.lines(),
        [
            "rose: rotateZ(45deg)",
            "btn-lock-orientation: classList.remove(\"active\")",
            "rose: rotateZ(-45deg)",
            "btn-lock-orientation: classList.add(\"active\")",
            "rose: rotateZ(-80deg)",
            "btn-lock-orientation: classList.remove(\"active\")",
            "popup: noorientation",
        ]
    );

    assert_eq!(
        device.commands(),
        [
            DeviceCommand::WatchPosition(1),
            DeviceCommand::UnlockOrientation,
            DeviceCommand::ExitFullscreen,
            DeviceCommand::RequestFullscreen,
            DeviceCommand::LockOrientation(ScreenOrientation::LANDSCAPE_PRIMARY),
            DeviceCommand::UnlockOrientation,
            DeviceCommand::ExitFullscreen,
        ]
    );

    assert_eq!(state.reference(), ReferenceOrientation::PORTRAIT);
    assert_eq!(state.lock().state(), LockState::Unlocked);
    assert!(state.heading_warning_shown());
    assert_eq!(state.position().heading, Some(-80.0));
    assert_eq!(state.position().latitude, Some(59.3293));
    assert_eq!(state.position().longitude, Some(18.0686));
    assert_eq!(device.locked_to(), None);
    assert!(!device.is_fullscreen());
}

#[test]
fn test_tablet_trace() {
    let trace = Trace::from_json(TABLET_NO_LOCK).unwrap();
    let compass = trace.replay();
    let (device, renderer, state) = compass.into_parts();

    assert_eq!(
        renderer.lines(),
        [
            "debug-orientation-default: landscape",
            "debug-orientation: landscape-primary",
            "rose: rotateZ(10deg)",
            "debug-orientation: landscape-secondary",
            "rose: rotateZ(-260deg)",
            "debug-orientation: portrait-primary",
            "rose: rotateZ(-360deg)",
            "debug-orientation: unavailable",
            "rose: rotateZ(-70deg)",
        ]
    );

    // Only the geolocation subscription; lock requests were no-ops
    assert_eq!(device.commands(), [DeviceCommand::WatchPosition(1)]);
    assert_eq!(state.lock().state(), LockState::Unlocked);
    assert!(!renderer.is_lock_active());
    assert_eq!(renderer.bearing(), Some(290.0));
}

// ============================================================================
// LOCK SCENARIOS
// ============================================================================

#[test]
fn test_lock_survives_rotation_while_fullscreen() {
    let device = SimulatedDevice::phone().with_lock_support(true);
    let mut compass = Compass::new(device, TextRenderer::new(), Config::default());
    compass.start();

    compass.request_lock(true);
    compass.run();
    assert_eq!(compass.provider().locked_to(), Some(ScreenOrientation::PORTRAIT_PRIMARY));

    compass.provider_mut().rotate(ScreenOrientation::PORTRAIT_SECONDARY);
    compass.run();

    assert_eq!(compass.state().lock().state(), LockState::Locked);
    assert_eq!(compass.provider().locked_to(), Some(ScreenOrientation::PORTRAIT_SECONDARY));
    assert!(compass.view().is_lock_active());
}

#[test]
fn test_rejected_lock_leaves_indicator_on() {
    let device = SimulatedDevice::phone()
        .with_lock_support(true)
        .with_lock_policy(LockPolicy::Reject);
    let mut compass = Compass::new(device, TextRenderer::new(), Config::default());

    compass.request_lock(true);
    compass.run();

    assert_eq!(compass.provider().count(&DeviceCommand::LockOrientation(ScreenOrientation::PORTRAIT_PRIMARY)), 1);
    assert_eq!(compass.provider().locked_to(), None);
    assert_eq!(compass.state().lock().state(), LockState::Locked);
    assert!(compass.view().is_lock_active());
}

#[test]
fn test_unanswered_lock_is_not_awaited() {
    let device = SimulatedDevice::phone()
        .with_lock_support(true)
        .with_lock_policy(LockPolicy::Hang);
    let mut compass = Compass::new(device, TextRenderer::new(), Config::default());

    compass.request_lock(true);
    compass.run();
    compass.provider_mut().sense(HeadingReading::new(Some(5.0)));
    compass.run();

    assert_eq!(compass.state().lock().pending_tickets(), 1);
    assert_eq!(compass.view().rotation(), Some(5.0));
}

#[test]
fn test_unanswered_locks_dropped_on_unlock() {
    let device = SimulatedDevice::phone()
        .with_lock_support(true)
        .with_lock_policy(LockPolicy::Hang);
    let mut compass = Compass::new(device, TextRenderer::new(), Config::default());

    for _ in 0..50 {
        compass.request_lock(true);
        compass.run();
        assert_eq!(compass.state().lock().pending_tickets(), 1);

        compass.request_lock(false);
        compass.run();
    }

    assert_eq!(compass.state().lock().state(), LockState::Unlocked);
    assert_eq!(compass.state().lock().pending_tickets(), 0);
    assert_eq!(compass.provider().count(&DeviceCommand::LockOrientation(ScreenOrientation::PORTRAIT_PRIMARY)), 50);
}

#[test]
fn test_escape_while_locked() {
    let device = SimulatedDevice::phone().with_lock_support(true);
    let mut compass = Compass::new(device, TextRenderer::new(), Config::default());

    compass.request_lock(true);
    compass.run();
    compass.provider_mut().clear_commands();

    assert!(compass.provider_mut().press_escape());
    compass.run();

    let device = compass.provider();
    assert_eq!(device.count(&DeviceCommand::UnlockOrientation), 1);
    assert_eq!(device.count(&DeviceCommand::ExitFullscreen), 1);
    assert_eq!(device.commands().len(), 2);
    assert_eq!(compass.state().lock().state(), LockState::Unlocked);
    assert!(!compass.view().is_lock_active());
}

#[test]
fn test_unknown_orientation_skips_lock_command() {
    let device = SimulatedDevice::phone()
        .with_orientation(OrientationDescriptor::Missing)
        .with_lock_support(true);
    let mut compass = Compass::new(device, TextRenderer::new(), Config::default());

    compass.request_lock(true);
    compass.run();

    assert_eq!(compass.provider().commands(), [DeviceCommand::RequestFullscreen]);
    assert_eq!(compass.state().lock().state(), LockState::Locked);
}

// ============================================================================
// HEADING SCENARIOS
// ============================================================================

#[test]
fn test_missing_heading_popup_once() {
    let mut compass = Compass::new(SimulatedDevice::phone(), TextRenderer::new(), Config::default());

    for _ in 0..10 {
        compass.provider_mut().sense(HeadingReading::new(None));
    }
    assert_eq!(compass.run(), 10);

    assert_eq!(compass.view().popups(), [Popup::NoOrientation]);
    assert_eq!(compass.view().rotation(), None);
    assert_eq!(compass.view().summary(), "rose static, lock button inactive");
}

#[test]
fn test_fix_before_start_is_dropped() {
    let mut compass = Compass::new(SimulatedDevice::phone(), TextRenderer::new(), Config::default());

    compass.provider_mut().fix(Coordinates::new(10.0, 20.0));
    compass.run();
    assert_eq!(compass.state().position().latitude, None);

    compass.start();
    compass.provider_mut().fix(Coordinates::new(10.0, 20.0));
    compass.run();
    assert_eq!(compass.state().position().latitude, Some(10.0));
    assert_eq!(compass.provider().watches().len(), 1);
}

#[test]
fn test_configured_geolocation_options_reach_device() {
    let options = GeolocationOptions {
        enable_high_accuracy: true,
        maximum_age_ms: 5_000,
        timeout_ms: 1_000,
    };
    let config = Config { geolocation: options.clone(), ..Config::default() };
    let mut compass = Compass::new(SimulatedDevice::phone(), TextRenderer::new(), config);

    compass.start();

    let watches = compass.provider().watches();
    assert_eq!(watches.len(), 1);
    assert_eq!(watches[0].1, options);
    assert_ne!(watches[0].1, GeolocationOptions::default());
}
