//! Rose Compass - Main Entry Point
//!
//! Replays a session trace and prints what the compass rendered.

use anyhow::Context;
use rose_compass::Trace;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: rose-compass <trace.json>")?;

    tracing::info!("Rose Compass v{} replaying {}", rose_core::VERSION, path);

    let trace = Trace::from_path(&path).with_context(|| format!("loading {}", path))?;
    let mut compass = trace.replay();

    for line in compass.view_mut().drain_lines() {
        println!("{}", line);
    }

    let state = compass.state();
    let position = state.position();
    println!("--");
    println!("reference: {}", state.reference());
    println!("lock: {:?}", state.lock().state());
    println!("heading: {}", position.heading.map_or("-".to_string(), |h| h.to_string()));
    println!(
        "position: {}",
        match (position.latitude, position.longitude) {
            (Some(lat), Some(lng)) => format!("{:.5}, {:.5}", lat, lng),
            _ => "-".to_string(),
        }
    );
    println!("frame: {}", compass.view().summary());

    Ok(())
}
