/// Manifest loading and handle fan-out.
pub mod manifest_loader;

/// Loading progress flags driving the state machine.
pub mod progress;
