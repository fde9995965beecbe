/// Frame-rate overlay updates.
pub mod fps_tracking;
