pub mod camera_settings;
pub mod navigation_settings;
pub mod palette;
pub mod scene_settings;
