use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub scene_assembled: bool,
    pub arrival_started: bool,
}
