use bevy::prelude::*;
use crate::camera::controller::{spawn_camera, follow_player_system};
use crate::player::plugin::movement_system;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, follow_player_system.after(movement_system));
    }
}
