use bevy::prelude::*;

use crate::player::controller::{PlayerController, PlayerState};

/// First-person camera; its transform is derived from [`PlayerState`].
#[derive(Component)]
pub struct PlayerCamera;

const FOV_DEGREES: f32 = 75.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;

pub fn spawn_camera(
    mut commands: Commands,
    controller: Res<PlayerController>,
    player: Res<PlayerState>,
) {
    // Aspect ratio tracks the window through Bevy's camera system
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        controller.camera_transform(&player),
        PlayerCamera,
    ));
}

pub fn follow_player_system(
    controller: Res<PlayerController>,
    player: Res<PlayerState>,
    mut camera: Single<&mut Transform, With<PlayerCamera>>,
) {
    **camera = controller.camera_transform(&player);
}
