use bevy::prelude::*;

use crate::config::GameConfig;
use crate::player::controller::{PlayerController, PlayerState};
use crate::player::input::{capture_input_system, pointer_lock_system, InputSnapshot, PointerLock};
use crate::player::inventory::hotkey_select_system;
use crate::voxel::world::VoxelWorld;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<GameConfig>()
            .map(|config| config.player.clone())
            .unwrap_or_default();
        let controller = PlayerController::new(settings);

        app
            .insert_resource(controller.spawn())
            .insert_resource(controller)
            .init_resource::<PointerLock>()
            .init_resource::<InputSnapshot>()
            .add_systems(Update, (
                pointer_lock_system,
                capture_input_system,
                hotkey_select_system,
                look_system,
                movement_system,
            ).chain());
    }
}

pub fn look_system(
    snapshot: Res<InputSnapshot>,
    controller: Res<PlayerController>,
    mut player: ResMut<PlayerState>,
) {
    if snapshot.look_delta != Vec2::ZERO {
        player.apply_look(snapshot.look_delta, controller.settings().look_sensitivity);
    }
}

pub fn movement_system(
    time: Res<Time>,
    snapshot: Res<InputSnapshot>,
    controller: Res<PlayerController>,
    world: Res<VoxelWorld>,
    mut player: ResMut<PlayerState>,
) {
    controller.tick(&mut player, &snapshot.movement, time.delta_secs(), &world);
}
