pub mod editor;
pub mod raycast;

use bevy::prelude::*;

use crate::camera::controller::{follow_player_system, PlayerCamera};
use crate::config::GameConfig;
use crate::player::controller::PlayerState;
use crate::player::input::InputSnapshot;
use crate::rendering::materials::BlockAssets;
use crate::voxel::world::VoxelWorld;
use editor::BlockEditor;
use raycast::{raycast_blocks, PointerIntersection};

/// Resource tracking the currently targeted block
#[derive(Resource, Default, Debug)]
pub struct TargetedBlock {
    pub hit: Option<PointerIntersection>,
}

/// System to update the targeted block based on camera look direction
pub fn update_targeted_block(
    camera: Single<&Transform, With<PlayerCamera>>,
    world: Res<VoxelWorld>,
    config: Res<GameConfig>,
    mut targeted: ResMut<TargetedBlock>,
) {
    let origin = camera.translation;
    let direction = camera.forward().as_vec3();
    targeted.hit = raycast_blocks(&world, origin, direction, config.interaction.reach);
}

/// Apply held break/place buttons to the targeted block
pub fn edit_blocks_system(
    snapshot: Res<InputSnapshot>,
    player: Res<PlayerState>,
    mut targeted: ResMut<TargetedBlock>,
    mut world: ResMut<VoxelWorld>,
) {
    let outcome = BlockEditor::tick(&mut world, targeted.hit, snapshot.edit, player.selected);
    // A broken target no longer exists for the highlight or the HUD
    if outcome.broken.is_some() {
        targeted.hit = None;
    }
}

/// System to render block highlight wireframe
pub fn render_block_highlight(targeted: Res<TargetedBlock>, mut gizmos: Gizmos) {
    if let Some(hit) = targeted.hit {
        let center = BlockAssets::voxel_center(hit.coord);
        let half_size = Vec3::splat(0.505); // Slightly larger than block

        gizmos.cube(
            Transform::from_translation(center).with_scale(half_size * 2.0),
            Color::srgba(1.0, 1.0, 1.0, 0.8),
        );
    }
}

/// Plugin for block interaction
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<TargetedBlock>()
            .add_systems(Update, (
                update_targeted_block,
                edit_blocks_system,
                render_block_highlight,
            ).chain().after(follow_player_system));
    }
}
