use bevy::prelude::*;

use crate::rendering::materials::setup_block_assets;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_block_assets);
    }
}
