use bevy::prelude::*;
use brain_craft::config::ConfigPlugin;
use brain_craft::voxel::plugin::VoxelPlugin;
use brain_craft::rendering::plugin::RenderingPlugin;
use brain_craft::player::plugin::PlayerPlugin;
use brain_craft::camera::plugin::CameraPlugin;
use brain_craft::interaction::InteractionPlugin;
use brain_craft::ui::HudPlugin;
use brain_craft::environment::AtmospherePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "BrainCraft".into(),
                ..default()
            }),
            ..default()
        }))
        // Config first: the plugins below read it while building
        .add_plugins(ConfigPlugin::default())
        .add_plugins(RenderingPlugin)
        .add_plugins(VoxelPlugin)
        .add_plugins(PlayerPlugin)
        .add_plugins(CameraPlugin)
        .add_plugins(InteractionPlugin)
        .add_plugins(HudPlugin)
        .add_plugins(AtmospherePlugin)
        .run();
}
