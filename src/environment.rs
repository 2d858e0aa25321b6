use bevy::prelude::*;
use rand::Rng;

use crate::voxel::plugin::{generate_world, WorldRng};
use crate::voxel::types::hex_to_color;

const NEURAL_LIGHT_COUNT: usize = 5;
const NEURAL_LIGHT_RANGE: f32 = 30.0;
/// Lumens corresponding to an intensity factor of 1.0
const NEURAL_LIGHT_POWER: f32 = 400_000.0;
const PULSE_BASE: f32 = 0.5;
const PULSE_AMPLITUDE: f32 = 0.3;
const PULSE_RATE: f32 = 2.0;

/// A pulsing green point light; `phase` offsets it from its neighbours.
#[derive(Component)]
pub struct NeuralLight {
    pub phase: f32,
}

/// Intensity factor of a neural light at `elapsed` seconds.
pub fn pulse_intensity(elapsed: f32, phase: f32) -> f32 {
    PULSE_BASE + (elapsed * PULSE_RATE + phase).sin() * PULSE_AMPLITUDE
}

pub struct AtmospherePlugin;

impl Plugin for AtmospherePlugin {
    fn build(&self, app: &mut App) {
        app
            // Deep blue-black of the inside of a skull
            .insert_resource(ClearColor(hex_to_color(0x0a0a1a)))
            .insert_resource(AmbientLight {
                color: hex_to_color(0x404080),
                brightness: 300.0,
                ..default()
            })
            .add_systems(Startup, setup_atmosphere.after(generate_world))
            .add_systems(Update, pulse_neural_lights);
    }
}

fn setup_atmosphere(mut commands: Commands, mut world_rng: ResMut<WorldRng>) {
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(50.0, 100.0, 50.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let rng = &mut world_rng.rng;
    for i in 0..NEURAL_LIGHT_COUNT {
        let position = Vec3::new(
            (rng.r#gen::<f32>() - 0.5) * 100.0,
            rng.r#gen::<f32>() * 50.0 + 10.0,
            (rng.r#gen::<f32>() - 0.5) * 100.0,
        );
        commands.spawn((
            PointLight {
                color: Color::srgb(0.0, 1.0, 0.0),
                intensity: NEURAL_LIGHT_POWER,
                range: NEURAL_LIGHT_RANGE,
                ..default()
            },
            Transform::from_translation(position),
            NeuralLight { phase: i as f32 },
        ));
    }
}

fn pulse_neural_lights(time: Res<Time>, mut lights: Query<(&NeuralLight, &mut PointLight)>) {
    let t = time.elapsed_secs();
    for (neural, mut light) in lights.iter_mut() {
        light.intensity = pulse_intensity(t, neural.phase) * NEURAL_LIGHT_POWER;
    }
}
