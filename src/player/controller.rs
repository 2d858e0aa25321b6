use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::config::PlayerSettings;
use crate::voxel::types::BlockType;
use crate::voxel::world::VoxelWorld;

/// Directional and jump intent for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MovementIntent {
    /// Local-space direction before normalisation: forward is -Z, right +X.
    pub fn local_direction(&self) -> Vec3 {
        let mut direction = Vec3::ZERO;
        if self.forward {
            direction.z -= 1.0;
        }
        if self.back {
            direction.z += 1.0;
        }
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }
        direction
    }
}

/// Everything the player owns between ticks.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
    pub selected: BlockType,
    /// Horizontal look angle in radians
    pub yaw: f32,
    /// Vertical look angle in radians, within [-pi/2, pi/2]
    pub pitch: f32,
}

impl PlayerState {
    pub fn spawn_at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            grounded: false,
            selected: BlockType::Neuron,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Turn by a raw pointer delta.
    pub fn apply_look(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch = (self.pitch - delta.y * sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    pub fn look_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Integer cell containing the player position.
    pub fn cell(&self) -> IVec3 {
        self.position.floor().as_ivec3()
    }
}

/// Single-actor kinematics: input-driven horizontal motion with
/// per-tick damping, gravity, jumping and a ground clamp against the
/// tallest voxel under the player.
#[derive(Resource, Clone, Debug)]
pub struct PlayerController {
    settings: PlayerSettings,
}

impl PlayerController {
    pub fn new(settings: PlayerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn spawn(&self) -> PlayerState {
        PlayerState::spawn_at(self.settings.spawn_position())
    }

    /// Advance `state` by `dt` seconds.
    pub fn tick(&self, state: &mut PlayerState, intent: &MovementIntent, dt: f32, world: &VoxelWorld) {
        let s = &self.settings;

        let direction = intent.local_direction();
        if direction.length_squared() > 0.0 {
            // Speed is scaled by dt here and again during integration
            let step = direction.normalize() * s.move_speed * dt;
            let step = Quat::from_rotation_y(state.yaw) * step;
            state.velocity.x = step.x;
            state.velocity.z = step.z;
        } else {
            state.velocity.x *= s.horizontal_damping;
            state.velocity.z *= s.horizontal_damping;
        }

        if intent.jump && state.grounded {
            state.velocity.y = s.jump_speed;
            state.grounded = false;
        }

        state.velocity.y += s.gravity * dt;
        state.position += state.velocity * dt;

        let rest_height = self.rest_height(state.position, world);
        if state.position.y <= rest_height {
            state.position.y = rest_height;
            state.velocity.y = 0.0;
            state.grounded = true;
        } else {
            state.grounded = false;
        }
    }

    /// Height the player settles at over the column containing `position`.
    pub fn rest_height(&self, position: Vec3, world: &VoxelWorld) -> f32 {
        let ground = world.ground_height(
            position.x.floor() as i32,
            position.z.floor() as i32,
            self.settings.ground_scan_ceiling,
        );
        ground as f32 + self.settings.rest_offset
    }

    /// Camera pose derived from the player state.
    pub fn camera_transform(&self, state: &PlayerState) -> Transform {
        Transform::from_translation(state.position + Vec3::Y * self.settings.eye_height)
            .with_rotation(state.look_rotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn flat_world(height: i32) -> VoxelWorld {
        let mut world = VoxelWorld::new();
        for x in -3..3 {
            for z in -3..3 {
                world.set_block(IVec3::new(x, height, z), BlockType::Tissue);
            }
        }
        world
    }

    fn controller() -> PlayerController {
        PlayerController::new(PlayerSettings::default())
    }

    #[test]
    fn grounded_idle_player_decays_horizontally() {
        let world = flat_world(5);
        let controller = controller();
        let mut state = PlayerState::spawn_at(Vec3::new(0.5, 6.8, 0.5));
        state.grounded = true;
        state.velocity = Vec3::new(4.0, 0.0, -2.0);

        let idle = MovementIntent::default();
        let mut previous = state.velocity;
        for _ in 0..20 {
            controller.tick(&mut state, &idle, DT, &world);
            assert!((state.velocity.x - previous.x * 0.8).abs() < 1e-6);
            assert!((state.velocity.z - previous.z * 0.8).abs() < 1e-6);
            assert!(state.velocity.x.abs() < previous.x.abs());
            assert_eq!(state.velocity.y, 0.0);
            assert!(state.grounded);
            previous = state.velocity;
        }
    }

    #[test]
    fn free_fall_is_linear_until_landing() {
        let world = flat_world(0);
        let controller = controller();
        let mut state = PlayerState::spawn_at(Vec3::new(0.5, 40.0, 0.5));
        let idle = MovementIntent::default();
        let dt = 0.05;

        for tick in 1..=10 {
            controller.tick(&mut state, &idle, dt, &world);
            let expected = -30.0 * dt * tick as f32;
            assert!((state.velocity.y - expected).abs() < 1e-4);
            assert!(!state.grounded);
        }

        for _ in 0..200 {
            controller.tick(&mut state, &idle, dt, &world);
        }
        assert!(state.grounded);
        assert_eq!(state.velocity.y, 0.0);
        assert!((state.position.y - 1.8).abs() < 1e-6);
    }

    #[test]
    fn jump_only_from_ground() {
        let world = flat_world(5);
        let controller = controller();
        let jump = MovementIntent {
            jump: true,
            ..default()
        };

        let mut airborne = PlayerState::spawn_at(Vec3::new(0.5, 20.0, 0.5));
        controller.tick(&mut airborne, &jump, DT, &world);
        assert!(airborne.velocity.y < 0.0);

        let mut standing = PlayerState::spawn_at(Vec3::new(0.5, 6.8, 0.5));
        standing.grounded = true;
        controller.tick(&mut standing, &jump, DT, &world);
        assert!(!standing.grounded);
        assert!((standing.velocity.y - (15.0 - 30.0 * DT)).abs() < 1e-5);
        assert!(standing.position.y > 6.8);
    }

    #[test]
    fn movement_follows_yaw() {
        let world = flat_world(0);
        let controller = controller();
        let forward = MovementIntent {
            forward: true,
            ..default()
        };

        let mut state = PlayerState::spawn_at(Vec3::new(0.5, 1.8, 0.5));
        controller.tick(&mut state, &forward, 0.1, &world);
        assert!((state.velocity.z - -1.0).abs() < 1e-5);
        assert!(state.velocity.x.abs() < 1e-5);

        // A quarter turn left faces -X
        let mut state = PlayerState::spawn_at(Vec3::new(0.5, 1.8, 0.5));
        state.yaw = FRAC_PI_2;
        controller.tick(&mut state, &forward, 0.1, &world);
        assert!((state.velocity.x - -1.0).abs() < 1e-5);
        assert!(state.velocity.z.abs() < 1e-5);
    }

    #[test]
    fn diagonal_input_is_normalised() {
        let world = flat_world(0);
        let controller = controller();
        let diagonal = MovementIntent {
            forward: true,
            right: true,
            ..default()
        };
        let mut state = PlayerState::spawn_at(Vec3::new(0.5, 1.8, 0.5));
        controller.tick(&mut state, &diagonal, 0.1, &world);
        let horizontal = Vec2::new(state.velocity.x, state.velocity.z);
        assert!((horizontal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn opposing_keys_cancel_into_damping() {
        let world = flat_world(0);
        let controller = controller();
        let both = MovementIntent {
            forward: true,
            back: true,
            ..default()
        };
        let mut state = PlayerState::spawn_at(Vec3::new(0.5, 1.8, 0.5));
        state.velocity.x = 1.0;
        controller.tick(&mut state, &both, DT, &world);
        assert!((state.velocity.x - 0.8).abs() < 1e-6);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut state = PlayerState::spawn_at(Vec3::ZERO);
        state.apply_look(Vec2::new(100.0, -10_000.0), 0.002);
        assert_eq!(state.pitch, FRAC_PI_2);
        assert!((state.yaw - -0.2).abs() < 1e-6);
        state.apply_look(Vec2::new(0.0, 10_000.0), 0.002);
        assert_eq!(state.pitch, -FRAC_PI_2);
    }

    #[test]
    fn camera_sits_at_eye_height() {
        let controller = controller();
        let state = PlayerState::spawn_at(Vec3::new(1.0, 7.0, -2.0));
        let camera = controller.camera_transform(&state);
        assert!((camera.translation - Vec3::new(1.0, 8.6, -2.0)).length() < 1e-6);
    }

    #[test]
    fn ground_query_floors_negative_positions() {
        let mut world = VoxelWorld::new();
        world.set_block(IVec3::new(-1, 4, -1), BlockType::Tissue);
        let controller = controller();
        let rest = controller.rest_height(Vec3::new(-0.2, 30.0, -0.7), &world);
        assert!((rest - 5.8).abs() < 1e-6);
    }
}
